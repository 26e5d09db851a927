//! # Infrastructure Layer
//!
//! Adapters for external systems: the Matrix homeserver, the INN
//! syndication feed and the Google Calendar API.

pub mod calendar;
pub mod feed;
pub mod matrix;
