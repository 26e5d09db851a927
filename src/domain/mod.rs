//! # Domain Layer
//!
//! Core definitions and traits that define the contract between the bot's
//! layers. Independent of specific frameworks (mostly).

pub mod config;
pub mod traits;
