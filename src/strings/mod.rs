//! # Strings Module
//!
//! Centralizes user-facing strings and fixed endpoints.
//! Ensures consistency in messaging and easier localization/updates.

pub mod messages;
