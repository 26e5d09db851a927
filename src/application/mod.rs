//! # Application Layer
//!
//! Orchestration of the bot: routing incoming messages to commands.

pub mod router;
