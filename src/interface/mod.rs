//! # Interface Layer
//!
//! User-facing command implementations, invoked by the Router.

pub mod commands;
