//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Feed, Calendar).
//! Allows for pluggable implementations in the Infrastructure layer.

use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Slack, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked/editable)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for a syndication-feed fetcher.
///
/// Resolves exactly once per call: `Ok` with formatted text summarising
/// recent posts, or `Err` with whatever the retrieval failed on.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Abstract interface for a calendar fetcher.
///
/// Resolves exactly once per call with formatted text summarising
/// upcoming events.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn fetch(&self, calendar_id: &str) -> Result<String>;
}
