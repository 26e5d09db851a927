//! # Commands
//!
//! The polymorphic command surface of the bot. Each command exposes a
//! stable descriptor (name, description, visibility) plus a single async
//! `respond` operation. The Router owns the registry and dispatches by
//! exact name match.

pub mod inn;
pub mod links;

use crate::domain::config::AppConfig;
use crate::domain::traits::{CalendarProvider, FeedProvider};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Invocation context handed to every command by the dispatch host.
///
/// The commands in this bot ignore all of it, but it is part of the
/// dispatch contract and richer commands are free to use it.
pub struct CommandContext<'a> {
    pub message: &'a str,
    pub sender: &'a str,
    pub config: &'a AppConfig,
}

/// A named, dispatchable unit that produces a single text reply.
///
/// `respond` completes exactly once per invocation: either `Ok` with the
/// fully formed reply or `Err` with the first failure encountered. No
/// partial replies, no streaming.
#[async_trait]
pub trait Command: Send + Sync {
    /// Unique dispatch key (without the configured prefix).
    fn name(&self) -> &'static str;

    /// Human-readable one-liner for help listings.
    fn description(&self) -> &'static str;

    /// Hidden commands still dispatch but are omitted from help.
    fn hidden(&self) -> bool {
        false
    }

    async fn respond(&self, ctx: &CommandContext<'_>) -> Result<String>;
}

/// Builds the full command registry.
///
/// Order here is the order commands appear in help.
pub fn registry(
    feed: Arc<dyn FeedProvider>,
    calendar: Arc<dyn CalendarProvider>,
) -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(links::youtube()),
        Arc::new(links::twitter()),
        Arc::new(links::facebook()),
        Arc::new(links::twitch()),
        Arc::new(inn::InnCommand::new(feed, calendar)),
        Arc::new(links::org()),
        Arc::new(links::github()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::commands::inn::tests::{StubCalendar, StubFeed};

    #[test]
    fn test_registry_names_are_unique() {
        let registry = registry(
            Arc::new(StubFeed::ok("F")),
            Arc::new(StubCalendar::ok("C")),
        );
        let mut names: Vec<&str> = registry.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_registry_covers_documented_surface() {
        let registry = registry(
            Arc::new(StubFeed::ok("F")),
            Arc::new(StubCalendar::ok("C")),
        );
        for expected in [
            "innyt",
            "inntwitter",
            "innfb",
            "rsitwitch",
            "inn",
            "org",
            "github",
        ] {
            assert!(
                registry.iter().any(|c| c.name() == expected),
                "missing command {expected}"
            );
        }
    }
}
