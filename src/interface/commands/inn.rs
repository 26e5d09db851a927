//! # INN Command
//!
//! The one aggregating command: fetches the INN syndication feed, then the
//! INN community calendar, and replies with both summaries plus a fixed
//! trailer pointing at the main site.

use super::{Command, CommandContext};
use crate::domain::traits::{CalendarProvider, FeedProvider};
use crate::strings::messages;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub struct InnCommand {
    feed: Arc<dyn FeedProvider>,
    calendar: Arc<dyn CalendarProvider>,
}

impl InnCommand {
    pub fn new(feed: Arc<dyn FeedProvider>, calendar: Arc<dyn CalendarProvider>) -> Self {
        Self { feed, calendar }
    }
}

#[async_trait]
impl Command for InnCommand {
    fn name(&self) -> &'static str {
        "inn"
    }

    fn description(&self) -> &'static str {
        "Get the latest INN posts."
    }

    async fn respond(&self, _ctx: &CommandContext<'_>) -> Result<String> {
        // Strictly sequential: the calendar fetch only starts after the
        // feed fetch has resolved, and the reply always reads
        // feed -> calendar -> trailer. The first failure propagates and no
        // partial reply is produced.
        let feed_text = self.feed.fetch(messages::INN_FEED_URL).await?;
        let calendar_text = self.calendar.fetch(messages::INN_CALENDAR_ID).await?;
        Ok(format!(
            "{feed_text}{calendar_text}{}",
            messages::INN_TRAILER
        ))
    }
}
