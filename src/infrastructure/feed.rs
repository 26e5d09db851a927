//! # RSS Feed Adapter
//!
//! Implements the `FeedProvider` trait against an RSS 2.0 endpoint.
//! Retrieval is `reqwest`, parsing is `quick_xml`'s serde support, and the
//! formatting step is a pure function over the parsed document so it can be
//! tested without a network.

use crate::domain::config::AppConfig;
use crate::domain::traits::FeedProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

const EXCERPT_LEN: usize = 140;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "item")]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    description: Option<String>,
}

pub struct RssFeed {
    client: reqwest::Client,
    max_items: usize,
}

impl RssFeed {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            max_items: config.feed.max_items,
        }
    }
}

#[async_trait]
impl FeedProvider for RssFeed {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching feed {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch feed {url}"))?
            .error_for_status()
            .with_context(|| format!("Feed {url} returned an error status"))?
            .text()
            .await
            .context("Failed to read feed body")?;

        let rss: Rss =
            quick_xml::de::from_str(&body).with_context(|| format!("Feed {url} is not valid RSS"))?;
        Ok(format_feed(&rss, self.max_items))
    }
}

fn format_feed(rss: &Rss, max_items: usize) -> String {
    let mut out = format!("**📰 Latest from {}:**\n", rss.channel.title);
    if rss.channel.items.is_empty() {
        out.push_str("_No recent posts._\n");
        return out;
    }
    for item in rss.channel.items.iter().take(max_items) {
        out.push_str(&format!("• [{}]({})\n", item.title, item.link));
        if let Some(desc) = &item.description {
            let excerpt = excerpt(desc);
            if !excerpt.is_empty() {
                out.push_str(&format!("  _{excerpt}_\n"));
            }
        }
    }
    out
}

/// Plain-text excerpt of an item description: HTML tags stripped,
/// whitespace collapsed, truncated on a char boundary.
fn excerpt(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    let mut collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > EXCERPT_LEN {
        collapsed = collapsed.chars().take(EXCERPT_LEN).collect::<String>() + "…";
    }
    collapsed
}
