//! # Google Calendar Adapter
//!
//! Implements the `CalendarProvider` trait against the Google Calendar v3
//! events endpoint, authenticated with an API key. Formatting is a pure
//! function over the deserialized payload.

use crate::domain::config::AppConfig;
use crate::domain::traits::CalendarProvider;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

const EVENTS_ENDPOINT: &str = "https://www.googleapis.com/calendar/v3/calendars";

#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    items: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    #[serde(default)]
    summary: String,
    start: Option<EventTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventTime {
    date_time: Option<String>,
    /// Set instead of `dateTime` for all-day events.
    date: Option<String>,
}

pub struct GoogleCalendar {
    client: reqwest::Client,
    api_key: Option<String>,
    max_events: usize,
}

impl GoogleCalendar {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.calendar.api_key.clone(),
            max_events: config.calendar.max_events,
        }
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendar {
    async fn fetch(&self, calendar_id: &str) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            bail!("calendar.api_key is not configured");
        };

        tracing::debug!("Fetching calendar {}", calendar_id);
        let time_min = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let response: EventsResponse = self
            .client
            .get(format!("{EVENTS_ENDPOINT}/{calendar_id}/events"))
            .query(&[
                ("key", api_key.as_str()),
                ("timeMin", time_min.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
                ("maxResults", &self.max_events.to_string()),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to fetch calendar {calendar_id}"))?
            .error_for_status()
            .with_context(|| format!("Calendar {calendar_id} returned an error status"))?
            .json()
            .await
            .context("Failed to parse calendar response")?;

        Ok(format_events(&response, self.max_events))
    }
}

fn format_events(response: &EventsResponse, max_events: usize) -> String {
    let mut out = if response.summary.is_empty() {
        String::from("**📅 Upcoming events:**\n")
    } else {
        format!("**📅 Upcoming events for {}:**\n", response.summary)
    };
    if response.items.is_empty() {
        out.push_str("_No upcoming events._\n");
        return out;
    }
    for event in response.items.iter().take(max_events) {
        match event.start.as_ref().and_then(format_start) {
            Some(start) => out.push_str(&format!("• {} — {}\n", event.summary, start)),
            None => out.push_str(&format!("• {}\n", event.summary)),
        }
    }
    out
}

fn format_start(start: &EventTime) -> Option<String> {
    if let Some(date_time) = &start.date_time {
        let parsed = DateTime::parse_from_rfc3339(date_time).ok()?;
        return Some(parsed.format("%a %b %-d, %H:%M %Z").to_string());
    }
    start.date.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "summary": "INN Community Calendar",
        "items": [
            {
                "summary": "INN Live Show",
                "start": { "dateTime": "2017-06-02T20:00:00Z" }
            },
            {
                "summary": "Community Game Day",
                "start": { "date": "2017-06-10" }
            },
            {
                "summary": "Mystery Event"
            }
        ]
    }"#;

    #[test]
    fn test_format_events() {
        let response: EventsResponse = serde_json::from_str(SAMPLE).unwrap();
        let text = format_events(&response, 5);

        assert!(text.starts_with("**📅 Upcoming events for INN Community Calendar:**\n"));
        assert!(text.contains("• INN Live Show — Fri Jun 2, 20:00 +00:00\n"));
        assert!(text.contains("• Community Game Day — 2017-06-10\n"));
        assert!(text.contains("• Mystery Event\n"));
    }

    #[test]
    fn test_max_events_caps_output() {
        let response: EventsResponse = serde_json::from_str(SAMPLE).unwrap();
        let text = format_events(&response, 1);

        assert!(text.contains("INN Live Show"));
        assert!(!text.contains("Community Game Day"));
    }

    #[test]
    fn test_empty_calendar_has_placeholder() {
        let response: EventsResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        let text = format_events(&response, 5);
        assert_eq!(text, "**📅 Upcoming events:**\n_No upcoming events._\n");
    }
}
