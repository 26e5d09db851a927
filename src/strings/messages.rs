//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! The link replies and the `inn` trailer are fixed text; the URLs inside
//! them are part of the reply and must not drift.

pub const UNKNOWN_COMMAND: &str = "❓ Unknown command.";

pub const YOUTUBE_REPLY: &str = "You can find and subscribe to INN on YouTube here: \
     https://www.youtube.com/channel/UCCNuWjBJHxtwMCQosW-zicQ";

pub const TWITTER_REPLY: &str =
    "You can find and follow INN on Twitter at https://twitter.com/inn_starcitizen";

pub const FACEBOOK_REPLY: &str =
    "You can find and like INN on Facebook at https://www.facebook.com/ImperialNewsNetworkSC";

pub const TWITCH_REPLY: &str =
    "You can find and follow INN on Twitch here: https://twitch.tv/innlive";

pub const ORG_REPLY: &str =
    "You can check out the INN Organization on RSI here: https://robertsspaceindustries.com/orgs/INN";

pub const GITHUB_REPLY: &str = "You can check out the INN's open source projects here: \
     https://github.com/ImperialNewsNetwork/inn-bot";

/// Appended after the feed and calendar summaries in the `inn` reply.
pub const INN_TRAILER: &str =
    "\n**Check out the rest of INN's content at:** http://imperialnews.network/";

/// Syndication feed polled by the `inn` command.
pub const INN_FEED_URL: &str = "http://imperialnews.network/feed/";

/// Public Google calendar queried by the `inn` command.
pub const INN_CALENDAR_ID: &str = "kbvcdsv2n7ro54s0cgdh48c7k8@group.calendar.google.com";

pub const HELP_HEADER: &str = "**🤖 INN Bot Help**\n";

pub fn command_failed(name: &str, err: &str) -> String {
    format!("❌ **{name} failed**: {err}")
}
