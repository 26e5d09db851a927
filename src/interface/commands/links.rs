//! # Link Commands
//!
//! Six static commands that each reply with one fixed social-media link.
//! They ignore their context entirely and cannot fail.

use super::{Command, CommandContext};
use crate::strings::messages;
use anyhow::Result;
use async_trait::async_trait;

/// A command whose reply is a fixed sentence containing one fixed URL.
pub struct LinkCommand {
    name: &'static str,
    description: &'static str,
    reply: &'static str,
}

#[async_trait]
impl Command for LinkCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    async fn respond(&self, _ctx: &CommandContext<'_>) -> Result<String> {
        Ok(self.reply.to_string())
    }
}

pub fn youtube() -> LinkCommand {
    LinkCommand {
        name: "innyt",
        description: "Subscribe to the Imperial News Network on YouTube!",
        reply: messages::YOUTUBE_REPLY,
    }
}

pub fn twitter() -> LinkCommand {
    LinkCommand {
        name: "inntwitter",
        description: "Follow INN on Twitter!",
        reply: messages::TWITTER_REPLY,
    }
}

pub fn facebook() -> LinkCommand {
    LinkCommand {
        name: "innfb",
        description: "Like INN on Facebook!",
        reply: messages::FACEBOOK_REPLY,
    }
}

pub fn twitch() -> LinkCommand {
    LinkCommand {
        name: "rsitwitch",
        description: "Follow INN on Twitch!",
        reply: messages::TWITCH_REPLY,
    }
}

pub fn org() -> LinkCommand {
    LinkCommand {
        name: "org",
        description: "Get a link to the INN organization.",
        reply: messages::ORG_REPLY,
    }
}

pub fn github() -> LinkCommand {
    LinkCommand {
        name: "github",
        description: "Check out INN's open source projects.",
        reply: messages::GITHUB_REPLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    fn test_config() -> AppConfig {
        let yaml = r#"
services:
  matrix:
    username: "@inn-bot:matrix.org"
    password: "test"
    homeserver: "https://matrix.org"
"#;
        serde_yaml::from_str(yaml).unwrap()
    }

    fn context(config: &AppConfig) -> CommandContext<'_> {
        CommandContext {
            message: "whatever the user typed !@#$",
            sender: "@someone:matrix.org",
            config,
        }
    }

    #[tokio::test]
    async fn test_replies_are_verbatim() {
        let config = test_config();
        let ctx = context(&config);

        let cases: Vec<(LinkCommand, &str)> = vec![
            (
                youtube(),
                "You can find and subscribe to INN on YouTube here: \
                 https://www.youtube.com/channel/UCCNuWjBJHxtwMCQosW-zicQ",
            ),
            (
                twitter(),
                "You can find and follow INN on Twitter at https://twitter.com/inn_starcitizen",
            ),
            (
                facebook(),
                "You can find and like INN on Facebook at \
                 https://www.facebook.com/ImperialNewsNetworkSC",
            ),
            (
                twitch(),
                "You can find and follow INN on Twitch here: https://twitch.tv/innlive",
            ),
            (
                org(),
                "You can check out the INN Organization on RSI here: \
                 https://robertsspaceindustries.com/orgs/INN",
            ),
            (
                github(),
                "You can check out the INN's open source projects here: \
                 https://github.com/ImperialNewsNetwork/inn-bot",
            ),
        ];

        for (cmd, expected) in cases {
            let reply = cmd.respond(&ctx).await.unwrap();
            assert_eq!(reply, expected, "wrong reply for {}", cmd.name());
        }
    }

    #[tokio::test]
    async fn test_descriptor_stable_across_invocations() {
        let config = test_config();
        let ctx = context(&config);
        let cmd = youtube();

        let name_before = cmd.name();
        let desc_before = cmd.description();
        let hidden_before = cmd.hidden();

        let first = cmd.respond(&ctx).await.unwrap();
        let second = cmd.respond(&ctx).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cmd.name(), name_before);
        assert_eq!(cmd.description(), desc_before);
        assert_eq!(cmd.hidden(), hidden_before);
    }

    #[test]
    fn test_descriptions_are_verbatim() {
        let cases: Vec<(LinkCommand, &str)> = vec![
            (youtube(), "Subscribe to the Imperial News Network on YouTube!"),
            (twitter(), "Follow INN on Twitter!"),
            (facebook(), "Like INN on Facebook!"),
            (twitch(), "Follow INN on Twitch!"),
            (org(), "Get a link to the INN organization."),
            (github(), "Check out INN's open source projects."),
        ];

        for (cmd, expected) in cases {
            assert_eq!(cmd.description(), expected, "wrong description for {}", cmd.name());
        }
    }

    #[test]
    fn test_all_link_commands_visible() {
        for cmd in [youtube(), twitter(), facebook(), twitch(), org(), github()] {
            assert!(!cmd.hidden(), "{} should be listed in help", cmd.name());
        }
    }
}
