//! # Command Router
//!
//! Routes incoming messages to the appropriate command (in `interface/commands`).
//! It strips the configured prefix, matches the command name and dispatches
//! with the invocation context.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::config::AppConfig;
use crate::domain::traits::ChatProvider;
use crate::interface::commands::{Command, CommandContext};
use crate::strings::messages;

pub struct CommandRouter {
    config: AppConfig,
    registry: Vec<Arc<dyn Command>>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, registry: Vec<Arc<dyn Command>>) -> Self {
        Self { config, registry }
    }

    /// Dispatches one incoming message. Messages without the command prefix
    /// are ignored; a recognized command sends exactly one reply (or one
    /// error notice if it fails).
    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        let Some(stripped) = msg.strip_prefix(&self.config.commands.prefix) else {
            return Ok(());
        };

        // Command word only; anything after the first space is argument
        // text, carried in the context.
        let name = stripped.split_whitespace().next().unwrap_or("");
        if name.is_empty() {
            return Ok(());
        }

        tracing::info!("Router dispatching cmd='{}' sender='{}'", name, sender);

        if name == "help" {
            let _ = chat.send_message(&self.render_help()).await;
            return Ok(());
        }

        let Some(command) = self.registry.iter().find(|c| c.name() == name) else {
            let _ = chat.send_notification(messages::UNKNOWN_COMMAND).await;
            return Ok(());
        };

        let ctx = CommandContext {
            message: msg,
            sender,
            config: &self.config,
        };

        match command.respond(&ctx).await {
            Ok(reply) => {
                let _ = chat.send_message(&reply).await;
            }
            Err(err) => {
                tracing::error!("Command '{}' failed: {:#}", command.name(), err);
                let _ = chat
                    .send_notification(&messages::command_failed(command.name(), &err.to_string()))
                    .await;
            }
        }

        Ok(())
    }

    /// Help listing built from the registry; hidden commands are skipped.
    fn render_help(&self) -> String {
        let prefix = &self.config.commands.prefix;
        let mut out = String::from(messages::HELP_HEADER);
        for command in self.registry.iter().filter(|c| !c.hidden()) {
            out.push_str(&format!("* {}{}: {}\n", prefix, command.name(), command.description()));
        }
        out
    }
}
