//! Routing of chat messages to registered commands.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::command::{CommandContext, SlateCommand};
use crate::error::{BotError, BotResult};
use crate::session::{MessageEvent, Session};

/// The set of commands the bot answers to.
pub struct CommandRegistry {
    prefix: String,
    commands: BTreeMap<String, Arc<dyn SlateCommand>>,
}

impl CommandRegistry {
    /// Create an empty registry for messages starting with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            commands: BTreeMap::new(),
        }
    }

    /// Register a command under its own name.
    pub fn register(&mut self, command: impl SlateCommand + 'static) -> BotResult<()> {
        let name = command.name().to_lowercase();
        if name == "help" || self.commands.contains_key(&name) {
            return Err(BotError::DuplicateCommand(name));
        }
        tracing::debug!(command = %name, "registered command");
        self.commands.insert(name, Arc::new(command));
        Ok(())
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SlateCommand>> {
        self.commands.get(&name.to_lowercase())
    }

    /// Names of all registered commands, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Help text: a command listing, or one command's usage.
    pub fn help(&self, topic: Option<&str>) -> String {
        match topic {
            Some(name) => match self.get(name) {
                Some(command) => command.usage(),
                None => format!("Unknown command: {name}"),
            },
            None => {
                let mut lines = vec![
                    "Available commands:".to_string(),
                    format!("  {}help - List commands or show usage", self.prefix),
                ];
                for (name, command) in &self.commands {
                    lines.push(format!("  {}{name} - {}", self.prefix, command.synopsis()));
                }
                lines.join("\n")
            }
        }
    }

    /// Dispatch a message. Returns true if a command handled it.
    pub fn handle(
        &self,
        ctx: &CommandContext,
        session: &mut dyn Session,
        event: &MessageEvent,
    ) -> bool {
        let Some(body) = event.content.trim().strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        let mut tokens = body.split_whitespace().map(str::to_string);
        let Some(name) = tokens.next() else {
            return false;
        };
        let args: Vec<String> = tokens.collect();

        if name.eq_ignore_ascii_case("help") {
            let text = self.help(args.first().map(String::as_str));
            if let Err(err) = session.channel_message_send(&event.channel_id, &text) {
                tracing::error!(channel = %event.channel_id, %err, "failed to send help");
            }
            return true;
        }

        match self.get(&name) {
            Some(command) => {
                tracing::debug!(
                    command = %name,
                    author = %event.author_id,
                    channel = %event.channel_id,
                    "dispatching command"
                );
                command.execute(ctx, &args, session, event);
                true
            }
            None => {
                tracing::debug!(command = %name, "ignoring unknown command");
                false
            }
        }
    }
}
