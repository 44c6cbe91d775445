//! The contract every chat command implements.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::session::{MessageEvent, Session};

/// A cancellable context handed to each command invocation.
///
/// Clones share the same cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    cancelled: Arc<AtomicBool>,
}

impl CommandContext {
    /// Create a fresh, uncancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel this context and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A command that can be registered with the bot.
pub trait SlateCommand: Send + Sync {
    /// The token used to route input to this command.
    fn name(&self) -> &str;

    /// A one-line description of what the command does.
    fn synopsis(&self) -> &str;

    /// Full usage text for the command.
    fn usage(&self) -> String;

    /// Run the command. Output is delivered through `session`.
    fn execute(
        &self,
        ctx: &CommandContext,
        args: &[String],
        session: &mut dyn Session,
        event: &MessageEvent,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_shared_between_clones() {
        let ctx = CommandContext::new();
        let child = ctx.clone();
        assert!(!child.is_cancelled());
        ctx.cancel();
        assert!(child.is_cancelled());
    }
}
