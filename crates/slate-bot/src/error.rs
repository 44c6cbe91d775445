//! Error types for the bot.

use crate::session::SessionError;

/// Errors raised while setting up or running the bot.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Two commands were registered under the same name.
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    /// The configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global logger was already installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// The session failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Reading input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;
