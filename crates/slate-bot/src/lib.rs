//! Chat command surface for the Slate dice bot.
//!
//! Commands implement [`SlateCommand`] and talk to the outside world only
//! through a [`Session`]. The [`CommandRegistry`] routes incoming messages to
//! commands by name. Ships with the CofD `roll` command and a console session
//! for running the bot from a terminal.

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod roll;
pub mod session;

pub use command::{CommandContext, SlateCommand};
pub use config::SlateConfig;
pub use error::{BotError, BotResult};
pub use registry::CommandRegistry;
pub use roll::{RollArgs, RollCommand, RollError};
pub use session::{ConsoleSession, MessageEvent, SentMessage, Session, SessionError};
