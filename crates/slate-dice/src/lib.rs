//! Dice engine for the Slate bot.
//!
//! Implements the Chronicles of Darkness success-counting mechanic:
//! reroll ("again") chains, rote rerolls, weakness penalties and the
//! chance die, plus the one-line summary rendered back to the table.

pub mod dice;
pub mod error;
pub mod format;
pub mod resolution;

pub use dice::{DieRoller, RngRoller, ScriptedRoller};
pub use error::{DiceError, DiceResult};
pub use format::format_cofd;
pub use resolution::cofd::{RollOutcome, RollRequest, resolve};
