//! Error types for the dice engine.

/// Errors that can occur while preparing a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The dice count could not be read as a non-negative integer.
    #[error("{0} is not a valid number of dice.")]
    InvalidDiceCount(String),

    /// The requested dice system is not implemented.
    #[error("{0} is not a supported dice system.")]
    UnsupportedSystem(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
