//! Resolution of dice requests into outcomes.
//!
//! Only the Chronicles of Darkness system is implemented. The system is
//! still named explicitly so the command surface can reject others.

pub mod cofd;

use crate::error::{DiceError, DiceResult};

/// A dice system the engine knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiceSystem {
    /// Chronicles of Darkness d10 success counting.
    #[default]
    Cofd,
}

impl DiceSystem {
    /// Parse a system name such as "cofd" or "nwod".
    pub fn parse(name: &str) -> DiceResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "cofd" | "nwod" => Ok(Self::Cofd),
            _ => Err(DiceError::UnsupportedSystem(name.to_string())),
        }
    }
}

impl std::fmt::Display for DiceSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cofd => write!(f, "cofd"),
        }
    }
}

/// Parse a user-supplied dice count.
pub fn parse_dice_count(arg: &str) -> DiceResult<u32> {
    arg.trim()
        .parse::<u32>()
        .map_err(|_| DiceError::InvalidDiceCount(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_parse() {
        assert_eq!(DiceSystem::parse("cofd"), Ok(DiceSystem::Cofd));
        assert_eq!(DiceSystem::parse("CofD"), Ok(DiceSystem::Cofd));
        assert_eq!(DiceSystem::parse("nwod"), Ok(DiceSystem::Cofd));
        assert_eq!(
            DiceSystem::parse("dnd"),
            Err(DiceError::UnsupportedSystem("dnd".to_string()))
        );
    }

    #[test]
    fn system_display() {
        assert_eq!(DiceSystem::Cofd.to_string(), "cofd");
    }

    #[test]
    fn dice_count_parse() {
        assert_eq!(parse_dice_count("5"), Ok(5));
        assert_eq!(parse_dice_count("0"), Ok(0));
    }

    #[test]
    fn invalid_dice_count_message() {
        let err = parse_dice_count("five").unwrap_err();
        assert_eq!(err.to_string(), "five is not a valid number of dice.");
        assert!(parse_dice_count("-3").is_err());
        assert!(parse_dice_count("2.5").is_err());
    }
}
