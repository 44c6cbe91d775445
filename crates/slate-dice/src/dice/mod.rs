//! Random sources for dice rolling.
//!
//! The resolver never touches a global generator. Every roll draws from an
//! injected [`DieRoller`], so a scripted sequence of draws makes a roll fully
//! deterministic.

pub mod scripted;

pub use scripted::ScriptedRoller;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The number of faces on a Chronicles of Darkness die.
pub const FACES: u32 = 10;

/// A source of uniformly distributed die draws.
pub trait DieRoller {
    /// Draw a value in `0..sides`.
    ///
    /// The caller adds one to obtain the face, so a d10 draw of `9` is a `10`.
    fn draw(&mut self, sides: u32) -> u32;
}

impl<F> DieRoller for F
where
    F: FnMut(u32) -> u32,
{
    fn draw(&mut self, sides: u32) -> u32 {
        self(sides)
    }
}

/// A [`DieRoller`] backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// Create a roller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller with a fixed seed for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DieRoller for RngRoller {
    fn draw(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.random_range(0..sides)
    }
}
