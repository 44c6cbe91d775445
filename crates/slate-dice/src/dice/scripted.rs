//! A roller that replays a fixed list of draws.

use super::DieRoller;

/// Replays a scripted sequence of draws, then repeats the last one.
///
/// An empty script always draws `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Create a roller that yields `draws` in order.
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// How many draws have been consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for ScriptedRoller {
    fn draw(&mut self, sides: u32) -> u32 {
        let value = self
            .draws
            .get(self.cursor)
            .or(self.draws.last())
            .copied()
            .unwrap_or(0);
        self.cursor += 1;
        if sides == 0 { 0 } else { value % sides }
    }
}
