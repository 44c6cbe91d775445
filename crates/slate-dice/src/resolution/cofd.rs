//! Chronicles of Darkness success counting.
//!
//! Roll a pool of d10s. Each die showing 8 or more is a success. A die at or
//! above the again-threshold grants one more die, which may itself explode.
//! Rote rerolls every failed die once; weakness turns every 1 into a lost
//! success. A pool of zero dice is a chance die: one die that only succeeds
//! on a 10.

use serde::{Deserialize, Serialize};

use crate::dice::{DieRoller, FACES};

/// Lowest face counted as a success on an ordinary die.
pub const SUCCESS_FACE: u32 = 8;

/// Lowest face counted as a success on a chance die.
pub const CHANCE_SUCCESS_FACE: u32 = FACES;

/// The minimum face, penalised under weakness.
pub const MIN_FACE: u32 = 1;

/// Default again-threshold (10-again).
pub const DEFAULT_AGAIN: u32 = 10;

/// Default success count flagged as exceptional.
pub const DEFAULT_EXCEPTIONAL: u32 = 5;

/// Upper bound on explosion generations resolved for a single roll.
pub const MAX_REROLL_GENERATIONS: usize = 100;

/// A single CofD roll as requested by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Number of dice in the pool. Zero rolls a chance die.
    pub dice: u32,
    /// Faces at or above this value grant an extra die.
    pub again: u32,
    /// Reroll every failed die once.
    pub rote: bool,
    /// Each die showing a 1 removes a success.
    pub weakness: bool,
    /// Success count at or above which the result is exceptional.
    pub exceptional: u32,
}

impl Default for RollRequest {
    fn default() -> Self {
        Self {
            dice: 0,
            again: DEFAULT_AGAIN,
            rote: false,
            weakness: false,
            exceptional: DEFAULT_EXCEPTIONAL,
        }
    }
}

impl RollRequest {
    /// A request for `dice` dice with default modifiers.
    pub fn new(dice: u32) -> Self {
        Self {
            dice,
            ..Self::default()
        }
    }

    /// Set the again-threshold.
    pub fn with_again(mut self, again: u32) -> Self {
        self.again = again;
        self
    }

    /// Enable or disable rote rerolls.
    pub fn with_rote(mut self, rote: bool) -> Self {
        self.rote = rote;
        self
    }

    /// Enable or disable the weakness penalty.
    pub fn with_weakness(mut self, weakness: bool) -> Self {
        self.weakness = weakness;
        self
    }

    /// Set the exceptional-success threshold.
    pub fn with_exceptional(mut self, exceptional: u32) -> Self {
        self.exceptional = exceptional;
        self
    }

    /// Whether this request rolls a chance die.
    pub fn is_chance(&self) -> bool {
        self.dice == 0
    }
}

/// The result of resolving a [`RollRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Faces of the initial pool, in roll order.
    pub rolls: Vec<u32>,
    /// Rote rerolls and explosion dice, flattened in generation order.
    pub rerolls: Vec<u32>,
    /// Total successes, never below zero.
    pub successes: u32,
    /// Set when explosion generations were cut off at the safety cap.
    pub truncated: bool,
}

impl RollOutcome {
    /// Whether the success total reaches the given threshold.
    pub fn is_exceptional(&self, threshold: u32) -> bool {
        self.successes >= threshold
    }

    /// Total number of dice drawn, including rerolls.
    pub fn dice_drawn(&self) -> usize {
        self.rolls.len() + self.rerolls.len()
    }
}

/// Dice rolled in one generation of a roll.
#[derive(Debug, Default)]
struct Generation {
    rolls: Vec<u32>,
    rote: Vec<u32>,
    net: i64,
    explosions: u32,
}

fn roll_generation<R>(
    count: u32,
    success_face: u32,
    request: &RollRequest,
    roller: &mut R,
) -> Generation
where
    R: DieRoller + ?Sized,
{
    let mut generation = Generation::default();

    for _ in 0..count {
        let face = roller.draw(FACES) + 1;
        generation.rolls.push(face);

        let mut scored = face;
        if request.rote && face < success_face {
            scored = roller.draw(FACES) + 1;
            generation.rote.push(scored);
        }

        if scored >= success_face {
            generation.net += 1;
        }
        if scored >= request.again {
            generation.explosions += 1;
        }
        if request.weakness && scored == MIN_FACE {
            generation.net -= 1;
        }
    }

    generation
}

/// Resolve a roll, drawing every die from `roller`.
///
/// The roller is called exactly once per die, rote reroll and explosion die.
/// Successes are clamped per generation: each generation's net is floored at
/// zero after adding everything rolled after it.
pub fn resolve<R>(request: &RollRequest, roller: &mut R) -> RollOutcome
where
    R: DieRoller + ?Sized,
{
    let (count, success_face) = if request.is_chance() {
        (1, CHANCE_SUCCESS_FACE)
    } else {
        (request.dice, SUCCESS_FACE)
    };

    let first = roll_generation(count, success_face, request, roller);
    let mut outcome = RollOutcome {
        rolls: first.rolls,
        rerolls: first.rote,
        ..RollOutcome::default()
    };
    let mut nets = vec![first.net];
    let mut pending = first.explosions;

    while pending > 0 {
        if nets.len() > MAX_REROLL_GENERATIONS {
            tracing::warn!(
                again = request.again,
                pending,
                "reroll chain exceeded {MAX_REROLL_GENERATIONS} generations, truncating"
            );
            outcome.truncated = true;
            break;
        }
        let next = roll_generation(pending, SUCCESS_FACE, request, roller);
        outcome.rerolls.extend(next.rolls);
        outcome.rerolls.extend(next.rote);
        nets.push(next.net);
        pending = next.explosions;
    }

    let total = nets.iter().rev().fold(0_i64, |later, net| (net + later).max(0));
    outcome.successes = u32::try_from(total).unwrap_or(u32::MAX);

    tracing::debug!(
        dice = request.dice,
        again = request.again,
        rote = request.rote,
        weakness = request.weakness,
        successes = outcome.successes,
        drawn = outcome.dice_drawn(),
        "resolved cofd roll"
    );

    outcome
}
