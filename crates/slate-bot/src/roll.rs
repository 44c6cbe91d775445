//! The `roll` command.

use std::sync::atomic::{AtomicU64, Ordering};

use clap::{CommandFactory, Parser};
use slate_dice::resolution::DiceSystem;
use slate_dice::resolution::cofd::{DEFAULT_AGAIN, DEFAULT_EXCEPTIONAL};
use slate_dice::resolution::parse_dice_count;
use slate_dice::{DiceError, DieRoller, RngRoller, RollRequest, format_cofd, resolve};

use crate::command::{CommandContext, SlateCommand};
use crate::session::{MessageEvent, Session};

/// Arguments accepted by the `roll` command.
#[derive(Debug, Parser)]
#[command(
    name = "roll",
    about = "Roll a Chronicles of Darkness dice pool",
    no_binary_name = true,
    disable_version_flag = true,
    allow_negative_numbers = true
)]
pub struct RollArgs {
    /// Number of dice to roll (0 or omitted rolls a chance die)
    pub dice: Option<String>,

    /// Dice system to roll with
    #[arg(short, long, default_value = "cofd")]
    pub system: String,

    /// Faces at or above this value roll again
    #[arg(short, long, default_value_t = DEFAULT_AGAIN)]
    pub again: u32,

    /// Reroll failed dice once
    #[arg(short, long)]
    pub rote: bool,

    /// Each 1 removes a success
    #[arg(short, long)]
    pub weakness: bool,

    /// Successes needed for an exceptional success
    #[arg(short, long, default_value_t = DEFAULT_EXCEPTIONAL)]
    pub exceptional: u32,

    /// Show every die rolled
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors reported back to the player instead of a roll.
#[derive(Debug, thiserror::Error)]
pub enum RollError {
    /// The dice count or system was rejected.
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// The arguments could not be parsed, or help was requested.
    #[error("{0}")]
    Usage(String),
}

/// Rolls dice for the table.
///
/// Every invocation gets its own random source, so concurrent rolls never
/// share generator state.
#[derive(Debug, Default)]
pub struct RollCommand {
    seed: Option<u64>,
    invocations: AtomicU64,
}

impl RollCommand {
    /// A roll command drawing from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// A roll command whose random sources derive from `seed`.
    ///
    /// The n-th invocation is seeded with `seed + n`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            invocations: AtomicU64::new(0),
        }
    }

    fn roller(&self) -> RngRoller {
        match self.seed {
            Some(seed) => {
                let n = self.invocations.fetch_add(1, Ordering::Relaxed);
                RngRoller::seeded(seed.wrapping_add(n))
            }
            None => RngRoller::from_entropy(),
        }
    }

    /// Parse `args`, roll with `roller` and format the result.
    pub fn run<R>(&self, args: &[String], roller: &mut R) -> Result<String, RollError>
    where
        R: DieRoller + ?Sized,
    {
        let args = RollArgs::try_parse_from(args)
            .map_err(|e| RollError::Usage(e.render().to_string().trim_end().to_string()))?;
        DiceSystem::parse(&args.system)?;

        let dice = match args.dice.as_deref() {
            Some(arg) => parse_dice_count(arg)?,
            None => 0,
        };
        let request = RollRequest::new(dice)
            .with_again(args.again)
            .with_rote(args.rote)
            .with_weakness(args.weakness)
            .with_exceptional(args.exceptional);

        let outcome = resolve(&request, roller);
        Ok(format_cofd(&request, &outcome, args.verbose))
    }

    /// Like [`RollCommand::run`], with errors rendered as the reply text.
    pub fn reply<R>(&self, args: &[String], roller: &mut R) -> String
    where
        R: DieRoller + ?Sized,
    {
        match self.run(args, roller) {
            Ok(text) => text,
            Err(err) => err.to_string(),
        }
    }

    /// Roll with a fresh random source for this invocation.
    pub fn roll(&self, args: &[String]) -> String {
        let mut roller = self.roller();
        self.reply(args, &mut roller)
    }
}

impl SlateCommand for RollCommand {
    fn name(&self) -> &str {
        "roll"
    }

    fn synopsis(&self) -> &str {
        "Roll a Chronicles of Darkness dice pool"
    }

    fn usage(&self) -> String {
        RollArgs::command()
            .render_help()
            .to_string()
            .trim_end()
            .to_string()
    }

    fn execute(
        &self,
        ctx: &CommandContext,
        args: &[String],
        session: &mut dyn Session,
        event: &MessageEvent,
    ) {
        let text = self.roll(args);
        if ctx.is_cancelled() {
            tracing::debug!(channel = %event.channel_id, "roll cancelled before reply");
            return;
        }

        let reply = format!("{} {text}", event.mention());
        if let Err(err) = session.channel_message_send(&event.channel_id, &reply) {
            tracing::error!(channel = %event.channel_id, %err, "failed to send roll result");
        }
    }
}
