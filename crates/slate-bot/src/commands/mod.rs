pub mod console;
pub mod list;
pub mod roll;

use slate_bot::{BotResult, CommandRegistry, RollCommand, SlateConfig};

/// Build the registry with every command the bot ships.
fn registry(config: &SlateConfig) -> BotResult<CommandRegistry> {
    let mut registry = CommandRegistry::new(config.prefix.clone());
    registry.register(roll_command(config))?;
    Ok(registry)
}

fn roll_command(config: &SlateConfig) -> RollCommand {
    match config.seed {
        Some(seed) => RollCommand::with_seed(seed),
        None => RollCommand::new(),
    }
}
