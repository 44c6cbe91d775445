//! CLI frontend for the Slate dice bot.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use slate_bot::{SlateConfig, logging};

/// Exit status for configuration and usage errors.
const EXIT_USAGE: i32 = 64;

/// Exit status for runtime failures.
const EXIT_ERROR: i32 = 65;

#[derive(Parser)]
#[command(
    name = "slate",
    about = "Slate, a Chronicles of Darkness dice bot",
    version,
    propagate_version = true
)]
struct Cli {
    /// Configuration file (ignored if missing)
    #[arg(short, long, global = true, default_value = "slate.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice once and print the result
    Roll {
        /// Arguments for the roll command, e.g. `5 --rote -v`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Read chat messages from stdin and answer commands on stdout
    Console {
        /// Channel the messages are attributed to
        #[arg(long, default_value = "console")]
        channel: String,

        /// Author the messages are attributed to
        #[arg(long, default_value = "you")]
        author: String,
    },

    /// List the registered commands
    Commands,
}

fn main() {
    let cli = Cli::parse();

    let config = match SlateConfig::load(Some(&cli.config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(EXIT_USAGE);
        }
    };
    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("error: {e}");
        process::exit(EXIT_USAGE);
    }
    tracing::info!("starting slate");

    let result = match cli.command {
        Commands::Roll { args } => commands::roll::run(&config, &args),
        Commands::Console { channel, author } => commands::console::run(&config, &channel, &author),
        Commands::Commands => commands::list::run(&config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "slate failed");
        eprintln!("error: {e}");
        process::exit(EXIT_ERROR);
    }

    tracing::info!("goodbye");
}
