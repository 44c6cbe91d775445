//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::BotResult;

/// Build the filter: `RUST_LOG` if set, otherwise `default_filter`.
pub fn filter(default_filter: &str) -> BotResult<EnvFilter> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    Ok(filter)
}

/// Install the global subscriber, logging to stderr.
pub fn init(default_filter: &str) -> BotResult<()> {
    tracing_subscriber::registry()
        .with(filter(default_filter)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
