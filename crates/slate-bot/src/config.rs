//! Bot configuration.
//!
//! Values are merged from built-in defaults, an optional TOML file and
//! `SLATE_*` environment variables, later sources winning.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::BotResult;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SLATE_";

/// Runtime configuration for the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlateConfig {
    /// Prefix a message must start with to reach a command.
    pub prefix: String,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Seed for reproducible rolls. Unset draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SlateConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            log_filter: "slate=info,slate_bot=info,slate_dice=info".to_string(),
            seed: None,
        }
    }
}

impl SlateConfig {
    /// The figment this configuration is extracted from.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load the configuration, reading `file` if it exists.
    pub fn load(file: Option<&Path>) -> BotResult<Self> {
        let config: Self = Self::figment(file).extract().map_err(Box::new)?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Set the command prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the roll seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
