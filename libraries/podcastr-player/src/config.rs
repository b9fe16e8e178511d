//! Layered configuration loading
//!
//! Sources, later ones winning:
//! 1. Built-in defaults (`PlayerConfig::default()`)
//! 2. Optional config file (format inferred from the extension)
//! 3. `PODCASTR_PLAYER_*` environment variables

use crate::error::{PlayerError, Result};
use crate::types::PlayerConfig;
use std::path::Path;

/// Environment variable prefix, e.g. `PODCASTR_PLAYER_SHUFFLE_SEED=7`
pub const ENV_PREFIX: &str = "PODCASTR_PLAYER";

impl PlayerConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(PlayerError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config: Self = settings.build()?.try_deserialize()?;
        tracing::debug!(?config, "Loaded player config");

        Ok(config)
    }
}
