//! Error types for the player state

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Requested index does not point into the episode list
    #[error("Invalid episode index {index} for a list of {len} episodes")]
    InvalidIndex {
        /// Index that was requested
        index: usize,
        /// Length of the list it was checked against
        len: usize,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Episode JSON could not be parsed
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PlayerError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<config::ConfigError> for PlayerError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
