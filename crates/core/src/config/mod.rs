mod loader;
mod types;
mod validate;

pub use loader::*;
pub use types::*;
pub use validate::*;

use thiserror::Error;

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_PATH_ENV: &str = "START_FLINK_CONFIG";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "START_FLINK_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
