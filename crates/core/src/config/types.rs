use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub control_plane: ControlPlaneConfig,
}

impl Config {
    /// Short SHA-256 fingerprint of the effective configuration.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        let hash = format!("{:x}", Sha256::digest(json.as_bytes()));
        hash[..16].to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Colour output; off by default since the log sink stores raw text
    #[serde(default)]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
            ansi: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Control-plane client configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ControlPlaneConfig {
    /// Endpoint override (e.g. "http://localhost:4566" for a local emulator)
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(!config.logging.ansi);
        assert!(config.control_plane.endpoint_url.is_none());
    }

    #[test]
    fn test_fingerprint_changes_with_config() {
        let a = Config::default();
        let mut b = Config::default();
        b.logging.format = LogFormat::Json;

        assert_eq!(a.fingerprint().len(), 16);
        assert_eq!(a.fingerprint(), Config::default().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
