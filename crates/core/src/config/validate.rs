use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Logging filter is not empty
/// - Endpoint override, when set, is an http(s) URL
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.filter cannot be empty".to_string(),
        ));
    }

    if let Some(url) = &config.control_plane.endpoint_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "control_plane.endpoint_url must start with http:// or https://, got {:?}",
                url
            )));
        }
    }

    Ok(())
}
