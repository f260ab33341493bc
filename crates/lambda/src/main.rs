mod function;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use flink_autostart_core::{
    load_config, load_config_from_env, validate_config, Config, EventHandler,
    KinesisAnalyticsControlPlane, LoggingConfig, CONFIG_PATH_ENV,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let config = match load_startup_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init(&LoggingConfig::default());
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging);

    if let Err(e) = run(config).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the file named by `START_FLINK_CONFIG`, or from
/// defaults and environment overrides when it is unset.
fn load_startup_config() -> Result<Config> {
    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => {
            let path = PathBuf::from(path);
            load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
        Err(_) => load_config_from_env().context("Failed to load config from environment")?,
    };

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

async fn run(config: Config) -> Result<()> {
    info!(
        version = VERSION,
        config_hash = %config.fingerprint(),
        log_format = ?config.logging.format,
        "Cold start"
    );

    let control_plane =
        KinesisAnalyticsControlPlane::from_env(config.control_plane.endpoint_url.as_deref()).await;
    if let Some(url) = &config.control_plane.endpoint_url {
        info!("Using control-plane endpoint override {}", url);
    }

    let handler = Arc::new(EventHandler::new(control_plane));
    info!("Event handler initialized");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { function::handle_invocation(handler.as_ref(), event).await }
    }))
    .await
    .map_err(|e| anyhow!("Lambda runtime error: {}", e))
}
