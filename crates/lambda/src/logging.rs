use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flink_autostart_core::{LogFormat, LoggingConfig};

/// Install the process-wide subscriber. `RUST_LOG` wins over the configured
/// filter. Timestamps are left to the log sink.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .without_time(),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_ansi(config.ansi).without_time())
            .init(),
    }
}
