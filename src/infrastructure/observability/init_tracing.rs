use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber: `RUST_LOG` or the configured filter, then a
/// plain or JSON formatter. Fails if a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig, port: u16) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let (json_layer, text_layer) = if config.json_format {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        (Some(fmt_layer.json()), None)
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        (None, Some(fmt_layer))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::info!(
        port,
        environment = %config.environment,
        json_format = config.json_format,
        "Order extractor logging ready"
    );
    Ok(())
}
