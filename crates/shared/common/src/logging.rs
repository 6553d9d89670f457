//! Tracing subscriber initialisation.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, ServiceConfig};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is a no-op.
pub fn init_logging(config: &ServiceConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = fmt().with_env_filter(env_filter).with_target(false);
    let _ = match config.log_format {
        LogFormat::Pretty => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    tracing::debug!(service = %config.service_name, "logging initialised");
}
