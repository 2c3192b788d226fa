//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Resolve the log filter from `RUST_LOG` or the config file
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries only the per-keystore report
//! - `RUST_LOG` wins over `observability.log_level`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!(
        "keystore_migrator={}",
        config.log_level.to_ascii_lowercase()
    )
}

/// Install the global subscriber.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
