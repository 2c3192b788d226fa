//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the optional
//! TOML config file. Every field has a default so an absent file or an
//! empty one yields the stock behaviour.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the migrator.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MigratorConfig {
    /// Delivery retry settings.
    pub delivery: DeliveryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Delivery retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Total attempts per keystore, first one included.
    pub max_attempts: u32,

    /// Fixed delay between attempts in seconds.
    pub retry_delay_secs: u64,
}

impl DeliveryConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay_secs: 3,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
