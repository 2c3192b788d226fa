//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (at least one delivery attempt)
//! - Reject unknown log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MigratorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::MigratorConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("delivery.max_attempts must be at least 1")]
    NoDeliveryAttempts,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &MigratorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.delivery.max_attempts == 0 {
        errors.push(ValidationError::NoDeliveryAttempts);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
