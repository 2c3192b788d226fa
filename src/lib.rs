//! Validator keystore migration into a remote keymanager API.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod keystore;
pub mod migration;
pub mod observability;
pub mod resilience;

pub use config::{MigratorConfig, Network};
pub use error::{MigrationError, MigrationResult};
pub use migration::{migrate, ImportSummary, Sources};
