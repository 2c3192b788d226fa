//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! --network flag
//!     → network.rs (static table: base URL + virtual host)
//!
//! --config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MigratorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Network endpoints are a closed table, never read from the config file
//! - All config fields have defaults; the file is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod network;
pub mod schema;
pub mod validation;

pub use network::{Endpoints, Network};
pub use schema::{DeliveryConfig, MigratorConfig, ObservabilityConfig};
