//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!
//! main.rs opens a `migration` span carrying the run ID and network;
//! every event of the run is recorded inside it.
//! ```
//!
//! # Design Decisions
//! - Secrets (password, keystore JSON) never reach a log event
//! - Report lines for the operator are written to stdout, not logged

pub mod logging;

pub use logging::init_logging;
