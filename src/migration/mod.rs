//! Migration orchestration.
//!
//! # Data Flow
//! ```text
//! Sources (paths) + Endpoints (network table)
//!     → keystore::loader (password, slashing protection, file list)
//!     → driver.rs, per file in name order:
//!         load keystore → match → build request → deliver → report
//!     → ImportSummary, or the first MigrationError
//! ```
//!
//! # Design Decisions
//! - Fail fast: the first error ends the run, later files are not touched
//! - No component exits the process; `main` maps errors to exit codes

pub mod driver;

pub use driver::{migrate, FileReport, ImportSummary, Importer, Sources};
