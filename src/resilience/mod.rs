//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Import request body
//!     → retries.rs (DeliveryEngine: up to N attempts, fixed delay)
//!         → http::client (one POST per attempt)
//!     → DeliveryOutcome (attempt count + optional result)
//! ```
//!
//! # Design Decisions
//! - Transport failures are retried, HTTP responses never are
//! - Fixed delay, no jitter
//! - No deadline on the overall delivery; the attempt bound is the limit

pub mod retries;

pub use retries::{DeliveryEngine, DeliveryOutcome, RetryPolicy};
