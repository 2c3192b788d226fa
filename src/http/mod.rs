//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Keystore + password + matched slashing protection
//!     → request.rs (ImportRequest envelope, JSON body)
//!     → client.rs (POST /eth/v1/keystores with Host override)
//!     → response.rs (status + body, per-key statuses)
//! ```

pub mod client;
pub mod request;
pub mod response;

pub use client::{HttpTransport, Transport, TransportError};
pub use request::ImportRequest;
pub use response::{ImportResponse, ImportResult, ImportStatus, KeystoreStatus};
