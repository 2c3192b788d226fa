//! Keystore documents.
//!
//! # Data Flow
//! ```text
//! keystores directory
//!     → loader.rs (list keystore* files, parse each)
//!     → matcher.rs (pair with slashing-protection record by 0x-pubkey)
//!     → http::request (import request body)
//! ```
//!
//! # Security Constraints
//! - Keystore contents and the wallet password are never logged
//! - Documents are forwarded as-is; nothing is decrypted or validated

pub mod loader;
pub mod matcher;
pub mod types;

pub use loader::{
    list_keystore_files, load_keystore, load_slashing_protection, load_wallet_password,
    KeystoreFile,
};
pub use matcher::match_record;
pub use types::{InterchangeMetadata, Keystore, PubkeyRecord, SlashingProtection};
