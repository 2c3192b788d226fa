//! Error definitions shared by every stage of the migration.
//!
//! # Design Decisions
//! - Every error is terminal; the only recovery path is the delivery retry loop
//! - Components return errors, only `main` decides the exit code
//! - Filesystem errors carry the path that failed

use std::path::PathBuf;
use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that can occur while migrating keystores.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A required command line argument was not provided.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// A command line argument was present but malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network identifier outside the supported set.
    #[error("network not supported: {0}")]
    UnsupportedNetwork(String),

    /// File unreadable or directory unlistable.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be initialized.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Request body could not be serialized.
    #[error("failed to encode import request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Every delivery attempt failed at the transport level.
    #[error("failed to deliver keystore {file} after {attempts} attempts")]
    Transport { file: String, attempts: u32 },

    /// Remote answered with a status other than 200.
    #[error("remote rejected keystore {file} with status {status}: {body}")]
    RemoteRejection {
        file: String,
        status: u16,
        body: String,
    },

    /// Remote answered 200 but reported a per-key import error.
    #[error("remote failed to import keystore {file}: {message}")]
    KeystoreRejected { file: String, message: String },
}

impl MigrationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for migration operations.
pub type MigrationResult<T> = Result<T, MigrationError>;
