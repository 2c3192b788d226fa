//! Import response handling.
//!
//! # Responsibilities
//! - Carry the status code and raw body of a delivery
//! - Decode the keymanager per-key status list when the body has one
//!
//! # Design Decisions
//! - 200 is the only status treated as success
//! - Bodies that do not decode are kept verbatim for reporting

use serde::Deserialize;
use std::fmt;

/// Status code the keymanager API returns on a processed import.
pub const STATUS_OK: u16 = 200;

/// Raw result of one delivered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub status: u16,
    pub body: String,
}

impl ImportResult {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Per-key statuses, if the body is a keymanager import response.
    pub fn decode(&self) -> Option<ImportResponse> {
        serde_json::from_str(&self.body).ok()
    }
}

/// `{"data": [{"status": ..., "message": ...}]}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportResponse {
    pub data: Vec<KeystoreStatus>,
}

impl ImportResponse {
    /// First per-key error, if the remote reported one.
    pub fn first_error(&self) -> Option<&KeystoreStatus> {
        self.data.iter().find(|s| s.status == ImportStatus::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeystoreStatus {
    pub status: ImportStatus,
    #[serde(default)]
    pub message: Option<String>,
}

impl fmt::Display for KeystoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) if !message.is_empty() => write!(f, "{} ({})", self.status, message),
            _ => write!(f, "{}", self.status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Imported,
    Duplicate,
    Error,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImportStatus::Imported => "imported",
            ImportStatus::Duplicate => "duplicate",
            ImportStatus::Error => "error",
            ImportStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
