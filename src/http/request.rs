//! Import request construction.
//!
//! # Responsibilities
//! - Embed the keystore as serialized JSON text inside `keystores`
//! - Pair the wallet password positionally in `passwords`
//! - Embed the matched slashing-protection document as a JSON string
//!
//! # Design Decisions
//! - Nested documents are serialized twice by serde_json: once to text,
//!   then that text as a plain string value of the envelope
//! - `slashing_protection` is omitted entirely when there is no match;
//!   the keymanager API rejects an empty string there

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MigrationError, MigrationResult};
use crate::keystore::types::{Keystore, SlashingProtection};

/// Body of `POST /eth/v1/keystores`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Serialized keystores, one JSON document per element.
    pub keystores: Vec<String>,

    /// Passwords, index-aligned with `keystores`.
    pub passwords: Vec<String>,

    /// Serialized interchange document covering the keystores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slashing_protection: Option<String>,
}

impl ImportRequest {
    /// Build the request for a single keystore.
    pub fn build(
        keystore: &Keystore,
        password: &str,
        slashing_protection: Option<&SlashingProtection>,
    ) -> MigrationResult<Self> {
        let keystore_json = serde_json::to_string(keystore).map_err(MigrationError::Encode)?;
        let slashing_protection = slashing_protection
            .map(serde_json::to_string)
            .transpose()
            .map_err(MigrationError::Encode)?;

        Ok(Self {
            keystores: vec![keystore_json],
            passwords: vec![password.to_string()],
            slashing_protection,
        })
    }

    /// Serialize the envelope into the HTTP body.
    pub fn to_body(&self) -> MigrationResult<String> {
        serde_json::to_string(self).map_err(MigrationError::Encode)
    }
}

impl fmt::Debug for ImportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportRequest")
            .field("keystores", &self.keystores.len())
            .field("passwords", &"<redacted>")
            .field("slashing_protection", &self.slashing_protection.is_some())
            .finish()
    }
}
