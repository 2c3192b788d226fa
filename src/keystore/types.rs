//! Keystore and slashing-protection document types.
//!
//! Both documents are forwarded to the remote as opaque JSON. Only the
//! fields needed to pair a keystore with its slashing-protection record
//! are typed; everything else is carried as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix the interchange format puts in front of hex pubkeys.
pub const PUBKEY_PREFIX: &str = "0x";

/// An EIP-2335 keystore document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keystore {
    /// Hex encoded BLS public key, without `0x` prefix.
    pub pubkey: String,

    /// `crypto`, `description`, `path`, `uuid`, `version` and anything else.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Keystore {
    /// Pubkey as it appears in a slashing-protection document.
    pub fn prefixed_pubkey(&self) -> String {
        format!("{}{}", PUBKEY_PREFIX, self.pubkey)
    }
}

/// An EIP-3076 slashing-protection interchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashingProtection {
    pub metadata: InterchangeMetadata,
    pub data: Vec<PubkeyRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchangeMetadata {
    pub interchange_format_version: String,
    pub genesis_validators_root: String,
}

/// Signing history of a single validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PubkeyRecord {
    /// Hex encoded public key, with `0x` prefix.
    pub pubkey: String,

    #[serde(default)]
    pub signed_blocks: Vec<Value>,

    #[serde(default)]
    pub signed_attestations: Vec<Value>,
}
