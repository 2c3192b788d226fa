//! Document loading from disk.
//!
//! # Responsibilities
//! - Read the wallet password (first line of a text file)
//! - Parse the slashing-protection interchange document, when given
//! - Parse individual keystore files
//! - Enumerate `keystore*` files in the keystores directory

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MigrationError, MigrationResult};
use crate::keystore::types::{Keystore, SlashingProtection};

/// Only directory entries whose name starts with this are imported.
pub const KEYSTORE_FILE_PREFIX: &str = "keystore";

/// A keystore file selected for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystoreFile {
    pub name: String,
    pub path: PathBuf,
}

/// Read the wallet password: the first line, without its terminator.
pub fn load_wallet_password(path: &Path) -> MigrationResult<String> {
    let content = fs::read_to_string(path).map_err(|e| MigrationError::io(path, e))?;
    let password = content.lines().next().unwrap_or_default().to_string();

    if password.is_empty() {
        tracing::warn!(path = %path.display(), "Wallet password file is empty");
    }

    Ok(password)
}

/// Load the slashing-protection document, or `None` when no path is given.
pub fn load_slashing_protection(path: Option<&Path>) -> MigrationResult<Option<SlashingProtection>> {
    let Some(path) = path else {
        tracing::info!("No slashing protection supplied, importing keystores without history");
        return Ok(None);
    };

    let doc: SlashingProtection = load_json(path)?;
    tracing::info!(
        path = %path.display(),
        records = doc.data.len(),
        "Slashing protection loaded"
    );
    Ok(Some(doc))
}

/// Load and parse one keystore file.
pub fn load_keystore(path: &Path) -> MigrationResult<Keystore> {
    load_json(path)
}

/// List `keystore*` files directly inside `dir`, sorted by name.
///
/// Subdirectories are skipped even when their name matches.
pub fn list_keystore_files(dir: &Path) -> MigrationResult<Vec<KeystoreFile>> {
    let entries = fs::read_dir(dir).map_err(|e| MigrationError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MigrationError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| MigrationError::io(entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(KEYSTORE_FILE_PREFIX) {
            tracing::debug!(file = %name, "Skipping non-keystore file");
            continue;
        }

        files.push(KeystoreFile {
            name,
            path: entry.path(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> MigrationResult<T> {
    let content = fs::read_to_string(path).map_err(|e| MigrationError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| MigrationError::parse(path, e))
}
