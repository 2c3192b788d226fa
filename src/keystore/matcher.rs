//! Slashing-protection matching.
//!
//! Keystores store the pubkey bare while the interchange format prefixes
//! it with `0x`. Comparison is an exact, case-sensitive string match on
//! the prefixed form. The first matching record wins; duplicates later in
//! the document are ignored.

use crate::keystore::types::{Keystore, SlashingProtection};

/// Extract the single-record document for `keystore`, if any.
///
/// The returned document carries the source metadata unchanged and exactly
/// one record in `data`.
pub fn match_record(
    doc: Option<&SlashingProtection>,
    keystore: &Keystore,
) -> Option<SlashingProtection> {
    let doc = doc?;
    let pubkey = keystore.prefixed_pubkey();

    let record = doc.data.iter().find(|record| record.pubkey == pubkey)?;

    Some(SlashingProtection {
        metadata: doc.metadata.clone(),
        data: vec![record.clone()],
    })
}
