//! Hash-chain primitives: entry hashing and chain integrity verification.
//!
//! Every field that contributes to an entry's hash is listed explicitly so
//! nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. sequence as 8-byte little-endian
//!   2. timestamp as RFC 3339 UTF-8 bytes
//!   3. sensitivity label as UTF-8 bytes (e.g. "CRITICAL")
//!   4. message as UTF-8 bytes
//!   5. prev_hash as UTF-8 bytes (64 ASCII hex chars)

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use safecore_contracts::audit::Sensitivity;

use crate::entry::LedgerEntry;

/// Compute the SHA-256 hash for a single ledger entry.
///
/// The hash commits to every field that uniquely identifies an entry: its
/// position in the chain (`sequence`), when it was committed (`timestamp`),
/// its classification and message, and its link to the previous entry
/// (`prev_hash`).
///
/// Returns a lowercase 64-character hex string.
pub fn hash_entry(
    sequence: u64,
    timestamp: &DateTime<Utc>,
    sensitivity: Sensitivity,
    message: &str,
    prev_hash: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    hasher.update(timestamp.to_rfc3339().as_bytes());
    hasher.update(sensitivity.as_str().as_bytes());
    hasher.update(message.as_bytes());
    hasher.update(prev_hash.as_bytes());

    hex::encode(hasher.finalize())
}

/// Verify the integrity of a hash chain.
///
/// Returns `true` when the chain is valid according to both rules:
///
/// 1. **Prev-hash linkage** — each entry's `prev_hash` equals the
///    `this_hash` of the preceding entry (or `GENESIS_HASH` for entry 0).
/// 2. **Hash correctness** — each entry's `this_hash` matches the value
///    recomputed from its own fields.
///
/// Returns `false` the moment any mismatch is detected. An empty chain is
/// defined as valid.
pub fn verify_chain(entries: &[LedgerEntry]) -> bool {
    let mut expected_prev = LedgerEntry::GENESIS_HASH.to_string();

    for entry in entries {
        if entry.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_entry(
            entry.sequence,
            &entry.timestamp,
            entry.sensitivity,
            &entry.message,
            &entry.prev_hash,
        );
        if entry.this_hash != recomputed {
            return false;
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
