//! Ledger entry and export types.
//!
//! `LedgerEntry` is a single link in the hash chain — a classified message
//! with sequence numbering and the SHA-256 hashes that make tampering
//! detectable. `LedgerExport` is the sealed snapshot produced on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use safecore_contracts::audit::Sensitivity;

/// A single entry in the SHA-256 hash chain.
///
/// Each entry commits to the previous entry via `prev_hash`, forming an
/// append-only chain. Modifying any field invalidates `this_hash` and every
/// subsequent `prev_hash`, which `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,

    /// Wall-clock time (UTC) the entry was committed.
    pub timestamp: DateTime<Utc>,

    /// Classification of the recorded event.
    pub sensitivity: Sensitivity,

    /// The audited message.
    pub message: String,

    /// SHA-256 hash (hex) of the previous entry, or `GENESIS_HASH` for the
    /// first entry.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this entry's canonical content.
    pub this_hash: String,
}

impl LedgerEntry {
    /// The sentinel `prev_hash` used for the first entry in every chain.
    ///
    /// 64 hex zeros — a value that can never be the SHA-256 of real data,
    /// making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed snapshot of the ledger at export time.
///
/// The `terminal_hash` is the `this_hash` of the last entry and can be used
/// as a compact commitment to the entire trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// All entries in chain order (sequence 0 first).
    pub entries: Vec<LedgerEntry>,

    /// Wall-clock time (UTC) the snapshot was taken.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last entry. Empty string if the ledger is empty.
    pub terminal_hash: String,
}
