//! In-memory implementation of `AuditSink`.
//!
//! `InMemoryLedger` is the reference implementation of the `AuditSink`
//! trait. It keeps all entries in a `Vec` protected by a `Mutex`, making it
//! safe to share while the orchestrator records stages.
//!
//! Use `export()` after a run to obtain a sealed `LedgerExport`, and
//! `verify_integrity()` at any time to confirm the chain has not been
//! tampered with in memory.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use safecore_contracts::{
    audit::Sensitivity,
    error::{SafeCoreError, SafeCoreResult},
};
use safecore_core::traits::AuditSink;

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{LedgerEntry, LedgerExport},
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryLedger`.
pub(crate) struct LedgerState {
    /// All entries committed so far, in append order.
    pub(crate) entries: Vec<LedgerEntry>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last committed entry, or `GENESIS_HASH` before
    /// any entry has been committed.
    pub(crate) last_hash: String,
}

// ── Public ledger ─────────────────────────────────────────────────────────────

/// An in-memory, append-only audit ledger backed by a SHA-256 hash chain.
///
/// # Thread safety
///
/// `record()` acquires a `Mutex` internally. Multiple holders of clones of
/// the inner `Arc` may observe or export the accumulated entries without
/// additional synchronization.
pub struct InMemoryLedger {
    pub(crate) state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    ///
    /// The internal `last_hash` is initialized to `LedgerEntry::GENESIS_HASH`
    /// so the first entry's `prev_hash` is automatically correct.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(LedgerState {
                entries: Vec::new(),
                sequence: 0,
                last_hash: LedgerEntry::GENESIS_HASH.to_string(),
            })),
        }
    }

    /// Number of entries committed so far.
    pub fn len(&self) -> usize {
        self.state.lock().expect("ledger state lock poisoned").entries.len()
    }

    /// True if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export a sealed snapshot of all entries committed so far.
    ///
    /// The `terminal_hash` is the `this_hash` of the last entry, or an empty
    /// string when no entries have been committed.
    pub fn export(&self) -> LedgerExport {
        let state = self.state.lock().expect("ledger state lock poisoned");
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        LedgerExport {
            entries: state.entries.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    ///
    /// Delegates to `verify_chain`, which checks both prev-hash linkage and
    /// hash correctness for every entry.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("ledger state lock poisoned");
        verify_chain(&state.entries)
    }

    /// Log a summary of the sealed trail via `tracing`.
    pub fn finalize(&self) {
        let state = self.state.lock().expect("ledger state lock poisoned");
        info!(
            entry_count = state.entries.len(),
            terminal_hash = %state.last_hash,
            "audit ledger finalized"
        );
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

// ── AuditSink impl ────────────────────────────────────────────────────────────

impl AuditSink for InMemoryLedger {
    /// Commit one classified message to the hash chain.
    ///
    /// Computes `this_hash` from (sequence, timestamp, sensitivity, message,
    /// prev_hash), appends the entry, then advances the sequence counter and
    /// `last_hash`.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn record(&self, sensitivity: Sensitivity, message: &str) -> SafeCoreResult<()> {
        let mut state = self.state.lock().map_err(|e| SafeCoreError::AuditWriteFailed {
            reason: format!("ledger state lock poisoned: {}", e),
        })?;

        let timestamp = Utc::now();
        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;

        let this_hash = hash_entry(sequence, &timestamp, sensitivity, message, &prev_hash);

        state.entries.push(LedgerEntry {
            sequence,
            timestamp,
            sensitivity,
            message: message.to_string(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.sequence += 1;
        state.last_hash = this_hash;

        Ok(())
    }
}
