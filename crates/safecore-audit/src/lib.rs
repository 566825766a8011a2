//! # safecore-audit
//!
//! Immutable, append-only, SHA-256 hash-chained audit ledger for the
//! SafeCore runtime.
//!
//! ## Overview
//!
//! Every stage the orchestrator records is committed as a `LedgerEntry` that
//! links to the previous entry via its SHA-256 hash. Tampering with any
//! entry — even a single byte — breaks the chain and is detected by
//! `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use safecore_audit::InMemoryLedger;
//! use safecore_core::traits::AuditSink;
//!
//! let ledger = InMemoryLedger::new();
//! ledger.record(Sensitivity::High, "identity tokenized")?;
//!
//! assert!(ledger.verify_integrity());
//! let export = ledger.export();
//! ```

pub mod chain;
pub mod entry;
pub mod memory;

pub use chain::{hash_entry, verify_chain};
pub use entry::{LedgerEntry, LedgerExport};
pub use memory::InMemoryLedger;

// ── Tests ─────────────────────────────────────────────────────────────────────
