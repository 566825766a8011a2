//! Runtime error types for the SafeCore pipeline.
//!
//! All fallible operations in the SafeCore stubs return `SafeCoreResult<T>`.
//! Error variants carry enough context to produce actionable audit entries.

use thiserror::Error;

/// The unified error type for the SafeCore reference runtime.
#[derive(Debug, Error)]
pub enum SafeCoreError {
    /// The logic layer rejected the request at the security boundary.
    #[error("access denied: {reason}")]
    AccessDenied { reason: String },

    /// The session has been idle longer than the configured window.
    #[error("session expired: idle {idle_secs}s exceeds the {max_idle_secs}s window")]
    SessionExpired { idle_secs: i64, max_idle_secs: i64 },

    /// Detokenization was attempted with a surrogate this vault never issued.
    #[error("token not found: '{token}'")]
    TokenNotFound { token: String },

    /// A blob could not be reversed by this data-layer instance.
    ///
    /// Covers bad framing, a foreign context id, and undecodable contents.
    #[error("malformed blob: {reason}")]
    BlobMalformed { reason: String },

    /// The audit ledger could not commit an entry.
    ///
    /// This is treated as fatal — a step that cannot be audited cannot proceed.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the SafeCore crates.
pub type SafeCoreResult<T> = Result<T, SafeCoreError>;
