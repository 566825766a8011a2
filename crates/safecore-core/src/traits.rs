//! Core trait definitions for the SafeCore pipeline.
//!
//! These four traits define the simulated trust boundaries:
//!
//! - `IdentityVault` — de-links identity (tokenize / detokenize)
//! - `SecureStore`   — protects payloads at rest (store / retrieve)
//! - `AccessGate`    — gates access (boundary check, inactivity check)
//! - `AuditSink`     — records every stage immutably
//!
//! The orchestrator wires them together in a fixed sequence. Each trait is
//! object-safe so real implementations (a network vault, an encrypting data
//! layer, a session service) can later be substituted without changing the
//! orchestration code.

use safecore_contracts::{
    audit::Sensitivity,
    context::AccessContext,
    error::SafeCoreResult,
    identity::{EncryptedBlob, IdentityToken, StoragePayload},
};

/// The identity vault: replaces a sensitive identity string with an opaque
/// surrogate and reverses the mapping on demand.
///
/// Implementations must uphold the round-trip invariant within one instance's
/// lifetime: `detokenize(tokenize(i)) == i`. Nothing is promised across
/// instances or processes.
pub trait IdentityVault: Send + Sync {
    /// Issue a surrogate for `identity` and remember the mapping.
    fn tokenize(&self, identity: &str) -> SafeCoreResult<IdentityToken>;

    /// Recover the identity behind `token`.
    ///
    /// Returns `SafeCoreError::TokenNotFound` for a surrogate this vault
    /// never issued.
    fn detokenize(&self, token: &IdentityToken) -> SafeCoreResult<String>;
}

/// The data layer: accepts a payload, returns an opaque blob, and reverses
/// the wrapping on retrieval.
///
/// The blob carries no confidentiality guarantee — the contract is only that
/// the *same instance* can invert it: `retrieve_and_expose(protect_and_store(p)) == p`.
pub trait SecureStore: Send + Sync {
    /// Serialize and wrap `payload`, returning the opaque blob.
    fn protect_and_store(&self, payload: &StoragePayload) -> SafeCoreResult<EncryptedBlob>;

    /// Unwrap and deserialize `blob`.
    ///
    /// Returns `SafeCoreError::BlobMalformed` for a blob this instance did
    /// not produce.
    fn retrieve_and_expose(&self, blob: &EncryptedBlob) -> SafeCoreResult<StoragePayload>;
}

/// The logic layer's access checks, evaluated in order by the orchestrator.
///
/// Both checks are pure predicates over the request context: no state is
/// consulted, no side effects occur.
pub trait AccessGate: Send + Sync {
    /// Pass iff the request carries the required auth flag.
    ///
    /// Returns `SafeCoreError::AccessDenied` otherwise.
    fn enforce_boundary(&self, ctx: &AccessContext) -> SafeCoreResult<()>;

    /// Pass iff the session has been active within the idle window.
    ///
    /// Returns `SafeCoreError::SessionExpired` otherwise.
    fn validate_inactivity(&self, ctx: &AccessContext) -> SafeCoreResult<()>;
}

/// The audit sink: every pipeline stage — pass or fail — is recorded here.
///
/// A failed write is fatal to the run; an unauditable step must not proceed.
pub trait AuditSink: Send + Sync {
    /// Append one classified message to the audit trail.
    fn record(&self, sensitivity: Sensitivity, message: &str) -> SafeCoreResult<()>;
}
