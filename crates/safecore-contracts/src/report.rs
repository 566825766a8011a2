//! The orchestrator's terminal summary of one simulation run.

use serde::{Deserialize, Serialize};

use crate::identity::{EncryptedBlob, IdentityToken};

/// Everything the caller needs to render a verdict for a completed run.
///
/// Produced only when the pipeline reached the end: a denied or expired
/// session surfaces as an error instead. Note that `integrity_ok = false`
/// does NOT abort a run — a token mismatch after retrieval is reported, not
/// escalated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Display name of the generated patient.
    pub subject: String,
    /// The surrogate issued for the composite identity.
    pub token: IdentityToken,
    /// The opaque blob the data layer returned for the stored payload.
    pub blob: EncryptedBlob,
    /// Whether the token embedded in the retrieved payload matched the
    /// issued token.
    pub integrity_ok: bool,
    /// The identity string recovered by detokenization.
    pub recovered_identity: String,
    /// Whether `recovered_identity` equals the original composite identity.
    pub identity_recovered: bool,
}
