//! In-memory implementation of `SecureStore`.
//!
//! `StubDataLayer` stands in for an encrypting data-layer connector. The
//! "encryption" is a reversible frame — `sc1:<context_id>:<hex(json)>` —
//! which provides exactly the guarantee the simulation needs (same-context
//! invertibility) and none of the ones it doesn't (confidentiality).

use tracing::debug;

use safecore_contracts::{
    error::{SafeCoreError, SafeCoreResult},
    identity::{EncryptedBlob, StoragePayload},
};
use safecore_core::traits::SecureStore;

/// Frame marker identifying blobs produced by this stub.
const BLOB_PREFIX: &str = "sc1";

/// A data-layer stub scoped to one storage context.
///
/// Blobs are only accepted back by an instance carrying the same
/// `context_id` — a cheap stand-in for per-tenant key isolation.
pub struct StubDataLayer {
    context_id: String,
}

impl StubDataLayer {
    /// Create a data layer for the given storage context.
    pub fn new(context_id: impl Into<String>) -> Self {
        Self {
            context_id: context_id.into(),
        }
    }
}

impl SecureStore for StubDataLayer {
    /// Serialize `payload` and wrap it in the blob frame.
    ///
    /// # Panics
    ///
    /// Panics if `payload` cannot be serialized to JSON — which cannot happen
    /// for the well-formed `StoragePayload` type.
    fn protect_and_store(&self, payload: &StoragePayload) -> SafeCoreResult<EncryptedBlob> {
        let json = serde_json::to_vec(payload)
            .expect("StoragePayload must always be serializable to JSON");

        let blob = format!("{}:{}:{}", BLOB_PREFIX, self.context_id, hex::encode(json));
        debug!(context_id = %self.context_id, blob_len = blob.len(), "payload framed");

        Ok(EncryptedBlob(blob))
    }

    /// Unwrap the frame and deserialize the payload.
    ///
    /// Every malformation — wrong frame, foreign context, bad hex, bad JSON —
    /// maps to `BlobMalformed` with a reason naming the failing layer.
    fn retrieve_and_expose(&self, blob: &EncryptedBlob) -> SafeCoreResult<StoragePayload> {
        let mut parts = blob.0.splitn(3, ':');
        let (prefix, context, body) = match (parts.next(), parts.next(), parts.next()) {
            (Some(p), Some(c), Some(b)) => (p, c, b),
            _ => {
                return Err(SafeCoreError::BlobMalformed {
                    reason: "missing frame separators".to_string(),
                })
            }
        };

        if prefix != BLOB_PREFIX {
            return Err(SafeCoreError::BlobMalformed {
                reason: format!("unknown frame prefix '{}'", prefix),
            });
        }
        if context != self.context_id {
            return Err(SafeCoreError::BlobMalformed {
                reason: format!(
                    "blob belongs to context '{}', this store is '{}'",
                    context, self.context_id
                ),
            });
        }

        let bytes = hex::decode(body).map_err(|e| SafeCoreError::BlobMalformed {
            reason: format!("undecodable body: {}", e),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| SafeCoreError::BlobMalformed {
            reason: format!("payload does not deserialize: {}", e),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
