//! Token and storage payload types.
//!
//! `IdentityToken` is the opaque surrogate the vault hands out in place of a
//! composite identity. `EncryptedBlob` is the opaque wrapper the data layer
//! hands out in place of a payload. Neither carries any real cryptographic
//! guarantee — both are reversible only by the issuing instance, which is the
//! whole point of the stub.

use serde::{Deserialize, Serialize};

use crate::record::MedicalData;

/// An opaque surrogate for a sensitive identity string.
///
/// Unique within one vault instance's lifetime and associated with exactly
/// one identity. The mapping is in-memory only: no persistence, no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityToken(pub String);

impl IdentityToken {
    /// Construct a token from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the data layer stores: medical data keyed by token, never by name.
///
/// The embedded token is what the orchestrator's integrity check compares
/// against the issued token after retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePayload {
    pub patient_token: IdentityToken,
    pub data: MedicalData,
}

/// An opaque string wrapping a serialized payload.
///
/// Invertible by the same-context `SecureStore` instance only. The inner
/// string is deliberately public — the blob is a handle, not a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBlob(pub String);

impl EncryptedBlob {
    /// A short prefix of the blob for progress output. Blobs are ASCII, so
    /// slicing at a byte offset is safe.
    pub fn preview(&self, max_len: usize) -> &str {
        &self.0[..self.0.len().min(max_len)]
    }
}

impl std::fmt::Display for EncryptedBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
