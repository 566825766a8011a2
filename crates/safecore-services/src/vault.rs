//! In-memory implementation of `IdentityVault`.
//!
//! `InMemoryVault` keeps the surrogate→identity mapping in a `Mutex`-guarded
//! map owned by the instance. There is deliberately no module-level state:
//! the mapping's lifetime is the instance's lifetime, and two vaults know
//! nothing about each other's tokens.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use safecore_contracts::{
    error::{SafeCoreError, SafeCoreResult},
    identity::IdentityToken,
};
use safecore_core::traits::IdentityVault;

/// An in-memory, process-local identity vault.
///
/// Every call to `tokenize` issues a fresh UUID surrogate — the same identity
/// tokenized twice yields two distinct tokens, each of which detokenizes back
/// to it.
pub struct InMemoryVault {
    mappings: Mutex<HashMap<String, String>>,
}

impl InMemoryVault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self {
            mappings: Mutex::new(HashMap::new()),
        }
    }

    /// Number of surrogates issued so far.
    pub fn issued_count(&self) -> usize {
        self.mappings.lock().expect("vault state lock poisoned").len()
    }
}

impl Default for InMemoryVault {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityVault for InMemoryVault {
    fn tokenize(&self, identity: &str) -> SafeCoreResult<IdentityToken> {
        let surrogate = uuid::Uuid::new_v4().to_string();
        self.mappings
            .lock()
            .expect("vault state lock poisoned")
            .insert(surrogate.clone(), identity.to_string());

        debug!(token = %surrogate, "surrogate issued");
        Ok(IdentityToken(surrogate))
    }

    fn detokenize(&self, token: &IdentityToken) -> SafeCoreResult<String> {
        let mappings = self.mappings.lock().expect("vault state lock poisoned");
        match mappings.get(&token.0) {
            Some(identity) => {
                debug!(token = %token, "surrogate resolved");
                Ok(identity.clone())
            }
            None => Err(SafeCoreError::TokenNotFound {
                token: token.0.clone(),
            }),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
