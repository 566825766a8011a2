//! The simulated request context the logic layer evaluates.
//!
//! A real deployment would derive this from an incoming HTTP request; the
//! simulation constructs it directly. The auth flag is modeled the way the
//! SDK's callers present it: as the *presence* of a header key.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The header key whose presence marks the request as MFA-verified.
pub const MFA_HEADER: &str = "mfa_verified";

/// A snapshot of request state passed through the access checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessContext {
    /// Request headers. Only key presence matters to the boundary check.
    pub headers: BTreeMap<String, String>,
    /// When this session was last seen active.
    pub last_active: DateTime<Utc>,
}

impl AccessContext {
    /// A context with no headers and the given last-active timestamp.
    pub fn new(last_active: DateTime<Utc>) -> Self {
        Self {
            headers: BTreeMap::new(),
            last_active,
        }
    }

    /// A context that was active just now.
    pub fn fresh() -> Self {
        Self::new(Utc::now())
    }

    /// Builder-style header insertion.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// True if the given header key is present (value ignored).
    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }
}
