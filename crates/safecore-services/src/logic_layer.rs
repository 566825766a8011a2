//! In-memory implementation of `AccessGate`.
//!
//! `RequestLogicLayer` evaluates the two access predicates the simulation
//! exercises: the security-boundary check (auth flag presence) and the
//! inactivity check (idle time against a fixed window). Both are pure
//! functions of the request context.

use chrono::Utc;
use tracing::{debug, warn};

use safecore_contracts::{
    context::{AccessContext, MFA_HEADER},
    error::{SafeCoreError, SafeCoreResult},
};
use safecore_core::traits::AccessGate;

/// Default idle window, in seconds.
pub const DEFAULT_MAX_IDLE_SECS: i64 = 900;

/// The logic-layer stub: boundary and inactivity checks over a request context.
pub struct RequestLogicLayer {
    max_idle_secs: i64,
}

impl RequestLogicLayer {
    /// A logic layer with a custom idle window.
    pub fn new(max_idle_secs: i64) -> Self {
        Self { max_idle_secs }
    }
}

impl Default for RequestLogicLayer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE_SECS)
    }
}

impl AccessGate for RequestLogicLayer {
    /// Pass iff the `mfa_verified` header key is present. The value is not
    /// inspected — callers assert the flag by sending the header at all.
    fn enforce_boundary(&self, ctx: &AccessContext) -> SafeCoreResult<()> {
        if ctx.has_header(MFA_HEADER) {
            debug!("security boundary check passed");
            Ok(())
        } else {
            warn!(header = MFA_HEADER, "request missing required auth flag");
            Err(SafeCoreError::AccessDenied {
                reason: format!("required auth flag '{}' absent from request headers", MFA_HEADER),
            })
        }
    }

    /// Pass iff the session's idle time does not exceed the window.
    ///
    /// Idle time is measured from `ctx.last_active` to wall-clock now; the
    /// window boundary itself still passes (strictly-exceeds semantics).
    fn validate_inactivity(&self, ctx: &AccessContext) -> SafeCoreResult<()> {
        let idle_secs = (Utc::now() - ctx.last_active).num_seconds();
        if idle_secs > self.max_idle_secs {
            warn!(idle_secs, max_idle_secs = self.max_idle_secs, "session idle too long");
            Err(SafeCoreError::SessionExpired {
                idle_secs,
                max_idle_secs: self.max_idle_secs,
            })
        } else {
            debug!(idle_secs, "session within idle window");
            Ok(())
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
