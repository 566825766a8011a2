//! The SafeCore simulation orchestrator: the fixed-sequence stub runner.
//!
//! The orchestrator enforces the simulation's call order:
//!
//!   Tokenize → Protect & Store → Boundary → Inactivity → Retrieve → Detokenize
//!
//! Retrieval and detokenization are only reachable after BOTH access checks
//! pass — this is enforced structurally, the code path to `retrieve_and_expose`
//! sits after the `?` on each check.

use tracing::{debug, info, warn};

use safecore_contracts::{
    audit::Sensitivity,
    context::AccessContext,
    error::SafeCoreResult,
    identity::StoragePayload,
    record::PatientRecord,
    report::SimulationReport,
};

use crate::traits::{AccessGate, AuditSink, IdentityVault, SecureStore};

/// The central runner that drives one simulation over the stub services.
///
/// Construct one orchestrator per run. The orchestrator owns the components
/// and enforces the pipeline ordering on every call to `run()`.
pub struct SimulationOrchestrator {
    vault: Box<dyn IdentityVault>,
    store: Box<dyn SecureStore>,
    gate: Box<dyn AccessGate>,
    audit: Box<dyn AuditSink>,
}

impl SimulationOrchestrator {
    /// Create a new orchestrator over the given components.
    pub fn new(
        vault: Box<dyn IdentityVault>,
        store: Box<dyn SecureStore>,
        gate: Box<dyn AccessGate>,
        audit: Box<dyn AuditSink>,
    ) -> Self {
        Self { vault, store, gate, audit }
    }

    /// Execute the full simulation pipeline over `record`.
    ///
    /// # Pipeline
    ///
    /// 1. Tokenize the composite identity (`"{name}|{ssn}"`)
    /// 2. Build a `StoragePayload` keyed by the token (never the name) and
    ///    store it
    /// 3. `enforce_boundary()` — absent auth flag aborts with `AccessDenied`
    /// 4. `validate_inactivity()` — stale session aborts with `SessionExpired`
    /// 5. Retrieve the payload and compare its embedded token to the issued
    ///    one. A mismatch is audited and reported, but does NOT abort
    /// 6. Detokenize and confirm the recovered identity matches the original
    ///
    /// # Errors
    ///
    /// Propagates `AccessDenied` / `SessionExpired` from the gate,
    /// `BlobMalformed` / `TokenNotFound` from the stubs, and
    /// `AuditWriteFailed` from the sink. The integrity mismatch in step 5 is
    /// deliberately not an error.
    pub fn run(
        &self,
        record: &PatientRecord,
        ctx: &AccessContext,
    ) -> SafeCoreResult<SimulationReport> {
        let run_id = record.request_id.to_string();

        debug!(run_id = %run_id, subject = %record.patient_pii.name, "simulation starting");

        // ── Step 1: Tokenization (de-linking identity) ───────────────────────
        let composite = record.patient_pii.composite_identity();
        let token = self.vault.tokenize(&composite)?;
        self.audit
            .record(Sensitivity::High, &format!("identity tokenized: {}", token))?;

        // ── Step 2: Protect and store, keyed by token only ───────────────────
        let payload = StoragePayload {
            patient_token: token.clone(),
            data: record.medical_data.clone(),
        };
        let blob = self.store.protect_and_store(&payload)?;
        self.audit.record(
            Sensitivity::Medium,
            &format!("payload protected and stored ({} bytes)", blob.0.len()),
        )?;

        // ── Steps 3 & 4: Access checks ───────────────────────────────────────
        //
        // Retrieval is only reachable after both checks pass.
        if let Err(e) = self.gate.enforce_boundary(ctx) {
            warn!(run_id = %run_id, error = %e, "security boundary rejected request");
            self.audit
                .record(Sensitivity::Critical, &format!("boundary rejection: {}", e))?;
            return Err(e);
        }
        self.audit
            .record(Sensitivity::Low, "security boundary crossed")?;

        if let Err(e) = self.gate.validate_inactivity(ctx) {
            warn!(run_id = %run_id, error = %e, "session failed inactivity validation");
            self.audit
                .record(Sensitivity::Critical, &format!("session rejection: {}", e))?;
            return Err(e);
        }
        self.audit.record(Sensitivity::Low, "session validated")?;

        // ── Step 5: Retrieve and check integrity ─────────────────────────────
        let retrieved = self.store.retrieve_and_expose(&blob)?;
        let integrity_ok = retrieved.patient_token == token;
        if integrity_ok {
            debug!(run_id = %run_id, "retrieved payload token matches issued token");
        } else {
            // Reported, audited, but not fatal: the run continues so the
            // operator sees the full picture in one pass.
            warn!(
                run_id = %run_id,
                issued = %token,
                embedded = %retrieved.patient_token,
                "integrity mismatch between issued and embedded token"
            );
            self.audit.record(
                Sensitivity::High,
                &format!(
                    "integrity mismatch: issued {} but payload carries {}",
                    token, retrieved.patient_token
                ),
            )?;
        }

        // ── Step 6: Detokenize and confirm recoverability ────────────────────
        let recovered_identity = self.vault.detokenize(&token)?;
        self.audit
            .record(Sensitivity::Critical, &format!("identity detokenized: {}", token))?;

        let identity_recovered = recovered_identity == composite;

        info!(
            run_id = %run_id,
            integrity_ok,
            identity_recovered,
            "simulation pipeline complete"
        );

        Ok(SimulationReport {
            subject: record.patient_pii.name.clone(),
            token,
            blob,
            integrity_ok,
            recovered_identity,
            identity_recovered,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
