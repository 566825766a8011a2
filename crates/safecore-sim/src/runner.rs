//! Shared simulation wiring used by every scenario.
//!
//! `execute_run` assembles the reference stack — in-memory vault, stub data
//! layer, request logic layer, hash-chained ledger — around one generated
//! record, runs the orchestrator once, and hands everything back for the
//! scenario to narrate.

use std::sync::Arc;

use chrono::{Duration, Utc};

use safecore_audit::InMemoryLedger;
use safecore_contracts::{
    audit::Sensitivity,
    context::{AccessContext, MFA_HEADER},
    error::SafeCoreResult,
    record::PatientRecord,
    report::SimulationReport,
};
use safecore_core::{traits::AuditSink, SimulationOrchestrator};
use safecore_services::{InMemoryVault, RequestLogicLayer, StubDataLayer};

use crate::generator::generate_record;

/// Storage context the demo data layer is scoped to.
const SIM_CONTEXT_ID: &str = "sim-ctx-001";

// ── Arc-wrapped ledger helper ────────────────────────────────────────────────

/// Lets the orchestrator own a `Box<dyn AuditSink>` while the scenario keeps
/// a handle for integrity checks and export.
struct ArcLedger(Arc<InMemoryLedger>);

impl AuditSink for ArcLedger {
    fn record(&self, sensitivity: Sensitivity, message: &str) -> SafeCoreResult<()> {
        self.0.record(sensitivity, message)
    }
}

// ── Run configuration ────────────────────────────────────────────────────────

/// Knobs a scenario turns to shape the access context.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Send the `mfa_verified` header with the request.
    pub auth_flag: bool,
    /// How long ago the session was last active, in seconds.
    pub idle_secs: i64,
}

impl Default for RunOptions {
    /// A fresh, authorized session.
    fn default() -> Self {
        Self {
            auth_flag: true,
            idle_secs: 0,
        }
    }
}

/// Everything a scenario needs to report on one run.
pub struct RunArtifacts {
    /// The record generated for this run.
    pub record: PatientRecord,
    /// The ledger the orchestrator wrote to.
    pub ledger: Arc<InMemoryLedger>,
    /// The pipeline outcome.
    pub result: SafeCoreResult<SimulationReport>,
}

/// Generate a record, wire up the reference stack, and run the pipeline once.
pub fn execute_run(opts: &RunOptions) -> RunArtifacts {
    let record = generate_record();
    let ledger = Arc::new(InMemoryLedger::new());

    let orchestrator = SimulationOrchestrator::new(
        Box::new(InMemoryVault::new()),
        Box::new(StubDataLayer::new(SIM_CONTEXT_ID)),
        Box::new(RequestLogicLayer::default()),
        Box::new(ArcLedger(Arc::clone(&ledger))),
    );

    let mut ctx = AccessContext::new(Utc::now() - Duration::seconds(opts.idle_secs));
    if opts.auth_flag {
        ctx = ctx.with_header(MFA_HEADER, "true");
    }

    let result = orchestrator.run(&record, &ctx);
    ledger.finalize();

    RunArtifacts {
        record,
        ledger,
        result,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
