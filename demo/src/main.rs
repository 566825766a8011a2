//! SafeCore Reference Runtime — Demo CLI
//!
//! Runs one or all of the three "Patient Zero" demo scenarios.  Each scenario
//! uses real SafeCore components (vault, data layer, logic layer, hash-chained
//! ledger) wired together around a synthetic patient record.
//!
//! Usage:
//!   cargo run -p safecore-demo -- run-all
//!   cargo run -p safecore-demo -- patient-zero
//!   cargo run -p safecore-demo -- patient-zero --no-auth
//!   cargo run -p safecore-demo -- access-denied
//!   cargo run -p safecore-demo -- session-expired

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use safecore_contracts::error::SafeCoreResult;
use safecore_services::DEFAULT_MAX_IDLE_SECS;
use safecore_sim::runner::RunOptions;
use safecore_sim::scenarios::{access_denied, patient_zero, session_expired};

// ── CLI definition ────────────────────────────────────────────────────────────

/// SafeCore — simulated security SDK demo.
///
/// Each subcommand runs one or all of the three simulation scenarios,
/// demonstrating SafeCore's tokenization, storage, and access-check stubs.
#[derive(Parser)]
#[command(
    name = "safecore-demo",
    about = "SafeCore Patient Zero simulation demo",
    long_about = "Runs SafeCore demo scenarios showing identity tokenization,\n\
                  opaque payload storage, access-boundary and inactivity checks,\n\
                  and audit chain integrity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three simulation scenarios in sequence.
    RunAll,
    /// Scenario 1: Patient Zero (full happy-path pipeline).
    PatientZero {
        /// Strip the auth flag from the request headers (expect AccessDenied).
        #[arg(long)]
        no_auth: bool,
        /// Age the session past the idle window (expect SessionExpired).
        #[arg(long)]
        stale_session: bool,
    },
    /// Scenario 2: Access Denied drill (auth flag absent).
    AccessDenied,
    /// Scenario 3: Session Expiry drill (stale last-active timestamp).
    SessionExpired,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::PatientZero { no_auth, stale_session } => {
            patient_zero::run_scenario_with(&RunOptions {
                auth_flag: !no_auth,
                idle_secs: if stale_session { DEFAULT_MAX_IDLE_SECS * 2 } else { 0 },
            })
        }
        Command::AccessDenied => access_denied::run_scenario(),
        Command::SessionExpired => session_expired::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> SafeCoreResult<()> {
    patient_zero::run_scenario()?;
    access_denied::run_scenario()?;
    session_expired::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("SafeCore — Simulated Security SDK");
    println!("Patient Zero Reference Demo");
    println!("=================================");
    println!();
    println!("SafeCore pipeline per run:");
    println!("  [1] Identity tokenized — composite id replaced with a surrogate");
    println!("  [2] Medical data stored keyed by token, wrapped in an opaque blob");
    println!("  [3] Security boundary check — auth flag must be present");
    println!("  [4] Inactivity check — session must be inside the idle window");
    println!("  [5] Retrieval + integrity check, then detokenization");
    println!("  Every stage lands on a SHA-256 hash-chained audit ledger");
    println!();
}
