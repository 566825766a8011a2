//! SafeCore Compliance Checker — CLI
//!
//! Validates the `safecore.manifest.json` at the target root and scans the
//! tree for banned literal substrings.  Exit code 0 only when both checks
//! pass.
//!
//! Usage:
//!   compliance-checker [PATH]
//!   compliance-checker [PATH] --policy scan-policy.toml
//!   RUST_LOG=debug compliance-checker .

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use safecore_compliance::{ComplianceScanner, ManifestStatus, ScanPolicy, MANIFEST_FILE};

// ── CLI definition ────────────────────────────────────────────────────────────

/// SafeCore compliance scan: manifest shape plus secret scan.
#[derive(Parser)]
#[command(
    name = "compliance-checker",
    about = "SafeCore compliance checker",
    long_about = "Checks that the target directory declares a compliance manifest\n\
                  and contains no banned literal substrings in its text files."
)]
struct Cli {
    /// Directory to scan.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// TOML scan policy overriding the built-in patterns and extensions.
    #[arg(long)]
    policy: Option<PathBuf>,
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

    let policy = match &cli.policy {
        Some(path) => match ScanPolicy::from_file(path) {
            Ok(policy) => policy,
            Err(e) => {
                eprintln!("Cannot load scan policy: {}", e);
                std::process::exit(1);
            }
        },
        None => ScanPolicy::default(),
    };

    println!("Starting SafeCore compliance scan on: {}", cli.path.display());
    println!();

    let scanner = ComplianceScanner::new(policy);
    let outcome = scanner.run(&cli.path);

    // ── Manifest verdict ──────────────────────────────────────────────────────
    match &outcome.manifest {
        ManifestStatus::Found { level } => {
            println!("Manifest check: PASS (declared level: {})", level);
        }
        ManifestStatus::Missing => {
            println!("Manifest check: FAIL — {} not found", MANIFEST_FILE);
        }
        ManifestStatus::Invalid { reason } => {
            println!("Manifest check: FAIL — {}", reason);
        }
    }

    // ── Scan verdict ──────────────────────────────────────────────────────────
    for violation in &outcome.scan.violations {
        println!(
            "  VIOLATION [{}]: {} — '{}' found in {}",
            violation.sensitivity,
            violation.description,
            violation.pattern,
            violation.path.display()
        );
    }
    println!(
        "Secret scan:    {} ({} file(s) scanned, {} violation(s))",
        if outcome.scan.passed() { "PASS" } else { "FAIL" },
        outcome.scan.files_scanned,
        outcome.scan.violations.len()
    );

    println!();
    if outcome.passed() {
        println!("COMPLIANCE CHECK PASSED");
    } else {
        println!("COMPLIANCE CHECK FAILED");
        std::process::exit(1);
    }
}
