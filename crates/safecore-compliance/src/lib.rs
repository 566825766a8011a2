//! # safecore-compliance
//!
//! Manifest validation and banned-pattern secret scanning for SafeCore
//! projects.
//!
//! ## Overview
//!
//! This crate provides [`ComplianceScanner`], which runs two independent
//! checks over a directory tree:
//!
//! 1. **Manifest** — a `safecore.manifest.json` at the root must parse as
//!    JSON and declare a `compliance_level` (shape only; the value is
//!    reported, not judged).
//! 2. **Secrets** — every file with a policy-listed extension is read and
//!    checked for banned literal substrings.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use safecore_compliance::{ComplianceScanner, ScanPolicy};
//!
//! let scanner = ComplianceScanner::with_defaults();
//! let outcome = scanner.run(Path::new("."));
//! std::process::exit(if outcome.passed() { 0 } else { 1 });
//! ```
//!
//! ## Matching
//!
//! Detection is literal substring matching — case-sensitive, no escaping,
//! no context awareness. The policy (patterns, extensions, directory
//! excludes) can be replaced wholesale from a TOML file.

pub mod manifest;
pub mod policy;
pub mod scanner;

pub use manifest::{check_manifest, ManifestStatus, MANIFEST_FILE};
pub use policy::{BannedPattern, ScanPolicy};
pub use scanner::{ComplianceOutcome, ComplianceScanner, ScanReport, Violation};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use safecore_contracts::{audit::Sensitivity, error::SafeCoreError};

    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Write `content` at `rel` under `root`, creating parent directories.
    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn write_manifest(root: &Path, content: &str) {
        write_file(root, MANIFEST_FILE, content);
    }

    // ── Manifest ──────────────────────────────────────────────────────────────

    #[test]
    fn manifest_missing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(check_manifest(dir.path()), ManifestStatus::Missing);
    }

    #[test]
    fn manifest_garbage_is_invalid() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), "{ not json");
        match check_manifest(dir.path()) {
            ManifestStatus::Invalid { reason } => {
                assert!(reason.contains("invalid JSON"), "reason: {}", reason);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn manifest_without_level_is_invalid() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"name": "demo"}"#);
        match check_manifest(dir.path()) {
            ManifestStatus::Invalid { reason } => {
                assert!(reason.contains("compliance_level"), "reason: {}", reason);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn manifest_with_wrongly_typed_level_is_invalid() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"compliance_level": true}"#);
        assert!(matches!(
            check_manifest(dir.path()),
            ManifestStatus::Invalid { .. }
        ));
    }

    #[test]
    fn manifest_with_string_level_passes() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"compliance_level": "L2"}"#);
        assert_eq!(
            check_manifest(dir.path()),
            ManifestStatus::Found { level: "L2".to_string() }
        );
    }

    /// Numeric levels are allowed and rendered as text.
    #[test]
    fn manifest_with_numeric_level_passes() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"compliance_level": 3}"#);
        assert_eq!(
            check_manifest(dir.path()),
            ManifestStatus::Found { level: "3".to_string() }
        );
    }

    // ── Secret scan ───────────────────────────────────────────────────────────

    #[test]
    fn scan_flags_banned_substring() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "app/config.py", "db_password=hunter2\n");

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());

        assert!(!report.passed());
        assert_eq!(report.violations.len(), 1);
        let violation = &report.violations[0];
        assert_eq!(violation.pattern, "password=");
        assert_eq!(violation.sensitivity, Sensitivity::High);
        assert!(violation.path.ends_with("app/config.py"));
    }

    #[test]
    fn scan_of_clean_tree_passes() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "src/index.js", "export const ok = 1;\n");
        write_file(dir.path(), "README.md", "# Clean project\n");

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        assert!(report.passed());
        assert_eq!(report.files_scanned, 2);
    }

    #[test]
    fn scan_descends_into_nested_directories() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a/b/c/deep.ts", "const PRIVATE_KEY = 'x';\n");

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].pattern, "PRIVATE_KEY");
    }

    /// Files outside the extension list are never read, whatever they contain.
    #[test]
    fn scan_ignores_unlisted_extensions() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "creds.txt", "AWS_ACCESS_KEY=AKIA123\n");
        write_file(dir.path(), "main.rs", "const PRIVATE_KEY: u8 = 0;\n");

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        assert!(report.passed());
        assert_eq!(report.files_scanned, 0);
    }

    /// A pattern repeated within a file is flagged once for that file.
    #[test]
    fn scan_flags_once_per_pattern_and_file() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "notes.md",
            "password=a\npassword=b\npassword=c\n",
        );

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        assert_eq!(report.violations.len(), 1);
    }

    /// Distinct patterns in one file each produce their own violation.
    #[test]
    fn scan_flags_each_pattern_separately() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "dump.js",
            "const k = 'AWS_ACCESS_KEY'; // password=letmein\n",
        );

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        let mut patterns: Vec<&str> = report
            .violations
            .iter()
            .map(|v| v.pattern.as_str())
            .collect();
        patterns.sort();
        assert_eq!(patterns, vec!["AWS_ACCESS_KEY", "password="]);
    }

    /// Non-UTF-8 files are skipped without failing the scan.
    #[test]
    fn scan_skips_unreadable_files_silently() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("binary.md"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        write_file(dir.path(), "fine.md", "nothing to see\n");

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        assert!(report.passed());
        assert_eq!(report.files_scanned, 1, "only the readable file is counted");
    }

    /// Substring matching is deliberately context-blind: a banned token in
    /// documentation is flagged like one in code.
    #[test]
    fn scan_is_context_blind() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "docs/guide.md",
            "Never commit lines like `password=...` to the repo.\n",
        );

        let report = ComplianceScanner::with_defaults().scan_for_secrets(dir.path());
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn scan_honors_configured_directory_excludes() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "vendor/lib.js", "password=vendored\n");
        write_file(dir.path(), "src/app.js", "clean\n");

        let policy = ScanPolicy {
            exclude_dirs: vec!["vendor".to_string()],
            ..ScanPolicy::default()
        };
        let report = ComplianceScanner::new(policy).scan_for_secrets(dir.path());
        assert!(report.passed());
        assert_eq!(report.files_scanned, 1);
    }

    // ── Scan policy TOML ──────────────────────────────────────────────────────

    #[test]
    fn policy_defaults_cover_shipped_patterns() {
        let policy = ScanPolicy::default();
        let patterns: Vec<&str> = policy.patterns.iter().map(|p| p.pattern.as_str()).collect();
        assert!(patterns.contains(&"AWS_ACCESS_KEY"));
        assert!(patterns.contains(&"PRIVATE_KEY"));
        assert!(patterns.contains(&"password="));
        assert!(policy.exclude_dirs.is_empty());
    }

    #[test]
    fn policy_parses_full_toml() {
        let toml = r#"
            extensions = ["rs"]
            exclude_dirs = ["target"]

            [[patterns]]
            pattern = "SUPER_SECRET"
            sensitivity = "CRITICAL"
            description = "Internal marker"
        "#;

        let policy = ScanPolicy::from_toml_str(toml).unwrap();
        assert_eq!(policy.patterns.len(), 1);
        assert_eq!(policy.patterns[0].pattern, "SUPER_SECRET");
        assert_eq!(policy.patterns[0].sensitivity, Sensitivity::Critical);
        assert_eq!(policy.extensions, vec!["rs"]);
        assert!(policy.is_excluded_dir("target"));
    }

    /// An empty document yields the built-in policy.
    #[test]
    fn policy_empty_toml_uses_defaults() {
        let policy = ScanPolicy::from_toml_str("").unwrap();
        assert_eq!(policy.patterns, ScanPolicy::default().patterns);
        assert_eq!(policy.extensions, ScanPolicy::default().extensions);
    }

    #[test]
    fn policy_rejects_malformed_toml() {
        let result = ScanPolicy::from_toml_str("patterns = not-a-list");
        assert!(matches!(result, Err(SafeCoreError::ConfigError { .. })));
    }

    // ── End-to-end outcome ────────────────────────────────────────────────────

    #[test]
    fn outcome_passes_with_manifest_and_clean_tree() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"compliance_level": "L2"}"#);
        write_file(dir.path(), "src/app.py", "print('ok')\n");

        let outcome = ComplianceScanner::with_defaults().run(dir.path());
        assert!(outcome.passed());
    }

    #[test]
    fn outcome_fails_on_secret_even_with_valid_manifest() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"compliance_level": "L2"}"#);
        write_file(dir.path(), "src/keys.py", "PRIVATE_KEY = '---'\n");

        let outcome = ComplianceScanner::with_defaults().run(dir.path());
        assert!(!outcome.passed());
        assert!(outcome.manifest.passed());
        assert!(!outcome.scan.passed());
    }

    #[test]
    fn outcome_fails_on_missing_manifest_even_with_clean_tree() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "src/app.py", "print('ok')\n");

        let outcome = ComplianceScanner::with_defaults().run(dir.path());
        assert!(!outcome.passed());
        // The scan still ran — both checks always execute.
        assert!(outcome.scan.passed());
    }
}
