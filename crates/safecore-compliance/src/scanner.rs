//! The recursive secret scanner.
//!
//! Walks the target tree in directory order, reads every file whose
//! extension the policy names, and flags each banned substring it finds.
//! The scan is best-effort: files that cannot be read as UTF-8 text are
//! skipped silently.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use safecore_contracts::audit::Sensitivity;

use crate::manifest::{check_manifest, ManifestStatus};
use crate::policy::ScanPolicy;

/// One banned substring found in one file.
///
/// At most one violation is produced per (pattern, file) pair — a pattern
/// repeated within a file is flagged once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The banned substring that matched.
    pub pattern: String,
    /// Severity inherited from the pattern definition.
    pub sensitivity: Sensitivity,
    /// Human-readable explanation inherited from the pattern definition.
    pub description: String,
    /// The offending file.
    pub path: PathBuf,
}

/// The aggregate result of one secret scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// All violations, in traversal order.
    pub violations: Vec<Violation>,
    /// Number of files whose content was actually read and scanned.
    pub files_scanned: usize,
}

impl ScanReport {
    /// True iff zero violations were found across the whole tree.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// The combined outcome of manifest check plus secret scan.
#[derive(Debug)]
pub struct ComplianceOutcome {
    pub manifest: ManifestStatus,
    pub scan: ScanReport,
}

impl ComplianceOutcome {
    /// Overall pass: manifest well-shaped AND no violations.
    pub fn passed(&self) -> bool {
        self.manifest.passed() && self.scan.passed()
    }
}

/// Compliance checker over a directory tree: manifest shape plus banned
/// substrings.
pub struct ComplianceScanner {
    policy: ScanPolicy,
}

impl ComplianceScanner {
    /// A scanner with the given policy.
    pub fn new(policy: ScanPolicy) -> Self {
        Self { policy }
    }

    /// A scanner with the built-in default policy.
    pub fn with_defaults() -> Self {
        Self::new(ScanPolicy::default())
    }

    /// The active policy.
    pub fn policy(&self) -> &ScanPolicy {
        &self.policy
    }

    /// Validate the manifest under `root`. See [`check_manifest`].
    pub fn check_manifest(&self, root: &Path) -> ManifestStatus {
        check_manifest(root)
    }

    /// Recursively scan `root` for banned substrings.
    ///
    /// Traversal follows directory order. Only files whose extension the
    /// policy names are read; unreadable or non-UTF-8 files are skipped
    /// without comment (best-effort scan). Each pattern contained in a
    /// file's text yields exactly one violation for that file.
    pub fn scan_for_secrets(&self, root: &Path) -> ScanReport {
        let mut report = ScanReport::default();

        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            // Directory excludes prune the whole subtree; files pass through.
            if entry.file_type().is_dir() {
                match entry.file_name().to_str() {
                    Some(name) => !self.policy.is_excluded_dir(name),
                    None => true,
                }
            } else {
                true
            }
        });

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !self.policy.matches_extension(path) {
                continue;
            }

            // Best-effort read: binary or unreadable files are not errors.
            let content = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(_) => {
                    debug!(path = %path.display(), "skipping unreadable file");
                    continue;
                }
            };
            report.files_scanned += 1;

            for banned in &self.policy.patterns {
                if content.contains(&banned.pattern) {
                    warn!(
                        pattern = %banned.pattern,
                        sensitivity = %banned.sensitivity,
                        path = %path.display(),
                        "banned pattern found"
                    );
                    report.violations.push(Violation {
                        pattern: banned.pattern.clone(),
                        sensitivity: banned.sensitivity,
                        description: banned.description.clone(),
                        path: path.to_path_buf(),
                    });
                }
            }
        }

        report
    }

    /// Run both checks. Both always execute, so the operator sees the full
    /// picture even when the manifest already failed.
    pub fn run(&self, root: &Path) -> ComplianceOutcome {
        ComplianceOutcome {
            manifest: self.check_manifest(root),
            scan: self.scan_for_secrets(root),
        }
    }
}
