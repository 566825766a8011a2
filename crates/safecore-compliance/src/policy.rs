//! Scan policy types and configuration schema.
//!
//! A `ScanPolicy` holds the banned-pattern list, the extensions worth
//! reading, and any directory excludes. The built-in default mirrors the
//! shipped SafeCore checker; a TOML file can override any part of it.
//!
//! Matching is literal substring, case-sensitive, with no escaping or
//! context awareness. That crudeness is intentional and preserved — a
//! `password=` inside documentation is flagged exactly like one in code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use safecore_contracts::{
    audit::Sensitivity,
    error::{SafeCoreError, SafeCoreResult},
};

/// A single banned literal substring with its classification.
///
/// Example in TOML:
/// ```toml
/// [[patterns]]
/// pattern = "PRIVATE_KEY"
/// sensitivity = "CRITICAL"
/// description = "Private cryptographic material"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedPattern {
    /// The literal substring to search for.
    pub pattern: String,

    /// Severity reported with each violation.
    pub sensitivity: Sensitivity,

    /// Human-readable explanation shown in violation output.
    pub description: String,
}

/// The full scanner configuration, deserializable from TOML.
///
/// Every field has a default, so an empty document yields the built-in
/// policy and a partial document overrides only what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPolicy {
    /// Banned literal substrings, checked against every scanned file.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<BannedPattern>,

    /// File extensions (without the dot) whose files are read and scanned.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names skipped entirely during traversal. Empty by default:
    /// the scanner visits every file under the root.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
}

fn default_patterns() -> Vec<BannedPattern> {
    vec![
        BannedPattern {
            pattern: "AWS_ACCESS_KEY".to_string(),
            sensitivity: Sensitivity::Critical,
            description: "Hardcoded cloud credential".to_string(),
        },
        BannedPattern {
            pattern: "PRIVATE_KEY".to_string(),
            sensitivity: Sensitivity::Critical,
            description: "Private cryptographic material".to_string(),
        },
        BannedPattern {
            pattern: "password=".to_string(),
            sensitivity: Sensitivity::High,
            description: "Potential hardcoded password".to_string(),
        },
        BannedPattern {
            pattern: "alert(".to_string(),
            sensitivity: Sensitivity::Medium,
            description: "Potential XSS testing leak".to_string(),
        },
    ]
}

fn default_extensions() -> Vec<String> {
    ["py", "js", "ts", "java", "md", "json", "html"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            extensions: default_extensions(),
            exclude_dirs: Vec::new(),
        }
    }
}

impl ScanPolicy {
    /// Parse `s` as TOML and build a `ScanPolicy`.
    ///
    /// Returns `SafeCoreError::ConfigError` if the TOML is malformed or does
    /// not match the expected schema.
    pub fn from_toml_str(s: &str) -> SafeCoreResult<Self> {
        toml::from_str(s).map_err(|e| SafeCoreError::ConfigError {
            reason: format!("failed to parse scan policy TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML scan policy.
    pub fn from_file(path: &Path) -> SafeCoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SafeCoreError::ConfigError {
            reason: format!("failed to read scan policy '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// True if `path` carries one of the scanned extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.iter().any(|allowed| allowed == ext),
            None => false,
        }
    }

    /// True if a directory with this name should be skipped entirely.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
}
