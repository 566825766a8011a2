//! Compliance manifest validation.
//!
//! The manifest is a JSON document at a fixed name under the scan root,
//! asserting the project's claimed compliance level. Validation is
//! presence/shape only: the declared level is reported, never checked
//! against an enum.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

/// The fixed manifest file name, resolved relative to the scan root.
pub const MANIFEST_FILE: &str = "safecore.manifest.json";

/// The JSON Schema every manifest must satisfy: an object carrying a
/// `compliance_level` that is a string or a number.
fn manifest_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["compliance_level"],
        "properties": {
            "compliance_level": { "type": ["string", "number"] }
        }
    })
}

/// The outcome of checking one manifest.
///
/// None of these variants is a process error — the checker folds them into
/// its overall pass/fail and exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestStatus {
    /// Manifest present and well-shaped; `level` is the declared value
    /// rendered as text.
    Found { level: String },

    /// No manifest file at the expected path.
    Missing,

    /// The file exists but is not valid JSON, or fails the schema.
    Invalid { reason: String },
}

impl ManifestStatus {
    /// True only for a well-shaped manifest.
    pub fn passed(&self) -> bool {
        matches!(self, ManifestStatus::Found { .. })
    }
}

/// Check the manifest under `root`.
///
/// Missing file → `Missing`. Unreadable file, JSON parse failure, or schema
/// failure (no `compliance_level`, wrong type) → `Invalid` with a reason.
/// Otherwise `Found` with the declared level.
pub fn check_manifest(root: &Path) -> ManifestStatus {
    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return ManifestStatus::Missing;
    }

    let contents = match std::fs::read_to_string(&manifest_path) {
        Ok(c) => c,
        Err(e) => {
            return ManifestStatus::Invalid {
                reason: format!("unreadable manifest: {}", e),
            }
        }
    };

    let document: Value = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            return ManifestStatus::Invalid {
                reason: format!("invalid JSON: {}", e),
            }
        }
    };

    let schema = manifest_schema();
    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            // The static schema compiles; this arm exists so a future edit
            // surfaces as a validation failure instead of a panic.
            return ManifestStatus::Invalid {
                reason: format!("manifest schema failed to compile: {}", e),
            };
        }
    };

    if let Some(error) = validator.iter_errors(&document).next() {
        return ManifestStatus::Invalid {
            reason: format!("schema violation at {}: {}", error.instance_path, error),
        };
    }

    // Schema guarantees presence; render string levels bare and everything
    // else as JSON text.
    let level = match &document["compliance_level"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    debug!(level = %level, "manifest validated");
    ManifestStatus::Found { level }
}
