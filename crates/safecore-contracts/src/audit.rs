//! Audit classification types.

use serde::{Deserialize, Serialize};

/// Sensitivity classification attached to every audit entry and banned
/// pattern. Rendered uppercase everywhere a human sees it, matching the
/// `[AUDIT] [CRITICAL] …` log convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
    Critical,
}

impl Sensitivity {
    /// The uppercase label used in log lines and the hash-chain payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sensitivity::Low => "LOW",
            Sensitivity::Medium => "MEDIUM",
            Sensitivity::High => "HIGH",
            Sensitivity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
