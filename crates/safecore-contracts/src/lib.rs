//! # safecore-contracts
//!
//! Shared types and the error taxonomy for the SafeCore reference runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod audit;
pub mod context;
pub mod error;
pub mod identity;
pub mod record;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;
    use audit::Sensitivity;
    use context::{AccessContext, MFA_HEADER};
    use error::SafeCoreError;
    use identity::{IdentityToken, StoragePayload};
    use record::{MedicalData, PatientPii, PatientRecord};

    // ── AccessContext ────────────────────────────────────────────────────────

    #[test]
    fn fresh_context_has_no_headers() {
        let ctx = AccessContext::fresh();
        assert!(!ctx.has_header(MFA_HEADER));
        assert!(ctx.headers.is_empty());
    }

    #[test]
    fn with_header_marks_presence() {
        let ctx = AccessContext::fresh().with_header(MFA_HEADER, "true");
        assert!(ctx.has_header(MFA_HEADER));
        assert!(!ctx.has_header("authorization"));
    }

    #[test]
    fn header_presence_ignores_value() {
        // The boundary check only cares that the key exists.
        let ctx = AccessContext::fresh().with_header(MFA_HEADER, "");
        assert!(ctx.has_header(MFA_HEADER));
    }

    // ── Composite identity ───────────────────────────────────────────────────

    #[test]
    fn composite_identity_is_pipe_joined() {
        let pii = PatientPii {
            name: "Jane Smith".to_string(),
            ssn: "123-45-6789".to_string(),
            dob: "1970-01-01".to_string(),
        };
        assert_eq!(pii.composite_identity(), "Jane Smith|123-45-6789");
    }

    // ── Serde round-trips ────────────────────────────────────────────────────

    #[test]
    fn patient_record_round_trips() {
        let original = PatientRecord {
            request_id: uuid::Uuid::new_v4(),
            patient_pii: PatientPii {
                name: "Bob Brown".to_string(),
                ssn: "321-54-9876".to_string(),
                dob: "1988-06-15".to_string(),
            },
            medical_data: MedicalData {
                condition: "Asthma".to_string(),
                notes: "Patient reports mild symptoms.".to_string(),
                diagnosis_code: "ICD-42".to_string(),
            },
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PatientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn storage_payload_round_trips() {
        let original = StoragePayload {
            patient_token: IdentityToken::new("tok-abc"),
            data: MedicalData {
                condition: "Migraine".to_string(),
                notes: "Prescribed standard course.".to_string(),
                diagnosis_code: "ICD-17".to_string(),
            },
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: StoragePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn sensitivity_serializes_uppercase() {
        let json = serde_json::to_string(&Sensitivity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let decoded: Sensitivity = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(decoded, Sensitivity::High);
    }

    #[test]
    fn sensitivity_orders_by_severity() {
        assert!(Sensitivity::Low < Sensitivity::Medium);
        assert!(Sensitivity::Medium < Sensitivity::High);
        assert!(Sensitivity::High < Sensitivity::Critical);
    }

    // ── SafeCoreError display messages ───────────────────────────────────────

    #[test]
    fn error_access_denied_display() {
        let err = SafeCoreError::AccessDenied {
            reason: "mfa flag absent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("access denied"));
        assert!(msg.contains("mfa flag absent"));
    }

    #[test]
    fn error_session_expired_display() {
        let err = SafeCoreError::SessionExpired {
            idle_secs: 1200,
            max_idle_secs: 900,
        };
        let msg = err.to_string();
        assert!(msg.contains("session expired"));
        assert!(msg.contains("1200"));
        assert!(msg.contains("900"));
    }

    #[test]
    fn error_token_not_found_display() {
        let err = SafeCoreError::TokenNotFound {
            token: "tok-missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("token not found"));
        assert!(msg.contains("tok-missing"));
    }

    #[test]
    fn error_blob_malformed_display() {
        let err = SafeCoreError::BlobMalformed {
            reason: "missing frame prefix".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed blob"));
        assert!(msg.contains("missing frame prefix"));
    }

    #[test]
    fn error_config_error_display() {
        let err = SafeCoreError::ConfigError {
            reason: "bad scan policy TOML".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("bad scan policy TOML"));
    }
}
