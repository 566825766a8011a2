//! Synthetic patient record types.
//!
//! These are the data shapes flowing through the "Patient Zero" simulation.
//! Records are generated fresh per run, never mutated, and discarded at
//! process end — nothing here persists.

use serde::{Deserialize, Serialize};

/// Direct identifiers for a (fictional) patient.
///
/// This is the sensitive half of a record: the simulation de-links it from
/// the medical data before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientPii {
    pub name: String,
    /// Shaped `NNN-NN-NNNN`. Entirely synthetic.
    pub ssn: String,
    /// ISO date string, e.g. "1972-04-09".
    pub dob: String,
}

impl PatientPii {
    /// The composite identity string handed to the vault: `"{name}|{ssn}"`.
    ///
    /// The pipe-joined form is what gets tokenized and what detokenization
    /// must recover exactly.
    pub fn composite_identity(&self) -> String {
        format!("{}|{}", self.name, self.ssn)
    }
}

/// The clinical half of a record — stored keyed by token, never by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalData {
    pub condition: String,
    pub notes: String,
    /// Shaped `ICD-NN`.
    pub diagnosis_code: String,
}

/// One complete synthetic patient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Unique per generated record; appears in audit entries.
    pub request_id: uuid::Uuid,
    pub patient_pii: PatientPii,
    pub medical_data: MedicalData,
}
