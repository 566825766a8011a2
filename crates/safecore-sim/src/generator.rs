//! Synthetic patient record generation.
//!
//! All data produced here is hardcoded pools plus random digits — entirely
//! fictional. This module acts as a stand-in for a real intake feed in a
//! production deployment.

use rand::Rng;

use safecore_contracts::record::{MedicalData, PatientPii, PatientRecord};

/// The fixed condition pool records draw from.
const CONDITIONS: [&str; 5] = [
    "Hypertension",
    "Type 2 Diabetes",
    "Asthma",
    "Migraine",
    "Fracture",
];

/// The fixed name pool records draw from.
const NAMES: [&str; 5] = [
    "John Doe",
    "Jane Smith",
    "Alice Jones",
    "Bob Brown",
    "Charlie Davis",
];

/// Generate one synthetic patient record with nested PII and medical fields.
///
/// The SSN is shaped `NNN-NN-NNNN`, the DOB falls in 1950–2005 (days capped
/// at 28 so every month is valid), and the diagnosis code is shaped `ICD-NN`.
pub fn generate_record() -> PatientRecord {
    let mut rng = rand::thread_rng();

    let pii = PatientPii {
        name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
        ssn: format!(
            "{}-{:02}-{:04}",
            rng.gen_range(100..=999),
            rng.gen_range(10..=99),
            rng.gen_range(1000..=9999)
        ),
        dob: format!(
            "{}-{:02}-{:02}",
            rng.gen_range(1950..=2005),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28)
        ),
    };

    let medical = MedicalData {
        condition: CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_string(),
        notes: "Patient reports mild symptoms. Prescribed standard course.".to_string(),
        diagnosis_code: format!("ICD-{}", rng.gen_range(10..=99)),
    };

    PatientRecord {
        request_id: uuid::Uuid::new_v4(),
        patient_pii: pii,
        medical_data: medical,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
