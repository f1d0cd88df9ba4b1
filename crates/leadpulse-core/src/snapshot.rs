//! Read-only snapshot of the CRM data the engine evaluates.
//!
//! The surrounding application owns storage and hands the engine a
//! decoded snapshot; nothing in here is ever written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Patient, Treatment};

/// Errors decoding or validating a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Invalid(String),
}

/// All patients plus the treatment catalog, as handed over by the CRM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Patient records
    pub patients: Vec<Patient>,
    /// Treatment catalog
    pub treatments: Vec<Treatment>,
}

impl Snapshot {
    /// Create a snapshot from already-decoded records.
    pub fn new(patients: Vec<Patient>, treatments: Vec<Treatment>) -> Self {
        Self {
            patients,
            treatments,
        }
    }

    /// Decode a snapshot from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the monetary invariants: catalog prices and paid totals
    /// must be non-negative real numbers.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for treatment in &self.treatments {
            if treatment.price < 0.0 || treatment.price.is_nan() {
                return Err(SnapshotError::Invalid(format!(
                    "treatment {} has invalid price {}",
                    treatment.id, treatment.price
                )));
            }
        }
        for patient in &self.patients {
            if let Some(paid) = patient.total_paid {
                if paid < 0.0 || paid.is_nan() {
                    return Err(SnapshotError::Invalid(format!(
                        "patient {} has invalid total_paid {}",
                        patient.id, paid
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FollowUpType, LeadSource};

    #[test]
    fn test_json_round_trip() {
        let mut patient = Patient::new("Ana Torres".into(), LeadSource::Referral);
        patient.total_paid = Some(150.0);
        let snapshot = Snapshot::new(
            vec![patient],
            vec![Treatment::new("tx-01".into(), "Whitening".into(), 300.0)],
        );

        let json = snapshot.to_json().unwrap();
        let decoded = Snapshot::from_json(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_from_json_wire_format() {
        let json = r#"{
            "patients": [{
                "id": "p-1",
                "name": "Ana Torres",
                "source": "instagram",
                "status": "contacted",
                "email": "ana@example.com",
                "phone": null,
                "identification": null,
                "instagram": "@ana",
                "interests": ["whitening"],
                "notes": [],
                "follow_ups": [{
                    "id": "f-1",
                    "type": "appointment",
                    "scheduled_at": "2024-06-03T10:00:00Z",
                    "completed": false,
                    "attendance": "no-show",
                    "reminder_sent": null
                }],
                "total_paid": 0.0,
                "created_at": "2024-06-01T09:00:00Z",
                "updated_at": "2024-06-01T09:00:00Z",
                "last_contact_at": null
            }],
            "treatments": [
                {"id": "tx-01", "name": "Whitening", "price": 300.0}
            ]
        }"#;

        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.patients.len(), 1);
        assert_eq!(snapshot.patients[0].source, LeadSource::Instagram);
        assert_eq!(
            snapshot.patients[0].follow_ups[0].kind,
            FollowUpType::Appointment
        );
        assert_eq!(snapshot.treatments[0].price, 300.0);
    }

    #[test]
    fn test_rejects_negative_price() {
        let snapshot = Snapshot::new(
            Vec::new(),
            vec![Treatment::new("tx-01".into(), "Whitening".into(), -1.0)],
        );
        let json = serde_json::to_string(&snapshot).unwrap();

        let err = Snapshot::from_json(&json).unwrap_err();
        assert!(matches!(err, SnapshotError::Invalid(_)));
        assert!(err.to_string().contains("tx-01"));
    }

    #[test]
    fn test_rejects_negative_total_paid() {
        let mut patient = Patient::new("Ana".into(), LeadSource::Other);
        patient.total_paid = Some(-50.0);
        let snapshot = Snapshot::new(vec![patient], Vec::new());
        let json = serde_json::to_string(&snapshot).unwrap();

        let err = Snapshot::from_json(&json).unwrap_err();
        assert!(matches!(err, SnapshotError::Invalid(_)));
    }

    #[test]
    fn test_zero_amounts_are_valid() {
        let mut patient = Patient::new("Ana".into(), LeadSource::Other);
        patient.total_paid = Some(0.0);
        let snapshot = Snapshot::new(
            vec![patient],
            vec![Treatment::new("tx-01".into(), "Consult".into(), 0.0)],
        );
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let snapshot = Snapshot::from_json(r#"{"patients": [], "treatments": []}"#).unwrap();
        assert!(snapshot.patients.is_empty());
        assert!(snapshot.treatments.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = Snapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
