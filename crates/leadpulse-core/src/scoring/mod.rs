//! Four-dimension patient engagement scoring.
//!
//! Dimension caps:
//! - Engagement (interaction history): 30
//! - Value (treatment interest and payments): 25
//! - Timing (freshness and momentum): 25
//! - Fit (profile completeness and channel): 20
//!
//! Total = sum of dimensions, clamped to [0, 100].

mod dimensions;

use chrono::{DateTime, Utc};

use crate::models::{Patient, Score, ScoredPatient, Treatment};

/// Scoring engine over the clinic's treatment catalog.
///
/// Evaluation is pure: the caller supplies `now`, the engine never reads
/// the clock and never mutates a patient record.
pub struct ScoringEngine<'a> {
    catalog: &'a [Treatment],
}

impl<'a> ScoringEngine<'a> {
    /// Create a new engine.
    pub fn new(catalog: &'a [Treatment]) -> Self {
        Self { catalog }
    }

    /// Score a single patient at the given instant.
    pub fn score(&self, patient: &Patient, now: DateTime<Utc>) -> Score {
        Score::from_dimensions(
            dimensions::engagement_points(patient),
            dimensions::value_points(patient, self.catalog),
            dimensions::timing_points(patient, now),
            dimensions::fit_points(patient),
        )
    }

    /// Score every patient in the slice, preserving input order.
    pub fn score_all<'p>(
        &self,
        patients: &'p [Patient],
        now: DateTime<Utc>,
    ) -> Vec<ScoredPatient<'p>> {
        tracing::debug!(patients = patients.len(), "scoring batch");

        patients
            .iter()
            .map(|patient| ScoredPatient {
                patient,
                score: self.score(patient, now),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FollowUp, FollowUpType, LeadSource, Note};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn catalog() -> Vec<Treatment> {
        vec![
            Treatment::new("tx-implant".into(), "Dental Implant".into(), 2500.0),
            Treatment::new("tx-whitening".into(), "Whitening".into(), 300.0),
        ]
    }

    #[test]
    fn test_score_is_sum_of_dimensions() {
        let catalog = catalog();
        let engine = ScoringEngine::new(&catalog);
        let now = fixed_now();

        let mut patient = Patient::new("Ana Torres".into(), LeadSource::Referral);
        patient.created_at = now - Duration::days(2);
        patient.updated_at = now - Duration::days(2);
        patient.email = Some("ana@example.com".into());
        patient.interests = vec!["dental implant".into()];
        patient.notes = vec![Note::new("asked about financing".into())];

        let score = engine.score(&patient, now);
        assert_eq!(
            score.total,
            score.engagement + score.value + score.timing + score.fit
        );
        // notes: 2, implant interest: 20, age 2d: 12 + idle 2d: 8, email 3 + referral 5
        assert_eq!(score.engagement, 2);
        assert_eq!(score.value, 20);
        assert_eq!(score.timing, 20);
        assert_eq!(score.fit, 11);
        assert_eq!(score.total, 53);
    }

    #[test]
    fn test_score_all_preserves_input_order() {
        let catalog = catalog();
        let engine = ScoringEngine::new(&catalog);
        let now = fixed_now();

        let patients = vec![
            Patient::new("First".into(), LeadSource::Other),
            Patient::new("Second".into(), LeadSource::Other),
            Patient::new("Third".into(), LeadSource::Other),
        ];

        let scored = engine.score_all(&patients, now);
        assert_eq!(scored.len(), 3);
        assert_eq!(scored[0].patient.name, "First");
        assert_eq!(scored[1].patient.name, "Second");
        assert_eq!(scored[2].patient.name, "Third");
    }

    #[test]
    fn test_score_all_empty_input() {
        let catalog = catalog();
        let engine = ScoringEngine::new(&catalog);

        let scored = engine.score_all(&[], fixed_now());
        assert!(scored.is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let catalog = catalog();
        let engine = ScoringEngine::new(&catalog);
        let now = fixed_now();

        let mut patient = Patient::new("Ana".into(), LeadSource::Instagram);
        patient.phone = Some("+34600111222".into());
        patient
            .follow_ups
            .push(FollowUp::new(FollowUpType::Call, now + Duration::hours(2)));

        let first = engine.score(&patient, now);
        let second = engine.score(&patient, now);
        assert_eq!(first, second);
    }
}
