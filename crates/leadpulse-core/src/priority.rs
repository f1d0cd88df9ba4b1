//! Lead prioritization over scored patients.
//!
//! Slices a scored batch into the views the front desk works from: the
//! ranked list, the high-priority cut, the needs-attention list of fresh
//! leads with weak scores, and per-tier tallies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Patient, ScoredPatient, Tier};
use crate::scoring::ScoringEngine;

/// Minimum total for the high-priority slice.
const HIGH_PRIORITY_MIN: u8 = 60;

/// Totals below this mark a lead as underperforming.
const ATTENTION_SCORE_CEILING: u8 = 40;

/// Maximum whole-day age for the needs-attention slice.
const ATTENTION_MAX_AGE_DAYS: i64 = 7;

/// Sort scored patients by total, highest first.
///
/// The sort is stable, so patients with equal totals keep their input
/// order.
pub fn sort_by_score_desc(scored: &mut [ScoredPatient]) {
    scored.sort_by(|a, b| b.score.total.cmp(&a.score.total));
}

/// Score a whole snapshot and return it ranked, highest total first.
pub fn rank<'p>(
    engine: &ScoringEngine,
    patients: &'p [Patient],
    now: DateTime<Utc>,
) -> Vec<ScoredPatient<'p>> {
    let mut scored = engine.score_all(patients, now);
    sort_by_score_desc(&mut scored);
    scored
}

/// Patients worth a same-day call: total of 60 or more.
pub fn high_priority<'p>(scored: &[ScoredPatient<'p>]) -> Vec<ScoredPatient<'p>> {
    scored
        .iter()
        .filter(|entry| entry.score.total >= HIGH_PRIORITY_MIN)
        .copied()
        .collect()
}

/// Open leads no older than a week whose total is still under 40.
///
/// These are recent sign-ups the clinic has not managed to engage yet;
/// closed and lost leads are skipped regardless of score.
pub fn needs_attention<'p>(
    scored: &[ScoredPatient<'p>],
    now: DateTime<Utc>,
) -> Vec<ScoredPatient<'p>> {
    scored
        .iter()
        .filter(|entry| {
            entry.score.total < ATTENTION_SCORE_CEILING
                && (now - entry.patient.created_at).num_days() <= ATTENTION_MAX_AGE_DAYS
                && entry.patient.status.is_open()
        })
        .copied()
        .collect()
}

/// Number of patients in each temperature tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierCounts {
    pub hot: usize,
    pub warm: usize,
    pub neutral: usize,
    pub cool: usize,
    pub cold: usize,
}

/// Tally a scored batch into per-tier counts.
pub fn tally(scored: &[ScoredPatient]) -> TierCounts {
    let mut counts = TierCounts::default();
    for entry in scored {
        match entry.score.tier() {
            Tier::Hot => counts.hot += 1,
            Tier::Warm => counts.warm += 1,
            Tier::Neutral => counts.neutral += 1,
            Tier::Cool => counts.cool += 1,
            Tier::Cold => counts.cold += 1,
        }
    }
    counts
}
