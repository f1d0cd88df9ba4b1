//! Engagement report export for the UI and operator layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{LeadSource, LeadStatus, Tier};
use crate::priority::{self, TierCounts};
use crate::scoring::ScoringEngine;
use crate::snapshot::Snapshot;

/// Ranked engagement report over a whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// One row per patient, highest total first
    pub rows: Vec<ReportRow>,
}

/// Engagement report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Evaluation instant the report was built at
    pub generated_at: DateTime<Utc>,
    /// Number of patients in the snapshot
    pub patient_count: usize,
    /// Patients per temperature tier
    pub tier_counts: TierCounts,
}

/// Single report row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Patient UUID
    pub patient_id: String,
    /// Display name
    pub name: String,
    /// Funnel stage
    pub status: LeadStatus,
    /// Acquisition channel
    pub source: LeadSource,
    /// Engagement dimension points
    pub engagement: u8,
    /// Value dimension points
    pub value: u8,
    /// Timing dimension points
    pub timing: u8,
    /// Fit dimension points
    pub fit: u8,
    /// Total score
    pub total: u8,
    /// Temperature tier
    pub tier: Tier,
}

impl EngagementReport {
    /// Build a ranked report from a snapshot at the given instant.
    pub fn build(snapshot: &Snapshot, now: DateTime<Utc>) -> Self {
        tracing::debug!(
            patients = snapshot.patients.len(),
            "building engagement report"
        );

        let engine = ScoringEngine::new(&snapshot.treatments);
        let ranked = priority::rank(&engine, &snapshot.patients, now);

        let rows = ranked
            .iter()
            .map(|entry| ReportRow {
                patient_id: entry.patient.id.clone(),
                name: entry.patient.name.clone(),
                status: entry.patient.status,
                source: entry.patient.source,
                engagement: entry.score.engagement,
                value: entry.score.value,
                timing: entry.score.timing,
                fit: entry.score.fit,
                total: entry.score.total,
                tier: entry.score.tier(),
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                generated_at: now,
                patient_count: snapshot.patients.len(),
                tier_counts: priority::tally(&ranked),
            },
            rows,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("patient_id,name,status,source,engagement,value,timing,fit,total,tier\n");

        // Rows
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                escape_csv(&row.patient_id),
                escape_csv(&row.name),
                row.status.label(),
                row.source.label(),
                row.engagement,
                row.value,
                row.timing,
                row.fit,
                row.total,
                row.tier.label(),
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
