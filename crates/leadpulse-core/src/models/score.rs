//! Score breakdown and temperature tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::patient::Patient;

/// Per-dimension score breakdown for a single patient.
///
/// Each dimension is independently capped; the total is their sum,
/// clamped to [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    /// Interaction history points, capped at 30
    pub engagement: u8,
    /// Monetary potential points, capped at 25
    pub value: u8,
    /// Recency and momentum points, capped at 25
    pub timing: u8,
    /// Profile completeness points, capped at 20
    pub fit: u8,
    /// Sum of the four dimensions, clamped to [0, 100]
    pub total: u8,
}

impl Score {
    /// Cap on the engagement dimension.
    pub const ENGAGEMENT_MAX: u8 = 30;
    /// Cap on the value dimension.
    pub const VALUE_MAX: u8 = 25;
    /// Cap on the timing dimension.
    pub const TIMING_MAX: u8 = 25;
    /// Cap on the fit dimension.
    pub const FIT_MAX: u8 = 20;
    /// Cap on the total score.
    pub const TOTAL_MAX: u8 = 100;

    /// Assemble a score from already-capped dimension values.
    pub fn from_dimensions(engagement: u8, value: u8, timing: u8, fit: u8) -> Self {
        let total = engagement as u16 + value as u16 + timing as u16 + fit as u16;
        Self {
            engagement,
            value,
            timing,
            fit,
            total: total.min(Self::TOTAL_MAX as u16) as u8,
        }
    }

    /// Temperature tier for this score's total.
    pub fn tier(&self) -> Tier {
        Tier::from_total(self.total)
    }
}

/// Temperature band derived from a total score.
///
/// Bands are half-open below 100: [0,20) cold, [20,40) cool,
/// [40,60) neutral, [60,80) warm, [80,100] hot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Cold,
    Cool,
    Neutral,
    Warm,
    Hot,
}

impl Tier {
    /// Map a total score to its temperature band.
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=19 => Tier::Cold,
            20..=39 => Tier::Cool,
            40..=59 => Tier::Neutral,
            60..=79 => Tier::Warm,
            _ => Tier::Hot,
        }
    }

    /// Lowercase label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Cold => "cold",
            Tier::Cool => "cool",
            Tier::Neutral => "neutral",
            Tier::Warm => "warm",
            Tier::Hot => "hot",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A patient paired with its computed score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredPatient<'a> {
    /// The scored patient
    pub patient: &'a Patient,
    /// Score breakdown
    pub score: Score,
}
