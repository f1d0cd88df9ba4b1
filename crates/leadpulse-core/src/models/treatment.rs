//! Treatment catalog entries.

use serde::{Deserialize, Serialize};

/// A treatment offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Treatment {
    /// Catalog identifier
    pub id: String,
    /// Treatment name
    pub name: String,
    /// List price; non-negative
    pub price: f64,
}

impl Treatment {
    /// Create a new catalog entry.
    pub fn new(id: String, name: String, price: f64) -> Self {
        Self { id, name, price }
    }

    /// Whether a patient interest string refers to this treatment.
    ///
    /// Matches case-insensitively against the catalog id or the name.
    /// No trimming or fuzzy matching is applied.
    pub fn matches_interest(&self, interest: &str) -> bool {
        let interest = interest.to_lowercase();
        self.id.to_lowercase() == interest || self.name.to_lowercase() == interest
    }
}
