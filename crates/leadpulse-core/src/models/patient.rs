//! Patient lead models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::followup::FollowUp;

/// Acquisition channel for a lead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Referral,
    Instagram,
    Whatsapp,
    Website,
    Facebook,
    Google,
    Other,
}

impl LeadSource {
    /// Lowercase label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            LeadSource::Referral => "referral",
            LeadSource::Instagram => "instagram",
            LeadSource::Whatsapp => "whatsapp",
            LeadSource::Website => "website",
            LeadSource::Facebook => "facebook",
            LeadSource::Google => "google",
            LeadSource::Other => "other",
        }
    }
}

/// Funnel stage of a lead.
///
/// Stage transitions are owned by the CRM layer; this engine treats the
/// stage as an opaque input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Scheduled,
    Closed,
    Lost,
}

impl LeadStatus {
    /// Whether the lead is still live in the funnel.
    pub fn is_open(&self) -> bool {
        !matches!(self, LeadStatus::Closed | LeadStatus::Lost)
    }

    /// Lowercase label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Scheduled => "scheduled",
            LeadStatus::Closed => "closed",
            LeadStatus::Lost => "lost",
        }
    }
}

/// A free-text note attached to a patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Note UUID
    pub id: String,
    /// Note body
    pub body: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note.
    pub fn new(body: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            body,
            created_at: Utc::now(),
        }
    }
}

/// A patient lead record as handed over in the CRM snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Patient UUID
    pub id: String,
    /// Display name
    pub name: String,
    /// Acquisition channel
    pub source: LeadSource,
    /// Funnel stage
    pub status: LeadStatus,
    /// Email address, if on file
    pub email: Option<String>,
    /// Phone number, if on file
    pub phone: Option<String>,
    /// Identification number, if on file
    pub identification: Option<String>,
    /// Instagram handle, if on file
    pub instagram: Option<String>,
    /// Treatment names or catalog ids the patient asked about
    pub interests: Vec<String>,
    /// Free-text notes
    pub notes: Vec<Note>,
    /// Scheduled follow-up actions
    pub follow_ups: Vec<FollowUp>,
    /// Total amount already paid; non-negative
    pub total_paid: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Last outbound contact timestamp
    pub last_contact_at: Option<DateTime<Utc>>,
}

impl Patient {
    /// Create a new lead with required fields.
    pub fn new(name: String, source: LeadSource) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            source,
            status: LeadStatus::New,
            email: None,
            phone: None,
            identification: None,
            instagram: None,
            interests: Vec::new(),
            notes: Vec::new(),
            follow_ups: Vec::new(),
            total_paid: None,
            created_at: now,
            updated_at: now,
            last_contact_at: None,
        }
    }

    /// Whether an email address is on file.
    pub fn has_email(&self) -> bool {
        populated(&self.email)
    }

    /// Whether a phone number is on file.
    pub fn has_phone(&self) -> bool {
        populated(&self.phone)
    }

    /// Whether an identification number is on file.
    pub fn has_identification(&self) -> bool {
        populated(&self.identification)
    }

    /// Whether an instagram handle is on file.
    pub fn has_instagram(&self) -> bool {
        populated(&self.instagram)
    }

    /// The most recent touch point: `last_contact_at` when present,
    /// falling back to `updated_at`.
    pub fn last_touch(&self) -> DateTime<Utc> {
        self.last_contact_at.unwrap_or(self.updated_at)
    }

    /// Whether any follow-up is still pending and scheduled after `now`.
    pub fn has_pending_follow_up_after(&self, now: DateTime<Utc>) -> bool {
        self.follow_ups
            .iter()
            .any(|f| !f.completed && f.scheduled_at > now)
    }
}

/// An optional text field counts as populated only when non-empty.
fn populated(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some(v) if !v.is_empty())
}
