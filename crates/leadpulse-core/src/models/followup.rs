//! Follow-up actions scheduled against a patient lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of scheduled follow-up action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpType {
    Call,
    Message,
    Email,
    Meeting,
    Appointment,
    Whatsapp,
}

/// Recorded outcome of a kept (or missed) appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Attended,
    NoShow,
}

/// A single scheduled follow-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowUp {
    /// Follow-up UUID
    pub id: String,
    /// Action kind
    #[serde(rename = "type")]
    pub kind: FollowUpType,
    /// When the action is scheduled for
    pub scheduled_at: DateTime<Utc>,
    /// Whether the action has been carried out
    pub completed: bool,
    /// Appointment outcome; only meaningful for appointments
    pub attendance: Option<AttendanceStatus>,
    /// Whether a reminder has already been dispatched
    pub reminder_sent: Option<bool>,
}

impl FollowUp {
    /// Create a new pending follow-up.
    pub fn new(kind: FollowUpType, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            scheduled_at,
            completed: false,
            attendance: None,
            reminder_sent: None,
        }
    }

    /// Whether this is an appointment with the given recorded outcome.
    pub fn is_appointment_with(&self, outcome: AttendanceStatus) -> bool {
        self.kind == FollowUpType::Appointment && self.attendance == Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_follow_up_defaults() {
        let follow_up = FollowUp::new(FollowUpType::Call, Utc::now());
        assert_eq!(follow_up.id.len(), 36); // UUID format
        assert!(!follow_up.completed);
        assert!(follow_up.attendance.is_none());
        assert!(follow_up.reminder_sent.is_none());
    }

    #[test]
    fn test_attendance_only_counts_for_appointments() {
        let mut follow_up = FollowUp::new(FollowUpType::Meeting, Utc::now());
        follow_up.attendance = Some(AttendanceStatus::Attended);
        assert!(!follow_up.is_appointment_with(AttendanceStatus::Attended));

        follow_up.kind = FollowUpType::Appointment;
        assert!(follow_up.is_appointment_with(AttendanceStatus::Attended));
        assert!(!follow_up.is_appointment_with(AttendanceStatus::NoShow));
    }

    #[test]
    fn test_serde_field_names() {
        let follow_up = FollowUp::new(FollowUpType::Appointment, Utc::now());
        let json = serde_json::to_value(&follow_up).unwrap();
        assert_eq!(json["type"], "appointment");

        let mut no_show = FollowUp::new(FollowUpType::Appointment, Utc::now());
        no_show.attendance = Some(AttendanceStatus::NoShow);
        let json = serde_json::to_value(&no_show).unwrap();
        assert_eq!(json["attendance"], "no-show");
    }
}
