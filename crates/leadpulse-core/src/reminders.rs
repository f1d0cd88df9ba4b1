//! Reminder window evaluation.
//!
//! A reminder is due in the half-open window from ten minutes down to
//! five minutes before the scheduled time. The evaluator only selects
//! follow-ups; dispatching the reminder and writing back `reminder_sent`
//! belong to the caller.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::models::{FollowUp, FollowUpType, Patient};

/// Minutes before the scheduled time at which the window opens.
const WINDOW_OPEN_MINUTES: i64 = 10;

/// Minutes before the scheduled time at which the window closes.
const WINDOW_CLOSE_MINUTES: i64 = 5;

/// Whether `now` falls inside the reminder window for `scheduled_at`.
///
/// The window is `[scheduled_at - 10 min, scheduled_at - 5 min)`: closed
/// at the opening edge, open at the closing edge.
pub fn is_due(scheduled_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let opens = scheduled_at - Duration::minutes(WINDOW_OPEN_MINUTES);
    let closes = scheduled_at - Duration::minutes(WINDOW_CLOSE_MINUTES);
    now >= opens && now < closes
}

/// Which follow-up kinds get reminders.
#[derive(Debug, Clone)]
pub struct ReminderPolicy {
    /// Kinds that qualify for a reminder.
    pub allowed_types: HashSet<FollowUpType>,
}

impl Default for ReminderPolicy {
    /// Meetings and appointments only.
    fn default() -> Self {
        Self {
            allowed_types: [FollowUpType::Meeting, FollowUpType::Appointment]
                .into_iter()
                .collect(),
        }
    }
}

impl ReminderPolicy {
    /// Whether this policy sends reminders for the given kind.
    pub fn allows(&self, kind: FollowUpType) -> bool {
        self.allowed_types.contains(&kind)
    }
}

/// A follow-up whose reminder should go out now.
#[derive(Debug, Clone, Copy)]
pub struct DueReminder<'a> {
    /// The patient to remind
    pub patient: &'a Patient,
    /// The follow-up the reminder is for
    pub follow_up: &'a FollowUp,
}

/// Collect every follow-up whose reminder is due at `now`.
///
/// A follow-up qualifies when it is not completed, no reminder has been
/// sent for it, its kind is allowed by the policy, the patient has the
/// contact channel that kind goes out on, and `now` is inside its window.
pub fn collect_due_follow_ups<'p>(
    patients: &'p [Patient],
    policy: &ReminderPolicy,
    now: DateTime<Utc>,
) -> Vec<DueReminder<'p>> {
    let mut due = Vec::new();

    for patient in patients {
        for follow_up in &patient.follow_ups {
            if follow_up.completed || follow_up.reminder_sent == Some(true) {
                continue;
            }
            if !policy.allows(follow_up.kind) || !has_channel_for(patient, follow_up.kind) {
                continue;
            }
            if is_due(follow_up.scheduled_at, now) {
                due.push(DueReminder { patient, follow_up });
            }
        }
    }

    tracing::debug!(due = due.len(), "collected due reminders");
    due
}

/// Whether the patient has the contact channel the kind goes out on.
///
/// Email, meeting and appointment reminders go out by email; call,
/// message and whatsapp reminders need a phone number.
fn has_channel_for(patient: &Patient, kind: FollowUpType) -> bool {
    match kind {
        FollowUpType::Email | FollowUpType::Meeting | FollowUpType::Appointment => {
            patient.has_email()
        }
        FollowUpType::Call | FollowUpType::Message | FollowUpType::Whatsapp => patient.has_phone(),
    }
}
