//! Dimension calculators.
//!
//! Each calculator turns one slice of the patient record into integer
//! points, computed in `i32` and clamped to the dimension cap at the end.
//! Negative intermediate sums floor at zero.

use chrono::{DateTime, Utc};

use crate::models::{AttendanceStatus, LeadSource, Patient, Score, Treatment};

/// Interaction history: follow-ups carried out, appointments kept or
/// missed, and notes on file. Capped at 30.
pub(crate) fn engagement_points(patient: &Patient) -> u8 {
    let completed = patient.follow_ups.iter().filter(|f| f.completed).count() as i32;
    let attended = patient
        .follow_ups
        .iter()
        .filter(|f| f.is_appointment_with(AttendanceStatus::Attended))
        .count() as i32;
    let no_shows = patient
        .follow_ups
        .iter()
        .filter(|f| f.is_appointment_with(AttendanceStatus::NoShow))
        .count() as i32;
    let notes = patient.notes.len() as i32;

    let points =
        completed.min(3) * 5 + attended.min(2) * 10 - no_shows.min(2) * 10 + notes.min(5) * 2;

    clamp_dimension(points, Score::ENGAGEMENT_MAX)
}

/// Monetary potential: the priciest treatment the patient asked about,
/// plus a bonus for having paid anything at all. Capped at 25.
pub(crate) fn value_points(patient: &Patient, catalog: &[Treatment]) -> u8 {
    let mut points = interest_band(best_interest_price(patient, catalog));

    if patient.total_paid.map_or(false, |paid| paid > 0.0) {
        points += 10;
    }

    clamp_dimension(points, Score::VALUE_MAX)
}

/// Freshness and momentum: how new the lead is, how recently it was
/// touched, and whether anything is coming up. Capped at 25.
pub(crate) fn timing_points(patient: &Patient, now: DateTime<Utc>) -> u8 {
    let age_days = (now - patient.created_at).num_days();
    let idle_days = (now - patient.last_touch()).num_days();

    let mut points = age_band(age_days) + idle_band(idle_days);

    if patient.has_pending_follow_up_after(now) {
        points += 5;
    }

    clamp_dimension(points, Score::TIMING_MAX)
}

/// Profile completeness and acquisition channel. Capped at 20.
pub(crate) fn fit_points(patient: &Patient) -> u8 {
    let mut points = 0_i32;

    if patient.has_email() {
        points += 3;
    }
    if patient.has_phone() {
        points += 3;
    }
    if patient.has_identification() {
        points += 4;
    }
    if patient.has_instagram() {
        points += 2;
    }
    if !patient.interests.is_empty() {
        points += 3;
    }
    points += source_bonus(patient.source);

    clamp_dimension(points, Score::FIT_MAX)
}

/// Clamp raw rule points into [0, cap].
fn clamp_dimension(points: i32, cap: u8) -> u8 {
    points.clamp(0, cap as i32) as u8
}

/// Highest catalog price among the patient's matched interests.
fn best_interest_price(patient: &Patient, catalog: &[Treatment]) -> Option<f64> {
    patient
        .interests
        .iter()
        .flat_map(|interest| {
            catalog
                .iter()
                .filter(move |treatment| treatment.matches_interest(interest))
        })
        .map(|treatment| treatment.price)
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Price band for the best matched interest. A matched price of zero
/// earns nothing.
fn interest_band(best_price: Option<f64>) -> i32 {
    match best_price {
        Some(p) if p >= 5000.0 => 25,
        Some(p) if p >= 2000.0 => 20,
        Some(p) if p >= 1000.0 => 15,
        Some(p) if p >= 500.0 => 10,
        Some(p) if p > 0.0 => 5,
        _ => 0,
    }
}

/// Freshness points on whole days since creation.
fn age_band(days: i64) -> i32 {
    match days {
        d if d <= 1 => 15,
        d if d <= 3 => 12,
        d if d <= 7 => 8,
        d if d <= 14 => 5,
        _ => 0,
    }
}

/// Momentum points on whole days since the last touch. Checked in order,
/// so 8 to 30 idle days land in the neutral gap; beyond a month the lead
/// goes stale and loses points.
fn idle_band(days: i64) -> i32 {
    match days {
        d if d <= 1 => 10,
        d if d <= 3 => 8,
        d if d <= 7 => 5,
        d if d > 30 => -10,
        _ => 0,
    }
}

/// Acquisition-channel bonus. Referrals convert best.
fn source_bonus(source: LeadSource) -> i32 {
    match source {
        LeadSource::Referral => 5,
        LeadSource::Instagram | LeadSource::Whatsapp => 3,
        LeadSource::Website => 2,
        _ => 0,
    }
}
