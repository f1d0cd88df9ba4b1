//! Leadpulse Core Library
//!
//! Patient engagement scoring and reminder engine for clinic CRMs.
//!
//! # Architecture
//!
//! ```text
//! CRM Snapshot (patients + treatment catalog)
//!                    │
//!                    ▼
//!             ScoringEngine
//!    engagement │ value │ timing │ fit
//!                    │
//!              Score + Tier
//!                    │
//!        ┌───────────┼───────────┐
//!        ▼           ▼           ▼
//!    priority    reminders    report
//!    (ranking,   (due          (JSON/CSV
//!     slices,     follow-ups)   export)
//!     tallies)
//! ```
//!
//! # Core Principle
//!
//! **Evaluation is pure.** The caller supplies the snapshot and the clock
//! instant; the engine performs no I/O, never reads the system time, and
//! never mutates a record. Scoring the same snapshot at the same instant
//! always yields the same result.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, FollowUp, Treatment, Score, etc.)
//! - [`scoring`]: Four-dimension scoring engine
//! - [`priority`]: Ranking and priority slices over scored patients
//! - [`reminders`]: Reminder window evaluation
//! - [`snapshot`]: CRM snapshot container with the JSON seam
//! - [`report`]: Ranked engagement report export

pub mod models;
pub mod priority;
pub mod reminders;
pub mod report;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use models::{
    AttendanceStatus, FollowUp, FollowUpType, LeadSource, LeadStatus, Note, Patient, Score,
    ScoredPatient, Tier, Treatment,
};
pub use reminders::{DueReminder, ReminderPolicy};
pub use report::EngagementReport;
pub use scoring::ScoringEngine;
pub use snapshot::{Snapshot, SnapshotError};
