//! Domain models for the leadpulse engine.

mod followup;
mod patient;
mod score;
mod treatment;

pub use followup::*;
pub use patient::*;
pub use score::*;
pub use treatment::*;
