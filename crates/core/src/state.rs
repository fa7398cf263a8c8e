//! Progress state - values derived from a schedule at one evaluation date.

use serde::{Deserialize, Serialize};
use crate::Date;

/// Where the evaluation date falls relative to the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressPhase {
    /// Before the start date
    NotStarted,
    /// Between start and end date, both inclusive
    InProgress,
    /// After the end date
    Finished,
}

impl ProgressPhase {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressPhase::NotStarted => "not started",
            ProgressPhase::InProgress => "in progress",
            ProgressPhase::Finished => "finished",
        }
    }
}

/// Progress of a program as seen from `now`.
///
/// Never stored: a fresh value is computed for every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Program start
    pub start_date: Date,

    /// Program end
    pub end_date: Date,

    /// Nominal length in months
    pub duration_months: u32,

    /// Evaluation date
    pub now: Date,

    /// Which side of the schedule `now` falls on
    pub phase: ProgressPhase,

    /// Days elapsed since the start
    pub elapsed_days: u32,

    /// Days left until the end
    pub remaining_days: u32,

    /// `ceil(remaining_days / 30)`
    pub remaining_months: u32,

    /// Percentage complete (0-100)
    pub percent_complete: f64,
}

impl ProgressState {
    /// Percentage still pending, the complement of `percent_complete`.
    pub fn percent_pending(&self) -> f64 {
        100.0 - self.percent_complete
    }
}
