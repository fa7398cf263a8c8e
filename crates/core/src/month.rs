//! Month entries of the program timeline.

use serde::{Deserialize, Serialize};
use crate::Date;

/// Label format for months, e.g. `Aug 2024`.
const LABEL_FORMAT: &str = "%b %Y";

/// Status of a month relative to the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthStatus {
    /// The month has begun on or before the evaluation date
    Completed,
    /// The month starts after the evaluation date
    Pending,
}

impl MonthStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonthStatus::Completed => "Completed",
            MonthStatus::Pending => "Pending",
        }
    }
}

/// One month of the timeline chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// First day of the month
    pub month: Date,

    /// Display label
    pub label: String,

    /// Share of the whole program, in percent
    pub weight: f64,

    /// Completed or pending
    pub status: MonthStatus,
}

impl MonthEntry {
    /// Create an entry for the month starting at `month`.
    pub fn new(month: Date, weight: f64, status: MonthStatus) -> Self {
        Self {
            month,
            label: month.format(LABEL_FORMAT).to_string(),
            weight,
            status,
        }
    }

    /// Whether the month counts as completed.
    pub fn is_completed(&self) -> bool {
        self.status == MonthStatus::Completed
    }
}
