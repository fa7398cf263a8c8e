//! Tenure core data models.
//!
//! This crate defines the schedule of a fixed-term program and the values
//! derived from it when progress is evaluated at a given date.

#![warn(missing_docs)]

// Fixed program schedule
mod schedule;

// Derived values
mod state;
mod month;

pub use schedule::{ProgramSchedule, ScheduleError, DAYS_PER_MONTH};
pub use state::{ProgressState, ProgressPhase};
pub use month::{MonthEntry, MonthStatus};

/// Calendar date type. Times of day and timezones are not tracked.
pub type Date = chrono::NaiveDate;
