//! Month-by-month timeline of a program.

use chrono::{Datelike, Months};
use tenure_core::{Date, MonthEntry, MonthStatus, ProgramSchedule};
use tracing::debug;

/// Every first-of-month date between the start and end of `schedule`,
/// tagged as completed when it is on or before `now`.
///
/// A start date that is not the 1st begins the sequence at the following
/// month. Every entry carries the same weight, `100 / duration_months`.
pub fn month_sequence(schedule: &ProgramSchedule, now: Date) -> Vec<MonthEntry> {
    let weight = schedule.month_weight();
    let mut entries = Vec::new();

    let mut cursor = first_month_start(schedule.start_date());
    while let Some(month) = cursor {
        if month > schedule.end_date() {
            break;
        }
        let status = if month <= now {
            MonthStatus::Completed
        } else {
            MonthStatus::Pending
        };
        entries.push(MonthEntry::new(month, weight, status));
        cursor = month.checked_add_months(Months::new(1));
    }

    debug!(months = entries.len(), %now, "Built month timeline");
    entries
}

fn first_month_start(date: Date) -> Option<Date> {
    let month_start = date.with_day(1)?;
    if month_start == date {
        Some(date)
    } else {
        month_start.checked_add_months(Months::new(1))
    }
}

/// Completed/pending counts over a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimelineSummary {
    /// Months on or before the evaluation date
    pub completed: usize,
    /// Months after the evaluation date
    pub pending: usize,
}

impl TimelineSummary {
    /// Count the entries of `months` by status.
    pub fn from_months(months: &[MonthEntry]) -> Self {
        let completed = months.iter().filter(|m| m.is_completed()).count();
        Self {
            completed,
            pending: months.len() - completed,
        }
    }

    /// Total number of months.
    pub fn total(&self) -> usize {
        self.completed + self.pending
    }
}
