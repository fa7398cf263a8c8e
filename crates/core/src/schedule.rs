//! Program schedule - the fixed start, end and nominal length of a program.

use serde::Serialize;
use crate::Date;

/// Days counted per month. Calendar month lengths are not used anywhere.
pub const DAYS_PER_MONTH: u32 = 30;

const FIXED_START: (i32, u32, u32) = (2024, 8, 1);
const FIXED_END: (i32, u32, u32) = (2026, 7, 31);
const FIXED_DURATION_MONTHS: u32 = 24;

/// Errors raised when building a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// End date precedes the start date
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Program start
        start: Date,
        /// Program end
        end: Date,
    },

    /// Duration of zero months
    #[error("duration must be at least one month")]
    ZeroDuration,
}

/// The schedule of a fixed-term program.
///
/// Only built through [`ProgramSchedule::new`] or [`ProgramSchedule::fixed`],
/// so `end_date >= start_date` and `duration_months > 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramSchedule {
    start_date: Date,
    end_date: Date,
    duration_months: u32,
}

impl ProgramSchedule {
    /// Create a schedule, checking that it describes a non-empty span.
    pub fn new(start_date: Date, end_date: Date, duration_months: u32) -> Result<Self, ScheduleError> {
        if end_date < start_date {
            return Err(ScheduleError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        if duration_months == 0 {
            return Err(ScheduleError::ZeroDuration);
        }

        Ok(Self {
            start_date,
            end_date,
            duration_months,
        })
    }

    /// The program tracked by this tool: August 2024 through July 2026.
    pub fn fixed() -> Self {
        let (sy, sm, sd) = FIXED_START;
        let (ey, em, ed) = FIXED_END;
        let start = Date::from_ymd_opt(sy, sm, sd).expect("fixed start date is a valid calendar date");
        let end = Date::from_ymd_opt(ey, em, ed).expect("fixed end date is a valid calendar date");

        Self {
            start_date: start,
            end_date: end,
            duration_months: FIXED_DURATION_MONTHS,
        }
    }

    /// First day of the program.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day of the program.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Nominal length in months.
    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    /// Nominal span in days (`duration_months * 30`).
    pub fn nominal_days(&self) -> u32 {
        self.duration_months.saturating_mul(DAYS_PER_MONTH)
    }

    /// Weight of a single month in a chart summing to 100.
    pub fn month_weight(&self) -> f64 {
        100.0 / f64::from(self.duration_months)
    }
}

impl Default for ProgramSchedule {
    fn default() -> Self {
        Self::fixed()
    }
}
