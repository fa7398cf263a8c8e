//! Progress calculator.
//!
//! Maps a schedule and an evaluation date to elapsed days, remaining days,
//! remaining months and percent complete:
//! - before the start date nothing has elapsed and progress is 0%
//! - after the end date elapsed is the nominal span and progress is 100%
//! - otherwise elapsed is the whole-day distance from the start, and progress
//!   is elapsed over the nominal span, capped at 100%
//!
//! Remaining days are measured from the evaluation date to the end date in
//! every case and never go below zero.

use tenure_core::{Date, ProgramSchedule, ProgressPhase, ProgressState, DAYS_PER_MONTH};
use tracing::debug;

use crate::clock::Clock;

/// Stateless progress calculator for one schedule.
#[derive(Debug, Clone, Copy)]
pub struct ProgressCalculator {
    schedule: ProgramSchedule,
}

impl ProgressCalculator {
    /// Create a calculator for `schedule`.
    pub fn new(schedule: ProgramSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule being evaluated.
    pub fn schedule(&self) -> &ProgramSchedule {
        &self.schedule
    }

    /// Evaluate progress as of `now`.
    pub fn evaluate(&self, now: Date) -> ProgressState {
        let schedule = &self.schedule;

        let (phase, elapsed_days, percent_complete) = if now < schedule.start_date() {
            (ProgressPhase::NotStarted, 0, 0.0)
        } else if now > schedule.end_date() {
            (ProgressPhase::Finished, schedule.nominal_days(), 100.0)
        } else {
            let elapsed = whole_days(schedule.start_date(), now);
            let percent = f64::from(elapsed) / f64::from(schedule.nominal_days()) * 100.0;
            (ProgressPhase::InProgress, elapsed, percent.min(100.0))
        };

        let remaining_days = whole_days(now, schedule.end_date());
        let remaining_months = remaining_days.div_ceil(DAYS_PER_MONTH);

        debug!(
            %now,
            phase = phase.as_str(),
            elapsed_days,
            remaining_days,
            percent_complete,
            "Evaluated progress"
        );

        ProgressState {
            start_date: schedule.start_date(),
            end_date: schedule.end_date(),
            duration_months: schedule.duration_months(),
            now,
            phase,
            elapsed_days,
            remaining_days,
            remaining_months,
            percent_complete,
        }
    }

    /// Evaluate progress at the date reported by `clock`, read once.
    pub fn evaluate_with<C: Clock + ?Sized>(&self, clock: &C) -> ProgressState {
        self.evaluate(clock.today())
    }
}

impl Default for ProgressCalculator {
    fn default() -> Self {
        Self::new(ProgramSchedule::fixed())
    }
}

/// Whole days from `from` to `to`, zero when `to` is earlier.
fn whole_days(from: Date, to: Date) -> u32 {
    let days = to.signed_duration_since(from).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}
