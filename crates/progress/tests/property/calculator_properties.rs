use chrono::Datelike;
use proptest::prelude::*;
use tenure_core::{Date, ProgramSchedule, ProgressPhase};
use tenure_progress::ProgressCalculator;

fn date_from_days(days: i32) -> Date {
    Date::from_num_days_from_ce_opt(days).unwrap()
}

fn min_days() -> i32 {
    Date::MIN.num_days_from_ce()
}

fn max_days() -> i32 {
    Date::MAX.num_days_from_ce()
}

fn start_days() -> i32 {
    ProgramSchedule::fixed().start_date().num_days_from_ce()
}

fn end_days() -> i32 {
    ProgramSchedule::fixed().end_date().num_days_from_ce()
}

fn any_date() -> impl Strategy<Value = Date> {
    (min_days()..=max_days()).prop_map(date_from_days)
}

proptest! {
    #[test]
    fn before_start_is_zero(now in (min_days()..start_days()).prop_map(date_from_days)) {
        let state = ProgressCalculator::default().evaluate(now);
        prop_assert_eq!(state.phase, ProgressPhase::NotStarted);
        prop_assert_eq!(state.elapsed_days, 0);
        prop_assert_eq!(state.percent_complete, 0.0);
    }

    #[test]
    fn after_end_is_complete(now in (end_days() + 1..=max_days()).prop_map(date_from_days)) {
        let state = ProgressCalculator::default().evaluate(now);
        prop_assert_eq!(state.phase, ProgressPhase::Finished);
        prop_assert_eq!(state.elapsed_days, 720);
        prop_assert_eq!(state.percent_complete, 100.0);
        prop_assert_eq!(state.remaining_days, 0);
        prop_assert_eq!(state.remaining_months, 0);
    }

    #[test]
    fn percent_is_bounded(now in any_date()) {
        let state = ProgressCalculator::default().evaluate(now);
        prop_assert!(
            (0.0..=100.0).contains(&state.percent_complete),
            "percent {} out of range at {}",
            state.percent_complete, now
        );
    }

    #[test]
    fn percent_never_decreases(a in any_date(), b in any_date()) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let calculator = ProgressCalculator::default();
        let first = calculator.evaluate(earlier).percent_complete;
        let second = calculator.evaluate(later).percent_complete;
        prop_assert!(first <= second, "{} at {} > {} at {}", first, earlier, second, later);
    }

    #[test]
    fn remaining_months_is_ceiling(now in any_date()) {
        let state = ProgressCalculator::default().evaluate(now);
        let expected = (u64::from(state.remaining_days) + 29) / 30;
        prop_assert_eq!(u64::from(state.remaining_months), expected);
    }

    #[test]
    fn in_range_elapsed_is_calendar_distance(now in (start_days()..=end_days()).prop_map(date_from_days)) {
        let state = ProgressCalculator::default().evaluate(now);
        prop_assert_eq!(state.phase, ProgressPhase::InProgress);
        prop_assert_eq!(i64::from(state.elapsed_days), i64::from(now.num_days_from_ce() - start_days()));
        prop_assert_eq!(
            i64::from(state.remaining_days),
            i64::from(end_days() - now.num_days_from_ce())
        );
    }
}
