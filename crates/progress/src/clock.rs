//! Sources of the evaluation date.

use tenure_core::Date;

/// Supplies "today" to the calculator.
pub trait Clock {
    /// Current calendar date.
    fn today(&self) -> Date;
}

/// Local wall clock, truncated to the date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        chrono::Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = Date::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        let epoch = Date::from_ymd_opt(1970, 1, 1).unwrap();
        assert!(SystemClock.today() > epoch);
    }
}
