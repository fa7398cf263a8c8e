//! Progress computation.
//!
//! Elapsed/remaining time, completion percentage and the month timeline of a
//! fixed-term program, evaluated against an injected clock.

#![warn(missing_docs)]

pub mod calculator;
pub mod clock;
pub mod timeline;

pub use calculator::ProgressCalculator;
pub use clock::{Clock, SystemClock, FixedClock};
pub use timeline::{month_sequence, TimelineSummary};
