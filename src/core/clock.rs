//! Source of "now" for the live worked/remaining figures.

use chrono::Local;

use crate::models::time_of_day::TimeOfDay;

pub trait Clock {
    fn now(&self) -> TimeOfDay;
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        Local::now().time().into()
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub TimeOfDay);

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}
