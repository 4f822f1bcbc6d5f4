use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock hour/minute pair with no date attached.
///
/// All arithmetic happens on a synthetic reference day: adding minutes wraps
/// past midnight without signalling a day change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    /// Parse `HH:MM` (24h).
    pub fn parse(s: &str) -> Option<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .ok()
            .map(TimeOfDay)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight of the reference day.
    pub fn minutes(&self) -> i64 {
        (self.0.hour() * 60 + self.0.minute()) as i64
    }

    /// Build from minutes since midnight, wrapping modulo 24h.
    pub fn from_minutes(mins: i64) -> Self {
        let m = mins.rem_euclid(MINUTES_PER_DAY) as u32;
        // m < 1440, so the components are always in range
        TimeOfDay(NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN))
    }

    pub fn add_minutes(&self, mins: i64) -> Self {
        Self::from_minutes(self.minutes().saturating_add(mins))
    }

    /// Signed minutes from `self` to `other` on the same reference day.
    pub fn minutes_until(&self, other: TimeOfDay) -> i64 {
        other.minutes() - self.minutes()
    }

    /// `hh:MM AM/PM`
    pub fn format_12h(&self) -> String {
        self.0.format("%I:%M %p").to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        TimeOfDay::new(t.hour(), t.minute()).unwrap_or(TimeOfDay(NaiveTime::MIN))
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
