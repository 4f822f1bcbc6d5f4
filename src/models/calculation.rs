use serde::Serialize;

use crate::models::break_interval::BreakInterval;
use crate::models::time_of_day::TimeOfDay;

/// Which of the two calculator variants to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Gross/effective totals are known, breaks are their difference.
    Simple {
        gross_minutes: i64,
        effective_minutes: i64,
    },
    /// Breaks are listed explicitly, in insertion order.
    Breaks(Vec<BreakInterval>),
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Simple { .. } => "simple",
            Mode::Breaks(_) => "breaks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationInput {
    pub login: Option<TimeOfDay>,
    pub target_minutes: i64,
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalReport {
    pub id: u32,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub duration_minutes: i64,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub mode: &'static str,
    pub login: TimeOfDay,
    pub target_minutes: i64,
    pub break_minutes: i64,
    /// Span from login to logout.
    pub required_minutes: i64,
    pub worked_minutes: i64,
    pub remaining_minutes: i64,
    pub progress_percent: u8,
    pub logout: TimeOfDay,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub intervals: Vec<IntervalReport>,
}
