//! Logout projection for the two calculator modes.

use tracing::debug;

use crate::core::calculator::intervals::{interval_duration, validate_all};
use crate::core::calculator::progress::{progress_percent, worked_so_far};
use crate::errors::CalculationError;
use crate::models::break_interval::BreakInterval;
use crate::models::calculation::{CalculationResult, IntervalReport};
use crate::models::time_of_day::TimeOfDay;

/// Gross/effective mode: breaks are `gross - effective`, logout is
/// `login + gross + remaining`.
pub fn project_simple(
    login: TimeOfDay,
    target: i64,
    gross: i64,
    effective: i64,
) -> Result<CalculationResult, Vec<CalculationError>> {
    if effective > gross {
        return Err(vec![CalculationError::EffectiveExceedsGross]);
    }

    let break_minutes = gross.saturating_sub(effective);
    let remaining = target.saturating_sub(effective).max(0);
    let required = gross.saturating_add(remaining);

    debug!(gross, effective, break_minutes, remaining, "simple projection");

    Ok(CalculationResult {
        mode: "simple",
        login,
        target_minutes: target,
        break_minutes,
        required_minutes: required,
        worked_minutes: effective,
        remaining_minutes: remaining,
        progress_percent: progress_percent(effective, target),
        logout: login.add_minutes(required),
        intervals: Vec::new(),
    })
}

/// Break-list mode: every interval must validate before anything is
/// projected; logout is `login + target + Σ breaks`.
pub fn project_breaks(
    login: TimeOfDay,
    target: i64,
    breaks: &[BreakInterval],
    now: TimeOfDay,
) -> Result<CalculationResult, Vec<CalculationError>> {
    let errors = validate_all(breaks);
    if !errors.is_empty() {
        debug!(count = errors.len(), "break validation failed");
        return Err(errors);
    }

    let intervals: Vec<IntervalReport> = breaks
        .iter()
        .map(|b| IntervalReport {
            id: b.id,
            start: b.start,
            end: b.end,
            duration_minutes: interval_duration(b.start, b.end),
            valid: b.is_complete(),
        })
        .collect();

    let break_minutes: i64 = intervals
        .iter()
        .filter(|r| r.valid)
        .map(|r| r.duration_minutes)
        .sum();
    let required = target.saturating_add(break_minutes);

    let worked = worked_so_far(login, now, breaks);
    let remaining = target.saturating_sub(worked).max(0);

    debug!(break_minutes, required, worked, %now, "breaks projection");

    Ok(CalculationResult {
        mode: "breaks",
        login,
        target_minutes: target,
        break_minutes,
        required_minutes: required,
        worked_minutes: worked,
        remaining_minutes: remaining,
        progress_percent: progress_percent(worked, target),
        logout: login.add_minutes(required),
        intervals,
    })
}
