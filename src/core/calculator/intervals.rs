//! Break interval arithmetic and validation.

use crate::errors::CalculationError;
use crate::models::break_interval::BreakInterval;
use crate::models::time_of_day::TimeOfDay;

/// Length of a break in minutes; 0 when an endpoint is missing or the end is
/// not after the start. Never fails: ordering problems are reported by
/// [`validate_interval`].
pub fn interval_duration(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> i64 {
    match (start, end) {
        (Some(s), Some(e)) => s.minutes_until(e).max(0),
        _ => 0,
    }
}

/// Half-open overlap test: `[a_start, a_end)` vs `[b_start, b_end)`.
pub fn overlaps(a: (TimeOfDay, TimeOfDay), b: (TimeOfDay, TimeOfDay)) -> bool {
    a.0 < b.1 && a.1 > b.0
}

/// Validate the interval at `index` of `all`.
///
/// Partial intervals are accepted as not yet checkable. The order check runs
/// first, so a reversed interval reports `Order` even if it also overlaps.
pub fn validate_interval(
    interval: &BreakInterval,
    all: &[BreakInterval],
    index: usize,
) -> Result<(), CalculationError> {
    let Some((start, end)) = interval.bounds() else {
        return Ok(());
    };

    if end <= start {
        return Err(CalculationError::Order(interval.id));
    }

    let clash = all
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .filter_map(|(_, other)| other.bounds())
        .any(|other| overlaps((start, end), other));

    if clash {
        return Err(CalculationError::Overlap(interval.id));
    }

    Ok(())
}

/// Validate every interval, collecting one error per failing interval.
pub fn validate_all(all: &[BreakInterval]) -> Vec<CalculationError> {
    all.iter()
        .enumerate()
        .filter_map(|(i, b)| validate_interval(b, all, i).err())
        .collect()
}

/// Minutes of the (valid) breaks that fall inside `[from, to)`.
pub fn minutes_within(all: &[BreakInterval], from: TimeOfDay, to: TimeOfDay) -> i64 {
    if to <= from {
        return 0;
    }

    all.iter()
        .filter_map(|b| b.bounds())
        .filter(|(s, e)| e > s)
        .map(|(s, e)| {
            let lo = s.max(from);
            let hi = e.min(to);
            lo.minutes_until(hi).max(0)
        })
        .sum()
}
