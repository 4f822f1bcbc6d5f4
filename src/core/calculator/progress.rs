use crate::core::calculator::intervals::minutes_within;
use crate::models::break_interval::BreakInterval;
use crate::models::time_of_day::TimeOfDay;

/// Worked share of the target, clamped to 0..=100. A zero target counts as done.
pub fn progress_percent(worked: i64, target: i64) -> u8 {
    if target <= 0 {
        return 100;
    }
    (worked.max(0) as i128 * 100 / target as i128).clamp(0, 100) as u8
}

/// Minutes worked between `login` and `now`, minus the breaks already taken.
///
/// `now` is read on the same reference day as `login`: a `now` before the
/// login means nothing has been worked yet.
pub fn worked_so_far(login: TimeOfDay, now: TimeOfDay, breaks: &[BreakInterval]) -> i64 {
    let elapsed = login.minutes_until(now).max(0);
    let taken = minutes_within(breaks, login, now);
    (elapsed - taken).max(0)
}
