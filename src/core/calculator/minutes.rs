//! Hour/minute component handling shared by both calculator modes.

/// `hour*60 + minute`, with hour clamped to ≥ 0 and minute to 0..=59.
///
/// Out-of-range values never fail here; callers that want to reject them
/// check with [`in_range`] first. Huge hour counts saturate at `i64::MAX`.
pub fn to_minutes(hour: i64, minute: i64) -> i64 {
    hour.max(0)
        .saturating_mul(60)
        .saturating_add(minute.clamp(0, 59))
}

/// Like [`to_minutes`] but `None` when the components are out of range or
/// the result does not fit.
pub fn checked_to_minutes(hour: i64, minute: i64) -> Option<i64> {
    if !in_range(hour, minute) {
        return None;
    }
    hour.checked_mul(60)?.checked_add(minute)
}

/// True when the components need no clamping.
pub fn in_range(hour: i64, minute: i64) -> bool {
    hour >= 0 && (0..=59).contains(&minute)
}

/// Leading integer of a form field, 0 when there is none.
///
/// `"12x"` → 12, `"-3"` → -3, `"abc"` → 0, `""` → 0.
pub fn coerce_component(text: &str) -> i64 {
    parse_leading_int(text).unwrap_or(0)
}

/// Leading integer of `text`, `None` when it does not start with one.
/// Digit runs too long for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (neg, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // only digits remain, so the parse can fail on overflow alone
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if neg { -value } else { value })
}
