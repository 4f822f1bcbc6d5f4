//! Time utilities: parsing HH:MM, durations and break ranges, formatting minutes.

use crate::config::{ClockFormat, InputPolicy};
use crate::core::calculator::minutes::{checked_to_minutes, coerce_component, to_minutes};
use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;

pub fn parse_time(t: &str) -> Option<TimeOfDay> {
    TimeOfDay::parse(t)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<TimeOfDay>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Split a duration string into its hour and minute fields.
///
/// `8:01`, `8h1m`, `8h`, `45m`, `8` (hours).
fn split_duration(s: &str) -> (&str, &str) {
    let t = s.trim();
    if let Some((h, m)) = t.split_once(':') {
        return (h, m);
    }
    if let Some(idx) = t.find(['h', 'H']) {
        let rest = &t[idx + 1..];
        return (&t[..idx], rest.trim_end_matches(['m', 'M']));
    }
    if let Some(m) = t.strip_suffix(['m', 'M']) {
        return ("0", m);
    }
    (t, "0")
}

fn strict_component(field: &str, whole: &str) -> AppResult<i64> {
    let f = field.trim();
    if f.is_empty() {
        return Ok(0);
    }
    f.parse::<i64>()
        .map_err(|_| AppError::InvalidDuration(whole.to_string()))
}

/// Parse a duration into minutes following the configured input policy.
pub fn parse_duration(s: &str, policy: InputPolicy) -> AppResult<i64> {
    let (h, m) = split_duration(s);

    match policy {
        InputPolicy::Clamp => Ok(to_minutes(coerce_component(h), coerce_component(m))),
        InputPolicy::Reject => {
            let hour = strict_component(h, s)?;
            let minute = strict_component(m, s)?;
            checked_to_minutes(hour, minute).ok_or_else(|| {
                AppError::InvalidDuration(format!("{} (hours must be ≥ 0, minutes 0-59)", s))
            })
        }
    }
}

/// Parse `START-END`, `START-` or `-END`.
pub fn parse_break(s: &str) -> AppResult<(Option<TimeOfDay>, Option<TimeOfDay>)> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidBreak(s.to_string()))?;

    let endpoint = |part: &str| -> AppResult<Option<TimeOfDay>> {
        let p = part.trim();
        if p.is_empty() {
            return Ok(None);
        }
        parse_time(p)
            .map(Some)
            .ok_or_else(|| AppError::InvalidBreak(s.to_string()))
    };

    let start = endpoint(a)?;
    let end = endpoint(b)?;
    if start.is_none() && end.is_none() {
        return Err(AppError::InvalidBreak(s.to_string()));
    }
    Ok((start, end))
}

/// `8h 1m` style, as shown in the result panel.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}h {}m", sign, m / 60, m % 60)
}

pub fn format_clock(t: TimeOfDay, fmt: ClockFormat) -> String {
    match fmt {
        ClockFormat::H24 => t.to_string(),
        ClockFormat::H12 => t.format_12h(),
    }
}
