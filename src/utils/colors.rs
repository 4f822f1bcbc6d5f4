/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color:
/// 100 → green
/// ≥50 → yellow
/// otherwise → red
pub fn color_for_progress(percent: u8) -> &'static str {
    if percent >= 100 {
        GREEN
    } else if percent >= 50 {
        YELLOW
    } else {
        RED
    }
}

/// Remaining color: nothing left → green, otherwise cyan.
pub fn color_for_remaining(mins: i64) -> &'static str {
    if mins <= 0 { GREEN } else { CYAN }
}

/// Grey out placeholders (`--:--`, empty) in table cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
