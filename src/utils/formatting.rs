//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - w))
}

/// `[██████░░░░] 60%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let p = percent.min(100) as usize;
    let filled = p * width / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        p
    )
}

/// Repeat the configured separator to `width` columns.
pub fn separator(ch: &str, width: usize) -> String {
    let unit = if ch.is_empty() { "-" } else { ch };
    let w = UnicodeWidthStr::width(unit).max(1);
    unit.repeat(width / w)
}
