//! Human-readable rendering of a calculation result.

use crate::config::Config;
use crate::models::calculation::CalculationResult;
use crate::utils::colors::{RESET, color_for_progress, color_for_remaining, colorize_optional};
use crate::utils::formatting::{bold, pad_right, progress_bar, separator};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_clock, format_minutes};

const LABEL_WIDTH: usize = 12;

fn line(label: &str, value: &str) -> String {
    format!("{} {}\n", pad_right(label, LABEL_WIDTH), value)
}

fn breaks_table(result: &CalculationResult) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("Start", 6),
        Column::new("End", 6),
        Column::new("Duration", 9),
    ]);

    for r in &result.intervals {
        let start = r.start.map(|t| t.to_string()).unwrap_or_else(|| "--:--".into());
        let end = r.end.map(|t| t.to_string()).unwrap_or_else(|| "--:--".into());
        let duration = if r.valid {
            format_minutes(r.duration_minutes)
        } else {
            "--:--".to_string()
        };
        table.add_row(vec![
            r.id.to_string(),
            colorize_optional(&start),
            colorize_optional(&end),
            colorize_optional(&duration),
        ]);
    }

    table.render()
}

pub fn render(result: &CalculationResult, cfg: &Config) -> String {
    let sep = separator(&cfg.separator_char, 40);
    let mut out = String::new();

    out.push_str(&line("Login", &format_clock(result.login, cfg.clock_format)));
    out.push_str(&line("Target", &format_minutes(result.target_minutes)));

    if !result.intervals.is_empty() {
        out.push_str(&sep);
        out.push('\n');
        out.push_str(&breaks_table(result));
    }

    out.push_str(&sep);
    out.push('\n');
    out.push_str(&line("Break Time", &format_minutes(result.break_minutes)));
    out.push_str(&line("Worked", &format_minutes(result.worked_minutes)));
    out.push_str(&line(
        "Remaining",
        &format!(
            "{}{}{}",
            color_for_remaining(result.remaining_minutes),
            format_minutes(result.remaining_minutes),
            RESET
        ),
    ));
    out.push_str(&line(
        "Progress",
        &format!(
            "{}{}{}",
            color_for_progress(result.progress_percent),
            progress_bar(result.progress_percent, 20),
            RESET
        ),
    ));
    out.push_str(&line(
        "Logout Time",
        &bold(&format_clock(result.logout, cfg.clock_format)),
    ));

    out
}
