//! Shared helpers for the calculating subcommands.

use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::calculation::CalculationInput;
use crate::models::time_of_day::TimeOfDay;
use crate::ui::{messages, report};
use crate::utils::time::parse_duration;

/// `--now` when given, the system clock otherwise.
pub fn clock_for(now: Option<&String>) -> AppResult<Box<dyn Clock>> {
    match now {
        Some(s) => Ok(Box::new(FixedClock(s.parse::<TimeOfDay>()?))),
        None => Ok(Box::new(SystemClock)),
    }
}

/// Explicit target duration, or the configured one.
pub fn target_minutes(target: Option<&String>, cfg: &Config) -> AppResult<i64> {
    let raw = target.unwrap_or(&cfg.target_work_duration);
    parse_duration(raw, cfg.input_policy)
}

/// Run the calculator and print the result.
pub fn calculate_and_print(
    input: &CalculationInput,
    clock: &dyn Clock,
    cfg: &Config,
    json: bool,
) -> AppResult<()> {
    let result = Core::calculate(input, clock.now()).map_err(AppError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        messages::header(format!("Work Summary ({})", result.mode));
        print!("{}", report::render(&result, cfg));
    }

    Ok(())
}
