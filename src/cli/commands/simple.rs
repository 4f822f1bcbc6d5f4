use tracing::debug;

use crate::cli::commands::output::{calculate_and_print, target_minutes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::errors::AppResult;
use crate::models::calculation::{CalculationInput, Mode};
use crate::utils::time::{parse_duration, parse_optional_time};

/// Gross/effective calculation.
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Simple {
        login,
        total,
        gross,
        effective,
    } = cmd
    {
        let login = parse_optional_time(login.as_ref())?;
        let target = target_minutes(total.as_ref(), cfg)?;
        let gross_minutes = parse_duration(gross, cfg.input_policy)?;
        let effective_minutes = parse_duration(effective, cfg.input_policy)?;

        debug!(?login, target, gross_minutes, effective_minutes, "simple input");

        let input = CalculationInput {
            login,
            target_minutes: target,
            mode: Mode::Simple {
                gross_minutes,
                effective_minutes,
            },
        };

        // simple mode never reads the clock
        calculate_and_print(&input, &SystemClock, cfg, json)?;
    }

    Ok(())
}
