use tracing::debug;

use crate::cli::commands::output::{calculate_and_print, clock_for, target_minutes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::break_list::BreakList;
use crate::models::calculation::{CalculationInput, Mode};
use crate::utils::time::{parse_break, parse_optional_time};

/// Fill a fresh break list from `START-END` arguments, in order.
pub fn build_break_list(args: &[String]) -> AppResult<BreakList> {
    let pairs = args
        .iter()
        .map(|raw| parse_break(raw))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(BreakList::from_pairs(pairs))
}

/// Break-list calculation.
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Breaks {
        login,
        target,
        breaks,
        now,
    } = cmd
    {
        let login = parse_optional_time(login.as_ref())?;
        let target = target_minutes(target.as_ref(), cfg)?;
        let list = build_break_list(breaks)?;
        let clock = clock_for(now.as_ref())?;

        debug!(?login, target, breaks = list.len(), "breaks input");

        let input = CalculationInput {
            login,
            target_minutes: target,
            mode: Mode::Breaks(list.to_vec()),
        };

        calculate_and_print(&input, clock.as_ref(), cfg, json)?;
    }

    Ok(())
}
