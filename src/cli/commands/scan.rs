use std::fs;

use crate::cli::commands::output::{calculate_and_print, clock_for, target_minutes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract::{TextExtractor, TimeExtractor};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Extract login/breaks from a file and run the break-list calculation.
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Scan { file, target, now } = cmd {
        let path = expand_tilde(file);
        let bytes = fs::read(&path)
            .map_err(|e| AppError::Extract(format!("{}: {}", path.display(), e)))?;

        let extractor = TextExtractor::new()?;
        let extraction = extractor.extract(&bytes)?;

        if extraction.is_empty() {
            return Err(AppError::Extract(format!(
                "no times found in {}",
                path.display()
            )));
        }

        if !json {
            messages::info(format!(
                "Found login {} and {} break(s) in {}",
                extraction
                    .login
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "--:--".into()),
                extraction.breaks.len(),
                path.display()
            ));
        }

        let input = extraction.into_input(target_minutes(target.as_ref(), cfg)?);
        let clock = clock_for(now.as_ref())?;

        calculate_and_print(&input, clock.as_ref(), cfg, json)?;
    }

    Ok(())
}
