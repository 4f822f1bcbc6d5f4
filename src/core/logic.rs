use tracing::debug;

use crate::core::calculator::projection::{project_breaks, project_simple};
use crate::errors::CalculationError;
use crate::models::calculation::{CalculationInput, CalculationResult, Mode};
use crate::models::time_of_day::TimeOfDay;

pub struct Core;

impl Core {
    /// Run the calculator for either mode.
    ///
    /// `now` only feeds the live worked/remaining figures of the break-list
    /// mode; the same input and `now` always give the same result.
    pub fn calculate(
        input: &CalculationInput,
        now: TimeOfDay,
    ) -> Result<CalculationResult, Vec<CalculationError>> {
        let Some(login) = input.login else {
            return Err(vec![CalculationError::MissingLoginTime]);
        };

        let target = input.target_minutes.max(0);
        debug!(mode = input.mode.label(), %login, target, "calculate");

        match &input.mode {
            Mode::Simple {
                gross_minutes,
                effective_minutes,
            } => project_simple(login, target, *gross_minutes, *effective_minutes),
            Mode::Breaks(breaks) => project_breaks(login, target, breaks, now),
        }
    }
}
