//! rworkhours main entrypoint.

use rworkhours::errors::AppError;
use rworkhours::run;
use rworkhours::ui::messages;

fn main() {
    if let Err(e) = run() {
        match &e {
            AppError::Calculation(errors) => messages::calculation_errors(&errors.0),
            other => messages::error(format!("Error: {}", other)),
        }
        std::process::exit(1);
    }
}
