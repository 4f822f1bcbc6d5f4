use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if Config::init_at(path, *force)? {
            messages::success(format!("Config file: {}", path.display()));
        } else {
            messages::warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }

    Ok(())
}
