//! rworkhours library root.
//! Exposes the calculator core, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

/// Log filter variable, e.g. `RWORKHOURS_LOG=debug`
pub const LOG_ENV: &str = "RWORKHOURS_LOG";

/// Diagnostics go to stderr so they never mix with results or JSON.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // a second init (e.g. from tests) is harmless
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Simple { .. } => cli::commands::simple::handle(&cli.command, cfg, cli.json),
        Commands::Breaks { .. } => cli::commands::breaks::handle(&cli.command, cfg, cli.json),
        Commands::Scan { .. } => cli::commands::scan::handle(&cli.command, cfg, cli.json),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve and load the configuration once
    let config_path: PathBuf = match &cli.config_path {
        Some(custom) => utils::path::expand_tilde(custom),
        None => Config::config_file(),
    };
    let cfg = match Config::load(&config_path) {
        Ok(cfg) => cfg,
        // `init --force` must be able to replace a broken file
        Err(e) if matches!(cli.command, Commands::Init { .. }) => {
            tracing::warn!(error = %e, "ignoring unreadable configuration");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    tracing::debug!(path = %config_path.display(), "configuration resolved");

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
