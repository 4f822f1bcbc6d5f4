use clap::{Parser, Subcommand};

/// Command-line interface definition for rworkhours
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Work-hours calculator: break time, remaining work and logout time",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config_path: Option<String>,

    /// Print results as JSON
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Gross/effective mode: breaks are gross minus effective time
    Simple {
        /// Login time (HH:MM)
        #[arg(long)]
        login: Option<String>,

        /// Total work time to reach (e.g. 8h1m, 8:01); defaults to the configured target
        #[arg(long)]
        total: Option<String>,

        /// Gross time so far, breaks included (e.g. 9h, 9:00)
        #[arg(long, default_value = "0")]
        gross: String,

        /// Effective time so far, breaks excluded (e.g. 8h)
        #[arg(long, default_value = "0")]
        effective: String,
    },

    /// Break-list mode: list each break explicitly
    ///
    /// Examples:
    ///   rworkhours breaks --login 09:00 --break 12:00-12:30
    ///   rworkhours breaks --login 08:45 --target 7h30m --break 10:30-10:45 --break 13:00-
    Breaks {
        /// Login time (HH:MM)
        #[arg(long)]
        login: Option<String>,

        /// Target work time (e.g. 8h, 7h30m); defaults to the configured target
        #[arg(long)]
        target: Option<String>,

        /// Break interval START-END (repeatable); START- or -END for an open break
        #[arg(long = "break", value_name = "START-END")]
        breaks: Vec<String>,

        /// Current time (HH:MM) for the worked/remaining figures; defaults to the system clock
        #[arg(long)]
        now: Option<String>,
    },

    /// Extract login and breaks from a text file (e.g. OCR output) and calculate
    Scan {
        /// Text file to scan
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Target work time; defaults to the configured target
        #[arg(long)]
        target: Option<String>,

        /// Current time (HH:MM); defaults to the system clock
        #[arg(long)]
        now: Option<String>,
    },
}
