// SPDX-License-Identifier: GPL-3.0-only

use camera_prefs::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-prefs")]
#[command(about = "Inspect and edit camera preferences")]
#[command(version)]
struct Cli {
    /// Preferences file (default: $CAMERA_PREFS_FILE or ~/.config/camera-prefs/preferences.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every setting
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one setting
    Get {
        /// Setting key (e.g. photo_flash_mode)
        key: String,
    },

    /// Change one setting
    Set {
        /// Setting key (e.g. photo_flash_mode)
        key: String,

        /// New value (e.g. auto, on, off)
        value: String,

        /// Write to disk before returning
        #[arg(short, long)]
        commit: bool,
    },

    /// Step photo_flash_mode or last_grid_mode to its next value
    Cycle {
        /// Setting key (photo_flash_mode or last_grid_mode)
        key: String,

        /// Write to disk before returning
        #[arg(short, long)]
        commit: bool,
    },

    /// Forget every setting so defaults apply again
    Reset {
        /// Write to disk before returning
        #[arg(short, long)]
        commit: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_prefs=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let mut config = Config::from_env();
    if let Some(file) = args.file {
        config.preferences_path = file;
    }

    let prefs = config.open()?;

    let result = match args.command {
        Commands::List { json } => cli::list(&prefs, json),
        Commands::Get { key } => cli::get(&prefs, &key),
        Commands::Set { key, value, commit } => {
            cli::set(&prefs, &key, &value, commit || config.commit_writes)
        }
        Commands::Cycle { key, commit } => {
            cli::cycle(&prefs, &key, commit || config.commit_writes)
        }
        Commands::Reset { commit } => cli::reset(&prefs, commit || config.commit_writes),
    };

    // Background writes must land before the process exits
    prefs.store().wait_for_writes();

    result
}
