//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a recorded pointer trace against an in-memory panel
//! - Printing the default gesture configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Swipe drawer gesture tools
#[derive(Parser, Debug)]
#[command(name = "sidedrawer", version, about = "Swipe drawer gesture tools")]
pub struct CliArgs {
    /// More console logging (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay a pointer trace (YAML or JSON) and report panel writes
    Replay {
        /// Trace file to replay
        #[arg(value_name = "TRACE")]
        trace: PathBuf,

        /// Config file (defaults to ~/.config/sidedrawer/config.yaml)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as YAML
    Defaults,
}
