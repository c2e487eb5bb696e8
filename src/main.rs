use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use cli::{CliArgs, CliCommand};
use sidedrawer::config::DrawerConfig;
use sidedrawer::paths::AppDirs;
use sidedrawer::replay::{replay, Trace};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let dirs = AppDirs::from_env();
    let _log = sidedrawer::tracing::init(args.verbose, dirs.as_ref());

    match args.command {
        CliCommand::Replay {
            trace,
            config,
            json,
        } => {
            let config = match config.or_else(|| dirs.map(|d| d.config_file())) {
                Some(path) => DrawerConfig::load_from(&path),
                None => DrawerConfig::default(),
            };
            tracing::info!(
                edge_zone = config.edge_zone,
                drag_start = config.drag_start,
                vertical_cancel = config.vertical_cancel,
                commit_ratio = config.commit_ratio,
                settle_ms = config.settle_duration_ms,
                "Active drawer config"
            );
            let trace = Trace::load(&trace)?;
            let report = replay(&trace, config)?;

            if json {
                let out =
                    serde_json::to_string_pretty(&report).context("Failed to encode report")?;
                println!("{}", out);
            } else {
                print!("{}", report);
            }
        }
        CliCommand::Defaults => {
            print!("{}", DrawerConfig::default().to_yaml()?);
        }
    }

    Ok(())
}
