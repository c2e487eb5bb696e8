//! Logging for the drawer and the replay tool
//!
//! Two sinks:
//! - stderr, filtered by `RUST_LOG` or else by the `-v` count
//!   (`warn`, `info`, `debug`, `trace`)
//! - `<config dir>/logs/sidedrawer.log`, rotated daily, always at debug
//!   level for this crate, written from a background worker
//!
//! Useful targets: `sidedrawer::gesture` (session transitions, per-frame
//! offsets at trace) and `sidedrawer::settle` (generation bumps, finalize).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::paths::AppDirs;

const LOG_FILE: &str = "sidedrawer.log";

/// Console level for a `-v` count
pub fn console_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Keeps the file writer alive; hold it until exit so buffered lines flush
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// File logging is skipped when there is no config directory or it cannot
/// be created; console logging always works.
pub fn init(verbosity: u8, dirs: Option<&AppDirs>) -> LogGuard {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let (file_layer, guard) = match dirs.map(AppDirs::ensure_logs_dir) {
        Some(Ok(logs_dir)) => {
            let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("sidedrawer=debug"));
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("sidedrawer: file logging disabled: {:#}", e);
            (None, None)
        }
        None => (None, None),
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("sidedrawer: logging already initialized: {}", e);
    }

    LogGuard { _file: guard }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level_by_verbosity() {
        assert_eq!(console_level(0), "warn");
        assert_eq!(console_level(1), "info");
        assert_eq!(console_level(2), "debug");
        assert_eq!(console_level(3), "trace");
        assert_eq!(console_level(u8::MAX), "trace");
    }
}
