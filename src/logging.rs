//! Log setup for the binaries.
//!
//! Logs go to a file so they never interleave with the maze printed on the terminal.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Directory the log file is written to, relative to the working directory.
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "escape-maze.log";

/// Installs a global fmt subscriber writing to `logs/escape-maze.log`.
///
/// The returned guard flushes pending lines when dropped, so keep it alive until exit.
pub fn init(verbose: bool) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

/// `DEBUG=1` turns on debug logging, like a `--verbose` flag.
pub fn debug_env() -> bool {
    matches!(std::env::var("DEBUG"), Ok(val) if val == "1")
}
