//! File logging.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records go
//! to `<cache dir>/tui-memorize/logs/tui-memorize_*.log` and never to stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// `<cache dir>/tui-memorize/logs`, falling back to `./logs`.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tui-memorize")
        .join("logs")
}

/// Start the file logger.
///
/// With `prefer_env`, a set `RUST_LOG` wins over `level`. Keep the returned
/// handle alive for the lifetime of the program.
pub fn init(level: &str, prefer_env: bool, dir: &Path) -> Result<LoggerHandle> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let logger = if prefer_env {
        Logger::try_with_env_or_str(level)
    } else {
        Logger::try_with_str(level)
    }
    .with_context(|| format!("invalid log level {level:?}"))?;

    let handle = logger
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename("tui-memorize")
                .suffix("log"),
        )
        .format(flexi_logger::opt_format)
        .start()?;
    Ok(handle)
}
