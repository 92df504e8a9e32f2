//! File logging for the watchface.
//!
//! The terminal belongs to the watchface while it runs, so everything goes to
//! a daily-rotated file instead of stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Prefix of the files written by the rolling appender.
const LOG_FILE_PREFIX: &str = "dualtime.log";
const LOG_RETENTION_DAYS: u64 = 7;

/// Return the log directory path.
///
/// Precedence: `DUALTIME_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/dualtime/`
/// Linux: `$XDG_DATA_HOME/dualtime/logs/` or `~/.local/share/dualtime/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DUALTIME_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("dualtime");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("dualtime").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Build the level filter from `DUALTIME_LOG`, then `RUST_LOG`, else `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("DUALTIME_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Delete rotated log files older than `max_age_days`.
///
/// Files not carrying [`LOG_FILE_PREFIX`] are left alone. Returns how many
/// files were removed.
fn prune_logs(dir: &Path, max_age_days: u64) -> usize {
    let cutoff = SystemTime::now() - Duration::from_secs(max_age_days * 86400);
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX) {
            continue;
        }
        let stale = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .is_ok_and(|modified| modified <= cutoff);
        if stale && fs::remove_file(entry.path()).is_ok() {
            removed += 1;
        }
    }
    removed
}

/// Install the global tracing subscriber writing into [`log_dir`].
///
/// Returns the directory in use. Fails if the directory cannot be created or
/// a subscriber is already installed.
pub fn init() -> Result<PathBuf> {
    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let pruned = prune_logs(&dir, LOG_RETENTION_DAYS);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(rolling::daily(&dir, LOG_FILE_PREFIX))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if pruned > 0 {
        tracing::debug!(pruned, "removed stale log files");
    }
    Ok(dir)
}
