// tracing setup: stderr for one-shot runs, an append-only file for the TUI.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const APPLICATION: &str = "moviesearch";
const LOG_FILE_NAME: &str = "moviesearch.log";

const DEFAULT_FILTER: &str = "moviesearch=info";
const STDERR_FILTER: &str = "moviesearch=warn";

// RUST_LOG wins over the built-in default
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Where the interactive UI logs when no `--log-file` is given: the user's
/// state directory, else the cache directory, else the system temp directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join(APPLICATION)
        .join(LOG_FILE_NAME)
}

// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

pub fn init_stderr() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(STDERR_FILTER))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")
}

pub fn init_file(path: &Path) -> anyhow::Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")
}
