//! Logging setup
//!
//! The panel owns the terminal, so logs only ever go to a file. Without a
//! log file no subscriber is installed.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `default_filter` is used
pub fn init(log_file: Option<&Path>, default_filter: &str) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(from_env.as_deref(), default_filter)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")
}

/// A valid `from_env` takes precedence; a malformed one is ignored
fn build_filter(from_env: Option<&str>, default_filter: &str) -> anyhow::Result<EnvFilter> {
    if let Some(filter) = from_env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter)
        .with_context(|| format!("invalid log filter {default_filter:?}"))
}

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
