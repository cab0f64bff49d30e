//! Log setup.
//!
//! The terminal belongs to the UI, so log entries go to a file instead of
//! stderr. Filtering follows `POSTLINE_LOG` (an `EnvFilter` directive).

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use crate::config;

/// Default log file path
pub const DEFAULT_LOG_PATH: &str = "~/.postline/postline.log";

/// Environment variable name for overriding the log file path
pub const LOG_PATH_ENV_VAR: &str = "POSTLINE_LOG_PATH";

/// Environment variable holding the log filter directive
pub const LOG_FILTER_ENV_VAR: &str = "POSTLINE_LOG";

/// Get the log file path, checking environment variable first
pub fn get_log_path() -> String {
    std::env::var_os(LOG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber writing to `log_path`
pub fn init(log_path: &str, verbose: bool) -> Result<()> {
    let path = config::expand_path(log_path);
    if let Some(parent) = Path::new(&path).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory for '{path}'"))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{path}'"))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!("Logging to {}", path);
    Ok(())
}
