//! Debug logging via `tracing`
//!
//! The terminal belongs to the UI, so log records go to a file
//! (`<tmp>/quotui-debug.log`) and only when `--debug` is given. Without it
//! no subscriber is installed and every `tracing` macro is a no-op.
//!
//! `RUST_LOG` overrides the default `quotui=debug` filter.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "quotui=debug";

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file logger when `debug` is set
pub fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }
    init_file_logging(&crate::utils::get_debug_log_path())
}

/// Append log records to `path`
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init()
        .context("Failed to install debug logger")?;

    tracing::debug!("Debug logging to {}", path.display());
    Ok(())
}
