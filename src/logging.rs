//! Log setup. The terminal belongs to the game, so logs only ever go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file subscriber filtered by `RUST_LOG` (default `info`)
///
/// Without a path no subscriber is installed and every event is dropped.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
