//! Logging setup for the terminal binary.
//!
//! The game owns the terminal, so log records go to a file or nowhere.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::RunConfig;

/// Install `env_logger` writing to `config.log_path`.
///
/// Returns `Ok(false)` without installing anything when no path is configured.
/// The level filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(config: &RunConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("a logger is already installed")?;

    Ok(true)
}
