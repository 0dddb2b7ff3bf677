// src/logging.rs
use anyhow::{Context, Result};
use log::LevelFilter;

/// Installs the stderr logger.
///
/// `level` is the baseline; `RUST_LOG`, when set, takes precedence.
pub fn init(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init()
        .context("failed to install logger")
}
