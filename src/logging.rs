//! File logging for the `gridline` binary.
//!
//! The terminal belongs to the table while it runs, so log records go to
//! `gridline.log` in the data directory instead.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "gridline.log";

/// Install the global logger writing to `<data dir>/gridline.log`. Returns the
/// path of the log file, or `None` when logging is off.
pub fn initialize(level: LevelFilter) -> Result<Option<PathBuf>> {
	if level == LevelFilter::Off {
		return Ok(None);
	}
	let dir = app_dirs::get_data_dir()?;
	let path = initialize_in(&dir, level)?;
	Ok(Some(path))
}

fn initialize_in(dir: &Path, level: LevelFilter) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;
	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_thread_level(LevelFilter::Off)
		.build();
	WriteLogger::init(level, config, file).context("a global logger is already installed")?;
	log::info!("gridline {} logging at {level}", env!("CARGO_PKG_VERSION"));
	Ok(path)
}
