//! Log setup.
//!
//! The terminal belongs to the UI while `covers` runs, so events go to a log
//! file instead of stderr. `RUST_LOG` controls the filter (default `info`).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "covers.log";

/// Default log location inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path` or the default log file.
///
/// Returns the file in use. Calling this twice keeps the first subscriber.
pub fn initialize(path: Option<&Path>) -> Result<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => default_log_file()?,
	};
	let file = open_log_file(&path)?;

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_line_number(true)
		.with_target(false)
		.with_file(true)
		.try_init();

	Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
