use std::path::PathBuf;

use anyhow::Result;
use covers::app_dirs;
use covers::download::DownloadMode;
use serde::Deserialize;

use super::super::util::non_empty;
use crate::cli::CliArgs;

/// Cover delivery values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DownloadSection {
	pub(super) directory: Option<PathBuf>,
	pub(super) mode: Option<DownloadMode>,
	pub(super) user_agent: Option<String>,
}

pub(super) struct DownloadResolution {
	pub(super) directory: PathBuf,
	pub(super) mode: DownloadMode,
	pub(super) user_agent: Option<String>,
}

impl DownloadSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(directory) = cli.download_dir.clone() {
			self.directory = Some(directory);
		}
		if let Some(mode) = cli.download_mode {
			self.mode = Some(mode.into());
		}
	}

	pub(super) fn finalize(self) -> Result<DownloadResolution> {
		let directory = match self.directory {
			Some(directory) => directory,
			None => app_dirs::get_download_dir()?,
		};
		Ok(DownloadResolution {
			directory,
			mode: self.mode.unwrap_or_default(),
			user_agent: non_empty(self.user_agent),
		})
	}
}
