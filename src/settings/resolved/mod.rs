use std::path::PathBuf;

use covers::download::DownloadMode;
use covers::session::SessionOptions;
use covers_catalog::{AlbumQuery, Credentials};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub credentials: Credentials,
	pub accounts_url: String,
	pub api_url: String,
	pub album_query: AlbumQuery,
	pub session: SessionOptions,
	pub download_dir: PathBuf,
	pub download_mode: DownloadMode,
	pub user_agent: Option<String>,
	pub input_title: String,
	pub initial_query: String,
	pub theme: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		credentials: Credentials::new("client", "secret"),
		accounts_url: covers_catalog::DEFAULT_ACCOUNTS_URL.to_string(),
		api_url: covers_catalog::DEFAULT_API_URL.to_string(),
		album_query: AlbumQuery::default(),
		session: SessionOptions::default(),
		download_dir: PathBuf::from("/tmp/covers"),
		download_mode: DownloadMode::Auto,
		user_agent: None,
		input_title: "Artist".into(),
		initial_query: String::new(),
		theme: None,
	}
}
