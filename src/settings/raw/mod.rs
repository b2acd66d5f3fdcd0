use anyhow::{Error, Result};
use covers::session::SessionOptions;
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod download;
mod search;
mod ui;

use catalog::CatalogSection;
use download::DownloadSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	download: DownloadSection,
	ui: UiSection,
	search: SearchSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.download.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			client_id: detect_source(
				false,
				self.catalog.client_id.is_some(),
				"COVERS__CATALOG__CLIENT_ID",
				"",
				"catalog.client_id",
			),
			client_secret: detect_source(
				false,
				self.catalog.client_secret.is_some(),
				"COVERS__CATALOG__CLIENT_SECRET",
				"",
				"catalog.client_secret",
			),
			accounts_url: detect_source(
				false,
				self.catalog.accounts_url.is_some(),
				"COVERS__CATALOG__ACCOUNTS_URL",
				"",
				"catalog.accounts_url",
			),
			api_url: detect_source(
				false,
				self.catalog.api_url.is_some(),
				"COVERS__CATALOG__API_URL",
				"",
				"catalog.api_url",
			),
			market: detect_source(
				cli.market.is_some(),
				self.catalog.market.is_some(),
				"COVERS__CATALOG__MARKET",
				"--market",
				"catalog.market",
			),
			album_limit: detect_source(
				false,
				self.catalog.album_limit.is_some(),
				"COVERS__CATALOG__ALBUM_LIMIT",
				"",
				"catalog.album_limit",
			),
			suggestion_limit: detect_source(
				false,
				self.catalog.suggestion_limit.is_some(),
				"COVERS__CATALOG__SUGGESTION_LIMIT",
				"",
				"catalog.suggestion_limit",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"COVERS__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let stale_policy = self.search.stale_policy();
		let catalog = self.catalog.finalize();
		let download = self.download.finalize()?;
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			album_query: catalog.album_query(),
			session: SessionOptions {
				suggestion_limit: catalog.suggestion_limit,
				album_limit: catalog.album_limit as usize,
				stale_policy,
			},
			credentials: catalog.credentials,
			accounts_url: catalog.accounts_url,
			api_url: catalog.api_url,
			download_dir: download.directory,
			download_mode: download.mode,
			user_agent: download.user_agent,
			input_title: ui.input_title,
			initial_query: ui.initial_query,
			theme: ui.theme,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
