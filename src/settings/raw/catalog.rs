use covers::session::MAX_SUGGESTIONS;
use covers_catalog::{AlbumQuery, Credentials, DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL};
use serde::Deserialize;

use super::super::util::{non_empty, sanitize_include_groups};
use crate::cli::CliArgs;

const DEFAULT_MARKET: &str = "US";
const DEFAULT_INCLUDE_GROUPS: &str = "album";

/// Catalog service values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) client_id: Option<String>,
	pub(super) client_secret: Option<String>,
	pub(super) accounts_url: Option<String>,
	pub(super) api_url: Option<String>,
	pub(super) market: Option<String>,
	pub(super) include_groups: Option<String>,
	pub(super) album_limit: Option<u32>,
	pub(super) suggestion_limit: Option<usize>,
}

pub(super) struct CatalogResolution {
	pub(super) credentials: Credentials,
	pub(super) accounts_url: String,
	pub(super) api_url: String,
	pub(super) market: String,
	pub(super) include_groups: String,
	pub(super) album_limit: u32,
	pub(super) suggestion_limit: usize,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(market) = cli.market.clone() {
			self.market = Some(market);
		}
	}

	/// Fill defaults. Range and format checks happen during validation so the
	/// error can name where a bad value came from.
	pub(super) fn finalize(self) -> CatalogResolution {
		let credentials = Credentials::new(
			non_empty(self.client_id).unwrap_or_default(),
			non_empty(self.client_secret).unwrap_or_default(),
		);
		let include_groups = self
			.include_groups
			.map(|groups| sanitize_include_groups(&groups))
			.filter(|groups| !groups.is_empty())
			.unwrap_or_else(|| DEFAULT_INCLUDE_GROUPS.to_string());

		CatalogResolution {
			credentials,
			accounts_url: non_empty(self.accounts_url)
				.unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.to_string()),
			api_url: non_empty(self.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
			market: self
				.market
				.map(|market| market.trim().to_ascii_uppercase())
				.unwrap_or_else(|| DEFAULT_MARKET.to_string()),
			include_groups,
			album_limit: self.album_limit.unwrap_or(AlbumQuery::MAX_LIMIT),
			suggestion_limit: self.suggestion_limit.unwrap_or(MAX_SUGGESTIONS),
		}
	}
}

impl CatalogResolution {
	pub(super) fn album_query(&self) -> AlbumQuery {
		AlbumQuery {
			include_groups: self.include_groups.clone(),
			market: self.market.clone(),
			limit: self.album_limit,
		}
	}
}
