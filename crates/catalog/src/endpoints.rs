use reqwest::Url;

use crate::error::{CatalogError, Result};

/// Default accounts host used for the client-credentials grant.
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
/// Default host serving the read-only Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";

/// Base URLs of the two hosts the catalog client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
	accounts: Url,
	api: Url,
}

impl Default for Endpoints {
	fn default() -> Self {
		Self::new(DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL)
			.unwrap_or_else(|err| unreachable!("built-in catalog URLs must parse: {err}"))
	}
}

impl Endpoints {
	/// Parse the accounts and API base URLs.
	pub fn new(accounts: &str, api: &str) -> Result<Self> {
		Ok(Self {
			accounts: parse_base(accounts)?,
			api: parse_base(api)?,
		})
	}

	#[must_use]
	pub fn accounts(&self) -> &Url {
		&self.accounts
	}

	#[must_use]
	pub fn api(&self) -> &Url {
		&self.api
	}

	/// `POST {accounts}/api/token`
	pub fn token(&self) -> Result<Url> {
		with_segments(&self.accounts, &["api", "token"])
	}

	/// `GET {api}/v1/search`
	pub fn search(&self) -> Result<Url> {
		with_segments(&self.api, &["v1", "search"])
	}

	/// `GET {api}/v1/artists/{id}/albums`
	pub fn artist_albums(&self, artist_id: &str) -> Result<Url> {
		if artist_id.is_empty() {
			return Err(CatalogError::invalid_url(
				self.api.as_str(),
				"artist id must not be empty",
			));
		}
		with_segments(&self.api, &["v1", "artists", artist_id, "albums"])
	}
}

fn parse_base(value: &str) -> Result<Url> {
	let url = Url::parse(value.trim()).map_err(|err| CatalogError::invalid_url(value, err))?;
	if url.cannot_be_a_base() {
		return Err(CatalogError::invalid_url(value, "URL cannot be used as a base"));
	}
	if !matches!(url.scheme(), "http" | "https") {
		return Err(CatalogError::invalid_url(value, "scheme must be http or https"));
	}
	Ok(url)
}

/// Append path segments to `base`; each segment is percent-encoded.
fn with_segments(base: &Url, segments: &[&str]) -> Result<Url> {
	let mut url = base.clone();
	url.path_segments_mut()
		.map_err(|()| CatalogError::invalid_url(base.as_str(), "URL cannot be used as a base"))?
		.pop_if_empty()
		.extend(segments);
	Ok(url)
}
