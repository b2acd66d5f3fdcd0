use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::CatalogApi;
use crate::auth::{AuthContext, Credentials, TokenResponse};
use crate::endpoints::Endpoints;
use crate::error::{CatalogError, Result};
use crate::models::{Album, AlbumObject, ArtistId, ArtistSearchResponse, Page, Suggestion};

const USER_AGENT: &str = concat!("covers/", env!("CARGO_PKG_VERSION"));

/// Parameters for the artist album listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumQuery {
	/// Release groupings to include, comma separated (`album`, `single`, ...).
	pub include_groups: String,
	/// Marketplace the listing is scoped to.
	pub market: String,
	/// Maximum number of entries to request.
	pub limit: u32,
}

impl AlbumQuery {
	/// Largest page size the service accepts.
	pub const MAX_LIMIT: u32 = 50;
}

impl Default for AlbumQuery {
	fn default() -> Self {
		Self {
			include_groups: "album".to_string(),
			market: "US".to_string(),
			limit: Self::MAX_LIMIT,
		}
	}
}

/// HTTP client for the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
	http: Client,
	endpoints: Endpoints,
	albums: AlbumQuery,
}

impl CatalogClient {
	pub fn new(endpoints: Endpoints, albums: AlbumQuery) -> Result<Self> {
		let http = Client::builder().user_agent(USER_AGENT).build()?;
		Ok(Self {
			http,
			endpoints,
			albums,
		})
	}

	#[must_use]
	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}

	#[must_use]
	pub fn album_query(&self) -> &AlbumQuery {
		&self.albums
	}

	/// Exchange client credentials for a bearer token.
	pub async fn request_token(&self, credentials: &Credentials) -> Result<AuthContext> {
		let url = self.endpoints.token()?;
		info!("Catalog API: POST {url}");
		let response = self
			.http
			.post(url)
			.form(&credentials.grant_form())
			.send()
			.await?;
		let token: TokenResponse = read_json(response, "token").await?;
		let auth = AuthContext::from(token);
		info!(expires_in = ?auth.expires_in(), "✓ Catalog token acquired");
		Ok(auth)
	}

	/// Search artists whose names match `query`, in the order the service ranks them.
	pub async fn search_artists(
		&self,
		auth: &AuthContext,
		query: &str,
	) -> Result<Vec<Suggestion>> {
		let url = self.endpoints.search()?;
		debug!("Catalog API: GET {url} q={query:?}");
		let response = self
			.http
			.get(url)
			.query(&[("q", query), ("type", "artist")])
			.bearer_auth(auth.token())
			.send()
			.await?;
		let body: ArtistSearchResponse = read_json(response, "search").await?;
		let artists = body.artists.ok_or(CatalogError::MissingSection {
			endpoint: "search",
			section: "artists",
		})?;
		let suggestions: Vec<Suggestion> = artists.items.into_iter().map(Into::into).collect();
		debug!("✓ {} artist(s) for {query:?}", suggestions.len());
		Ok(suggestions)
	}

	/// List the albums of one artist using the configured [`AlbumQuery`].
	pub async fn artist_albums(&self, auth: &AuthContext, artist: &ArtistId) -> Result<Vec<Album>> {
		let url = self.endpoints.artist_albums(artist.as_str())?;
		let limit = self.albums.limit.to_string();
		info!("Catalog API: GET {url}");
		let response = self
			.http
			.get(url)
			.query(&[
				("include_groups", self.albums.include_groups.as_str()),
				("market", self.albums.market.as_str()),
				("limit", limit.as_str()),
			])
			.bearer_auth(auth.token())
			.send()
			.await?;
		let page: Page<AlbumObject> = read_json(response, "artist albums").await?;
		let albums: Vec<Album> = page.items.into_iter().map(Into::into).collect();
		info!("✓ {} album(s) for artist {artist}", albums.len());
		Ok(albums)
	}

	/// Download the raw bytes behind an image URL. No authentication is sent.
	pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
		debug!("Fetching image {url}");
		let response = self.http.get(url).send().await?;
		let response = check_status(response, "image")?;
		let bytes = response.bytes().await?;
		Ok(bytes.to_vec())
	}
}

#[async_trait]
impl CatalogApi for CatalogClient {
	async fn request_token(&self, credentials: &Credentials) -> Result<AuthContext> {
		CatalogClient::request_token(self, credentials).await
	}

	async fn search_artists(&self, auth: &AuthContext, query: &str) -> Result<Vec<Suggestion>> {
		CatalogClient::search_artists(self, auth, query).await
	}

	async fn artist_albums(&self, auth: &AuthContext, artist: &ArtistId) -> Result<Vec<Album>> {
		CatalogClient::artist_albums(self, auth, artist).await
	}

	async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
		CatalogClient::fetch_image(self, url).await
	}
}

fn check_status(response: Response, endpoint: &'static str) -> Result<Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	if status == StatusCode::UNAUTHORIZED {
		warn!("✗ {endpoint}: catalog rejected the credentials");
		return Err(CatalogError::Unauthorized { endpoint });
	}
	if status == StatusCode::TOO_MANY_REQUESTS {
		let retry_after = response
			.headers()
			.get(RETRY_AFTER)
			.and_then(|value| value.to_str().ok())
			.and_then(|value| value.trim().parse().ok());
		warn!("✗ {endpoint}: catalog rate limit exceeded");
		return Err(CatalogError::RateLimited { retry_after });
	}
	warn!("✗ {endpoint}: catalog returned {status}");
	Err(CatalogError::Status { endpoint, status })
}

async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &'static str) -> Result<T> {
	let response = check_status(response, endpoint)?;
	let body = response.bytes().await?;
	serde_json::from_slice(&body).map_err(|source| CatalogError::Decode { endpoint, source })
}
