use async_trait::async_trait;

use crate::auth::{AuthContext, Credentials};
use crate::error::Result;
use crate::models::{Album, ArtistId, Suggestion};

/// Operations the application needs from the catalog service.
///
/// [`CatalogClient`](crate::CatalogClient) is the HTTP implementation; tests
/// substitute scripted fakes.
#[async_trait]
pub trait CatalogApi: Send + Sync {
	/// Client-credentials grant. Called once per session.
	async fn request_token(&self, credentials: &Credentials) -> Result<AuthContext>;

	/// Artist autocomplete for a non-empty query.
	async fn search_artists(&self, auth: &AuthContext, query: &str) -> Result<Vec<Suggestion>>;

	/// Album listing for one artist.
	async fn artist_albums(&self, auth: &AuthContext, artist: &ArtistId) -> Result<Vec<Album>>;

	/// Raw bytes of a cover image.
	async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
