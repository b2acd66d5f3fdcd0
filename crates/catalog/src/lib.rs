//! Read-only client for the music catalog service.
//!
//! The crate covers the three calls `covers` makes: the client-credentials
//! token grant, artist autocomplete and an artist's album listing, plus a plain
//! image fetch for saving covers. Every authenticated call takes the
//! [`AuthContext`] explicitly; nothing is cached inside the client.

mod api;
mod auth;
mod client;
mod endpoints;
mod error;
mod models;

pub use api::CatalogApi;
pub use auth::{AuthContext, Credentials};
pub use client::{AlbumQuery, CatalogClient};
pub use endpoints::{DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL, Endpoints};
pub use error::{CatalogError, Result};
pub use models::{Album, ArtistId, Suggestion};
