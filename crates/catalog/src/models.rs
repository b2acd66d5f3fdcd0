//! Catalog data types.
//!
//! The `*Object` structs mirror the service's JSON and stay private to the
//! crate; [`Suggestion`] and [`Album`] are the flattened shapes the rest of the
//! application works with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque artist identifier issued by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ArtistId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Artist match surfaced while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
	pub id: ArtistId,
	pub display_name: String,
}

impl Suggestion {
	#[must_use]
	pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
		Self {
			id: ArtistId::new(id),
			display_name: display_name.into(),
		}
	}
}

/// Album entry with the cover image to offer for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
	pub id: String,
	pub display_name: String,
	/// First (largest) image the service lists for the album.
	pub image_url: Option<String>,
	pub release_date: Option<String>,
	pub total_tracks: Option<u32>,
}

impl Album {
	#[must_use]
	pub fn new(display_name: impl Into<String>, image_url: impl Into<String>) -> Self {
		let display_name = display_name.into();
		Self {
			id: display_name.clone(),
			display_name,
			image_url: Some(image_url.into()),
			release_date: None,
			total_tracks: None,
		}
	}

	/// Year portion of the release date, if present.
	#[must_use]
	pub fn release_year(&self) -> Option<&str> {
		self.release_date
			.as_deref()
			.and_then(|date| date.split('-').next())
			.filter(|year| !year.is_empty())
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
	#[serde(default = "Vec::new")]
	pub(crate) items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistSearchResponse {
	#[serde(default)]
	pub(crate) artists: Option<Page<ArtistObject>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistObject {
	id: String,
	name: String,
}

impl From<ArtistObject> for Suggestion {
	fn from(artist: ArtistObject) -> Self {
		Suggestion::new(artist.id, artist.name)
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumObject {
	id: String,
	name: String,
	#[serde(default)]
	images: Vec<ImageObject>,
	#[serde(default)]
	release_date: Option<String>,
	#[serde(default)]
	total_tracks: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ImageObject {
	url: String,
}

impl From<AlbumObject> for Album {
	fn from(album: AlbumObject) -> Self {
		let image_url = album
			.images
			.into_iter()
			.map(|image| image.url)
			.find(|url| !url.is_empty());
		Album {
			id: album.id,
			display_name: album.name,
			image_url,
			release_date: album.release_date,
			total_tracks: album.total_tracks,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn album_takes_first_image() {
		let json = r#"{
			"id": "4m2880jivSbbyEGAKfITCa",
			"name": "Random Access Memories",
			"release_date": "2013-05-20",
			"total_tracks": 13,
			"images": [
				{"url": "https://i.example/640.jpg", "width": 640, "height": 640},
				{"url": "https://i.example/300.jpg", "width": 300, "height": 300}
			]
		}"#;
		let album: Album = serde_json::from_str::<AlbumObject>(json)
			.expect("decode")
			.into();

		assert_eq!(album.display_name, "Random Access Memories");
		assert_eq!(album.image_url.as_deref(), Some("https://i.example/640.jpg"));
		assert_eq!(album.release_year(), Some("2013"));
		assert_eq!(album.total_tracks, Some(13));
	}

	#[test]
	fn album_without_images_has_no_cover() {
		let album: Album = serde_json::from_str::<AlbumObject>(r#"{"id":"x","name":"Demo"}"#)
			.expect("decode")
			.into();
		assert_eq!(album.image_url, None);
		assert_eq!(album.release_year(), None);
	}

	#[test]
	fn search_response_without_artists_section_decodes() {
		let response: ArtistSearchResponse = serde_json::from_str("{}").expect("decode");
		assert!(response.artists.is_none());
	}
}
