//! Cover delivery.
//!
//! On desktop the image bytes are fetched and saved as `<album name>.jpg`
//! through a temporary file that is persisted once complete. On mobile the
//! image URL is opened instead and no bytes are fetched.

mod device;
mod filename;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use covers_catalog::{Album, CatalogApi, CatalogError};
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

pub use device::{DeviceClass, DownloadMode};
pub use filename::{sanitize_file_stem, unused_path};

const COVER_EXTENSION: &str = "jpg";

/// Hands a URL to whatever the platform uses to show it.
pub trait UrlOpener: Send + Sync {
	fn open(&self, url: &str) -> io::Result<()>;
}

/// [`UrlOpener`] backed by the system browser / viewer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
	fn open(&self, url: &str) -> io::Result<()> {
		open::that_detached(url)
	}
}

#[derive(Debug, Error)]
pub enum DownloadError {
	#[error("album `{album}` has no cover image")]
	NoImage { album: String },
	#[error("failed to fetch cover: {0}")]
	Fetch(#[from] CatalogError),
	#[error("failed to write {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to open {url}: {source}")]
	Open {
		url: String,
		#[source]
		source: io::Error,
	},
}

/// Result of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum Delivery {
	Saved(PathBuf),
	Opened(String),
}

#[derive(Clone)]
pub struct Downloader {
	catalog: Arc<dyn CatalogApi>,
	opener: Arc<dyn UrlOpener>,
	directory: PathBuf,
	device: DeviceClass,
}

impl Downloader {
	pub fn new(
		catalog: Arc<dyn CatalogApi>,
		opener: Arc<dyn UrlOpener>,
		directory: impl Into<PathBuf>,
		device: DeviceClass,
	) -> Self {
		Self {
			catalog,
			opener,
			directory: directory.into(),
			device,
		}
	}

	#[must_use]
	pub fn directory(&self) -> &Path {
		&self.directory
	}

	#[must_use]
	pub fn device(&self) -> DeviceClass {
		self.device
	}

	/// Deliver the cover of `album` according to the device class.
	pub async fn download(&self, album: &Album) -> Result<Delivery, DownloadError> {
		let url = album
			.image_url
			.as_deref()
			.ok_or_else(|| DownloadError::NoImage {
				album: album.display_name.clone(),
			})?;

		if self.device.is_mobile() {
			return self.open(url);
		}

		let bytes = self.catalog.fetch_image(url).await?;
		let path = self.save(&album.display_name, &bytes)?;
		info!(bytes = bytes.len(), "Saved cover to {}", path.display());
		Ok(Delivery::Saved(path))
	}

	/// Open an image URL directly, whatever the device class.
	pub fn open(&self, url: &str) -> Result<Delivery, DownloadError> {
		debug!("Opening {url}");
		self.opener.open(url).map_err(|source| DownloadError::Open {
			url: url.to_string(),
			source,
		})?;
		Ok(Delivery::Opened(url.to_string()))
	}

	fn save(&self, display_name: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
		let io_error = |path: &Path| {
			let path = path.to_path_buf();
			move |source| DownloadError::Io { path, source }
		};

		std::fs::create_dir_all(&self.directory).map_err(io_error(&self.directory))?;

		// The temporary file is removed on drop unless persisted below.
		let mut staged = tempfile::Builder::new()
			.prefix(".covers-")
			.suffix(".part")
			.tempfile_in(&self.directory)
			.map_err(io_error(&self.directory))?;
		staged.write_all(bytes).map_err(io_error(staged.path()))?;
		staged.flush().map_err(io_error(staged.path()))?;

		let stem = sanitize_file_stem(display_name);
		persist_unclaimed(staged, || {
			unused_path(&self.directory, &stem, COVER_EXTENSION)
		})
	}
}

/// Persist `staged` under the first candidate name that is still free.
///
/// Another task may claim a name between the lookup and the rename, so the
/// rename refuses to replace files and the next candidate is tried instead.
fn persist_unclaimed(
	mut staged: NamedTempFile,
	mut next_candidate: impl FnMut() -> PathBuf,
) -> Result<PathBuf, DownloadError> {
	loop {
		let target = next_candidate();
		match staged.persist_noclobber(&target) {
			Ok(_) => return Ok(target),
			Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
				debug!("{} was claimed concurrently, retrying", target.display());
				staged = err.file;
			}
			Err(err) => {
				return Err(DownloadError::Io {
					path: target,
					source: err.error,
				});
			}
		}
	}
}
