use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use covers_catalog::{AuthContext, CatalogApi, Credentials};
use tokio::runtime::Runtime;
use tokio::sync::OnceCell;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

use super::commands::{CatalogCommand, CatalogEvent};
use crate::download::{DownloadError, Downloader};

/// Everything a catalog task needs; shared by all tasks of one worker.
struct CatalogContext {
	catalog: Arc<dyn CatalogApi>,
	credentials: Credentials,
	auth: OnceCell<AuthContext>,
	downloader: Downloader,
}

impl CatalogContext {
	/// The session token, acquired by whichever task asks first.
	///
	/// A failed grant is logged and replaced by an anonymous context; it is
	/// never retried.
	async fn auth(&self) -> &AuthContext {
		self.auth
			.get_or_init(|| async {
				match self.catalog.request_token(&self.credentials).await {
					Ok(auth) => auth,
					Err(err) => {
						warn!("✗ Failed to acquire catalog token: {err}");
						AuthContext::anonymous()
					}
				}
			})
			.await
	}

	async fn execute(&self, command: CatalogCommand, events: &Sender<CatalogEvent>) {
		let event = match command {
			CatalogCommand::Suggest { id, query } => {
				let auth = self.auth().await;
				match self.catalog.search_artists(auth, &query).await {
					Ok(suggestions) => CatalogEvent::Suggestions { id, suggestions },
					Err(err) => {
						warn!(id, "✗ Artist search for {query:?} failed: {err}");
						CatalogEvent::SuggestionsFailed { id }
					}
				}
			}
			CatalogCommand::Albums { id, artist } => {
				let auth = self.auth().await;
				match self.catalog.artist_albums(auth, &artist).await {
					Ok(albums) => CatalogEvent::Albums { id, albums },
					Err(err) => {
						warn!(id, "✗ Album listing for artist {artist} failed: {err}");
						CatalogEvent::AlbumsFailed { id }
					}
				}
			}
			CatalogCommand::Download(album) => match self.downloader.download(&album).await {
				Ok(delivery) => CatalogEvent::Delivered(delivery),
				Err(DownloadError::NoImage { album }) => {
					debug!("Skipping `{album}`: no cover image");
					return;
				}
				Err(err) => {
					warn!("✗ Cover download failed: {err}");
					return;
				}
			},
			CatalogCommand::Open(url) => match self.downloader.open(&url) {
				Ok(delivery) => CatalogEvent::Delivered(delivery),
				Err(err) => {
					warn!("✗ {err}");
					return;
				}
			},
			CatalogCommand::Shutdown => return,
		};
		// The UI may already be gone; nothing left to report to.
		let _ = events.send(event);
	}
}

/// Launches the background catalog worker and returns its channels.
///
/// The worker owns a tokio runtime. Each command runs as its own task, so
/// responses come back in completion order rather than request order. The
/// token grant starts immediately.
pub(crate) fn spawn(
	catalog: Arc<dyn CatalogApi>,
	credentials: Credentials,
	downloader: Downloader,
) -> io::Result<(UnboundedSender<CatalogCommand>, Receiver<CatalogEvent>)> {
	let runtime = tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.thread_name("covers-catalog")
		.build()?;
	let (command_tx, command_rx) = unbounded_channel();
	let (event_tx, event_rx) = mpsc::channel();
	let context = Arc::new(CatalogContext {
		catalog,
		credentials,
		auth: OnceCell::new(),
		downloader,
	});

	thread::Builder::new()
		.name("covers-catalog-worker".to_string())
		.spawn(move || worker_loop(runtime, context, command_rx, event_tx))?;

	Ok((command_tx, event_rx))
}

fn worker_loop(
	runtime: Runtime,
	context: Arc<CatalogContext>,
	mut command_rx: UnboundedReceiver<CatalogCommand>,
	event_tx: Sender<CatalogEvent>,
) {
	runtime.block_on(async {
		let startup = Arc::clone(&context);
		tokio::spawn(async move {
			if !startup.auth().await.is_anonymous() {
				info!("✓ Catalog session ready");
			}
		});

		while let Some(command) = command_rx.recv().await {
			if matches!(command, CatalogCommand::Shutdown) {
				debug!("Catalog worker shutting down");
				break;
			}
			let context = Arc::clone(&context);
			let events = event_tx.clone();
			tokio::spawn(async move { context.execute(command, &events).await });
		}
	});
	// Requests still in flight are abandoned, not awaited.
	runtime.shutdown_background();
}

#[cfg(test)]
mod tests {
	use std::path::Path;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::time::Duration;

	use async_trait::async_trait;
	use covers_catalog::{Album, ArtistId, CatalogError, Suggestion};
	use reqwest::StatusCode;

	use super::*;
	use crate::download::{Delivery, DeviceClass, UrlOpener};

	const WAIT: Duration = Duration::from_secs(5);

	/// Answers artist searches after a delay that depends on the query, so the
	/// tests can force responses to arrive out of order.
	#[derive(Default)]
	struct SlowCatalog {
		token_requests: AtomicUsize,
		reject_credentials: bool,
	}

	impl SlowCatalog {
		fn delay_for(query: &str) -> Duration {
			match query.len() {
				1 => Duration::from_millis(150),
				_ => Duration::from_millis(10),
			}
		}
	}

	#[async_trait]
	impl CatalogApi for SlowCatalog {
		async fn request_token(&self, _: &Credentials) -> covers_catalog::Result<AuthContext> {
			self.token_requests.fetch_add(1, Ordering::SeqCst);
			tokio::time::sleep(Duration::from_millis(20)).await;
			if self.reject_credentials {
				Err(CatalogError::Unauthorized { endpoint: "token" })
			} else {
				Ok(AuthContext::new("session-token"))
			}
		}

		async fn search_artists(
			&self,
			auth: &AuthContext,
			query: &str,
		) -> covers_catalog::Result<Vec<Suggestion>> {
			tokio::time::sleep(Self::delay_for(query)).await;
			if auth.is_anonymous() {
				return Err(CatalogError::Unauthorized { endpoint: "search" });
			}
			Ok(vec![Suggestion::new(query, query.to_uppercase())])
		}

		async fn artist_albums(
			&self,
			_: &AuthContext,
			artist: &ArtistId,
		) -> covers_catalog::Result<Vec<Album>> {
			if artist.as_str() == "gone" {
				return Err(CatalogError::Status {
					endpoint: "artist albums",
					status: StatusCode::NOT_FOUND,
				});
			}
			Ok(vec![Album::new(
				format!("{artist} LP"),
				"https://i.example/lp.jpg",
			)])
		}

		async fn fetch_image(&self, _: &str) -> covers_catalog::Result<Vec<u8>> {
			Ok(b"jpeg".to_vec())
		}
	}

	struct NoopOpener;

	impl UrlOpener for NoopOpener {
		fn open(&self, _: &str) -> io::Result<()> {
			Ok(())
		}
	}

	fn start(
		catalog: &Arc<SlowCatalog>,
		directory: &Path,
		device: DeviceClass,
	) -> (UnboundedSender<CatalogCommand>, Receiver<CatalogEvent>) {
		let downloader = Downloader::new(catalog.clone(), Arc::new(NoopOpener), directory, device);
		spawn(
			catalog.clone(),
			Credentials::new("id", "secret"),
			downloader,
		)
		.unwrap()
	}

	fn suggestion_ids(events: &Receiver<CatalogEvent>, count: usize) -> Vec<u64> {
		(0..count)
			.map(|_| match events.recv_timeout(WAIT).unwrap() {
				CatalogEvent::Suggestions { id, .. } | CatalogEvent::SuggestionsFailed { id } => id,
				other => panic!("unexpected event {other:?}"),
			})
			.collect()
	}

	#[test]
	fn responses_arrive_in_completion_order() {
		let dir = tempfile::tempdir().unwrap();
		let catalog = Arc::new(SlowCatalog::default());
		let (commands, events) = start(&catalog, dir.path(), DeviceClass::Desktop);

		commands
			.send(CatalogCommand::Suggest {
				id: 1,
				query: "a".to_string(),
			})
			.unwrap();
		commands
			.send(CatalogCommand::Suggest {
				id: 2,
				query: "ab".to_string(),
			})
			.unwrap();

		assert_eq!(suggestion_ids(&events, 2), vec![2, 1]);
		commands.send(CatalogCommand::Shutdown).unwrap();
	}

	#[test]
	fn token_is_requested_once_per_session() {
		let dir = tempfile::tempdir().unwrap();
		let catalog = Arc::new(SlowCatalog::default());
		let (commands, events) = start(&catalog, dir.path(), DeviceClass::Desktop);

		for id in 1..=5 {
			commands
				.send(CatalogCommand::Suggest {
					id,
					query: format!("query {id}"),
				})
				.unwrap();
		}

		let mut ids = suggestion_ids(&events, 5);
		ids.sort_unstable();
		assert_eq!(ids, vec![1, 2, 3, 4, 5]);
		assert_eq!(catalog.token_requests.load(Ordering::SeqCst), 1);
		commands.send(CatalogCommand::Shutdown).unwrap();
	}

	#[test]
	fn failed_token_grant_falls_back_to_anonymous_calls() {
		let dir = tempfile::tempdir().unwrap();
		let catalog = Arc::new(SlowCatalog {
			reject_credentials: true,
			..SlowCatalog::default()
		});
		let (commands, events) = start(&catalog, dir.path(), DeviceClass::Desktop);

		commands
			.send(CatalogCommand::Suggest {
				id: 7,
				query: "daft".to_string(),
			})
			.unwrap();

		assert!(matches!(
			events.recv_timeout(WAIT).unwrap(),
			CatalogEvent::SuggestionsFailed { id: 7 }
		));
		assert_eq!(catalog.token_requests.load(Ordering::SeqCst), 1);
		commands.send(CatalogCommand::Shutdown).unwrap();
	}

	#[test]
	fn album_failures_are_reported_with_their_id() {
		let dir = tempfile::tempdir().unwrap();
		let catalog = Arc::new(SlowCatalog::default());
		let (commands, events) = start(&catalog, dir.path(), DeviceClass::Desktop);

		commands
			.send(CatalogCommand::Albums {
				id: 3,
				artist: ArtistId::new("gone"),
			})
			.unwrap();
		assert!(matches!(
			events.recv_timeout(WAIT).unwrap(),
			CatalogEvent::AlbumsFailed { id: 3 }
		));

		commands
			.send(CatalogCommand::Albums {
				id: 4,
				artist: ArtistId::new("justice"),
			})
			.unwrap();
		match events.recv_timeout(WAIT).unwrap() {
			CatalogEvent::Albums { id, albums } => {
				assert_eq!(id, 4);
				assert_eq!(albums[0].display_name, "justice LP");
			}
			other => panic!("unexpected event {other:?}"),
		}
		commands.send(CatalogCommand::Shutdown).unwrap();
	}

	#[test]
	fn downloads_report_where_the_cover_went() {
		let dir = tempfile::tempdir().unwrap();
		let catalog = Arc::new(SlowCatalog::default());
		let (commands, events) = start(&catalog, dir.path(), DeviceClass::Desktop);

		commands
			.send(CatalogCommand::Download(Album::new(
				"Cross",
				"https://i.example/cross.jpg",
			)))
			.unwrap();

		match events.recv_timeout(WAIT).unwrap() {
			CatalogEvent::Delivered(Delivery::Saved(path)) => {
				assert_eq!(path, dir.path().join("Cross.jpg"));
				assert_eq!(std::fs::read(path).unwrap(), b"jpeg");
			}
			other => panic!("unexpected event {other:?}"),
		}
		commands.send(CatalogCommand::Shutdown).unwrap();
	}

	#[test]
	fn download_without_image_is_silent() {
		let dir = tempfile::tempdir().unwrap();
		let catalog = Arc::new(SlowCatalog::default());
		let (commands, events) = start(&catalog, dir.path(), DeviceClass::Desktop);

		let album = Album {
			image_url: None,
			..Album::new("Woman", "")
		};
		commands.send(CatalogCommand::Download(album)).unwrap();
		commands
			.send(CatalogCommand::Open("https://i.example/woman.jpg".to_string()))
			.unwrap();

		assert!(matches!(
			events.recv_timeout(WAIT).unwrap(),
			CatalogEvent::Delivered(Delivery::Opened(_))
		));
		assert!(events.recv_timeout(Duration::from_millis(100)).is_err());
		commands.send(CatalogCommand::Shutdown).unwrap();
	}
}
