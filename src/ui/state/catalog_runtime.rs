use std::sync::mpsc::{Receiver, TryRecvError};

use covers_catalog::Album;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::session::Effect;
use crate::systems::catalog::{CatalogCommand, CatalogEvent};

/// UI-side handle on the background catalog worker.
pub(crate) struct CatalogRuntime {
	tx: UnboundedSender<CatalogCommand>,
	rx: Receiver<CatalogEvent>,
}

impl CatalogRuntime {
	pub(crate) fn new(tx: UnboundedSender<CatalogCommand>, rx: Receiver<CatalogEvent>) -> Self {
		Self { tx, rx }
	}

	/// Forward a session effect to the worker.
	pub(crate) fn dispatch(&self, effect: Effect) {
		let command = match effect {
			Effect::Suggest { id, query } => CatalogCommand::Suggest { id, query },
			Effect::FetchAlbums { id, artist } => CatalogCommand::Albums { id, artist },
		};
		self.send(command);
	}

	pub(crate) fn download(&self, album: Album) {
		self.send(CatalogCommand::Download(album));
	}

	pub(crate) fn open(&self, url: String) {
		self.send(CatalogCommand::Open(url));
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(CatalogCommand::Shutdown);
	}

	pub(crate) fn try_recv(&self) -> Result<CatalogEvent, TryRecvError> {
		self.rx.try_recv()
	}

	fn send(&self, command: CatalogCommand) {
		if self.tx.send(command).is_err() {
			warn!("catalog worker is no longer running");
		}
	}
}
