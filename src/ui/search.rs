use std::sync::mpsc::TryRecvError;

use tracing::debug;

use super::App;
use crate::systems::catalog::CatalogEvent;

impl<'a> App<'a> {
	/// Drain any catalog responses waiting on the receiver channel.
	pub(crate) fn pump_catalog_events(&mut self) {
		loop {
			match self.catalog.try_recv() {
				Ok(event) => self.handle_catalog_event(event),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_catalog_event(&mut self, event: CatalogEvent) {
		match event {
			CatalogEvent::Suggestions { id, suggestions } => {
				self.session.apply_suggestions(id, suggestions);
			}
			CatalogEvent::SuggestionsFailed { id } => self.session.suggestions_failed(id),
			CatalogEvent::Albums { id, albums } => {
				if self.session.apply_albums(id, albums) {
					self.album_state.select(None);
					self.ensure_album_selection();
				}
			}
			CatalogEvent::AlbumsFailed { id } => self.session.albums_failed(id),
			CatalogEvent::Delivered(delivery) => {
				debug!(?delivery, "cover delivered");
				self.downloads.push(delivery);
			}
		}
	}
}
