//! Search interaction state, independent of any rendering.
//!
//! [`SearchSession`] owns the query, the suggestion list and the album list.
//! Its methods are pure transitions: they update state and, when the catalog
//! needs to be consulted, return an [`Effect`] describing the request. The
//! caller executes the effect and feeds the response back through
//! [`SearchSession::apply_suggestions`] or [`SearchSession::apply_albums`]
//! along with the [`RequestId`] it was issued under.

mod phase;
mod requests;

use covers_catalog::{Album, ArtistId, Suggestion};
use tracing::debug;

pub use phase::Phase;
pub use requests::{RequestId, StalePolicy};

use requests::RequestTracker;

/// Most suggestions ever kept.
pub const MAX_SUGGESTIONS: usize = 10;
/// Most albums ever kept.
pub const MAX_ALBUMS: usize = 50;

/// Catalog request the caller must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	Suggest { id: RequestId, query: String },
	FetchAlbums { id: RequestId, artist: ArtistId },
}

/// Tunables for a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
	pub suggestion_limit: usize,
	pub album_limit: usize,
	pub stale_policy: StalePolicy,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			suggestion_limit: MAX_SUGGESTIONS,
			album_limit: MAX_ALBUMS,
			stale_policy: StalePolicy::default(),
		}
	}
}

#[derive(Debug, Default)]
pub struct SearchSession {
	query: String,
	phase: Phase,
	suggestions: Vec<Suggestion>,
	cursor: usize,
	albums: Vec<Album>,
	search_executed: bool,
	artist: Option<Suggestion>,
	suggest_requests: RequestTracker,
	album_requests: RequestTracker,
	options: SessionOptions,
}

impl SearchSession {
	#[must_use]
	pub fn new(options: SessionOptions) -> Self {
		let options = SessionOptions {
			suggestion_limit: options.suggestion_limit.clamp(1, MAX_SUGGESTIONS),
			album_limit: options.album_limit.clamp(1, MAX_ALBUMS),
			..options
		};
		Self {
			options,
			..Self::default()
		}
	}

	/// Replace the query text.
	///
	/// An empty (or whitespace-only) query clears the suggestions on the spot
	/// and needs no request.
	pub fn edit_query(&mut self, text: impl Into<String>) -> Option<Effect> {
		self.query = text.into();
		let trimmed = self.query.trim();
		self.phase = self.phase.after_edit(!trimmed.is_empty());

		if trimmed.is_empty() {
			self.suggest_requests.invalidate();
			self.clear_suggestions();
			return None;
		}

		let id = self.suggest_requests.issue();
		Some(Effect::Suggest {
			id,
			query: self.query.clone(),
		})
	}

	/// Search for the highlighted suggestion (the top one unless the cursor moved).
	pub fn submit(&mut self) -> Option<Effect> {
		self.select_suggestion(self.cursor)
	}

	/// Fetch albums for the suggestion at `index`.
	pub fn select_suggestion(&mut self, index: usize) -> Option<Effect> {
		let suggestion = self.suggestions.get(index)?.clone();
		let artist = suggestion.id.clone();
		debug!(artist = %artist, name = %suggestion.display_name, "artist selected");

		self.suggest_requests.invalidate();
		self.clear_suggestions();
		self.artist = Some(suggestion);
		self.phase = self.phase.after_submit();

		let id = self.album_requests.issue();
		Some(Effect::FetchAlbums { id, artist })
	}

	/// Apply an autocomplete response. Returns whether it changed the list.
	pub fn apply_suggestions(&mut self, id: RequestId, mut suggestions: Vec<Suggestion>) -> bool {
		let accepted = self.suggest_requests.accepts(id, self.options.stale_policy);
		self.suggest_requests.complete(id);
		if !accepted {
			debug!(id, "dropping stale suggestions");
			return false;
		}

		suggestions.truncate(self.options.suggestion_limit);
		self.suggestions = suggestions;
		self.cursor = 0;
		true
	}

	/// An autocomplete request failed; the visible state stays as it was.
	pub fn suggestions_failed(&mut self, id: RequestId) {
		self.suggest_requests.complete(id);
	}

	/// Apply an album listing. Returns whether it changed the list.
	///
	/// An accepted listing always clears the suggestions and marks the search
	/// as executed, even when it is empty.
	pub fn apply_albums(&mut self, id: RequestId, mut albums: Vec<Album>) -> bool {
		let accepted = self.album_requests.accepts(id, self.options.stale_policy);
		self.album_requests.complete(id);
		if !accepted {
			debug!(id, "dropping stale album listing");
			return false;
		}

		self.clear_suggestions();
		albums.truncate(self.options.album_limit);
		self.albums = albums;
		self.search_executed = true;
		self.phase = self.phase.after_albums();
		true
	}

	/// An album request failed; keep the previous listing on screen.
	pub fn albums_failed(&mut self, id: RequestId) {
		let accepted = self.album_requests.accepts(id, self.options.stale_policy);
		self.album_requests.complete(id);
		if accepted {
			self.phase = self.phase.after_failed_search(self.search_executed);
		}
	}

	/// Move the suggestion highlight, clamped to the list.
	pub fn move_cursor(&mut self, delta: isize) {
		if self.suggestions.is_empty() {
			self.cursor = 0;
			return;
		}
		let last = self.suggestions.len() - 1;
		self.cursor = self.cursor.saturating_add_signed(delta).min(last);
	}

	fn clear_suggestions(&mut self) {
		self.suggestions.clear();
		self.cursor = 0;
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.phase
	}

	#[must_use]
	pub fn suggestions(&self) -> &[Suggestion] {
		&self.suggestions
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	#[must_use]
	pub fn highlighted(&self) -> Option<&Suggestion> {
		self.suggestions.get(self.cursor)
	}

	#[must_use]
	pub fn albums(&self) -> &[Album] {
		&self.albums
	}

	#[must_use]
	pub fn search_executed(&self) -> bool {
		self.search_executed
	}

	/// Artist whose albums were last requested.
	#[must_use]
	pub fn artist(&self) -> Option<&Suggestion> {
		self.artist.as_ref()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.suggest_requests.is_in_flight() || self.album_requests.is_in_flight()
	}

	/// Whether the "no albums" message should replace the album list.
	#[must_use]
	pub fn shows_no_albums(&self) -> bool {
		self.search_executed && self.albums.is_empty()
	}

	#[must_use]
	pub fn options(&self) -> SessionOptions {
		self.options
	}
}

#[cfg(test)]
mod tests;
