use std::path::PathBuf;

use covers_catalog::Album;
use ratatui::widgets::TableState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::input::SearchInput;
use super::style::Theme;
use crate::download::Delivery;
use crate::session::{SearchSession, SessionOptions};

mod catalog_runtime;

pub(crate) use catalog_runtime::CatalogRuntime;

/// What the user did during one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// Query text at exit.
	pub query: String,
	/// Artist whose albums were listed last.
	pub artist: Option<String>,
	/// Every cover saved or opened, in completion order.
	pub downloads: Vec<Delivery>,
}

impl SessionOutcome {
	/// Paths of the covers written to disk.
	pub fn saved_paths(&self) -> impl Iterator<Item = &PathBuf> {
		self.downloads.iter().filter_map(|delivery| match delivery {
			Delivery::Saved(path) => Some(path),
			Delivery::Opened(_) => None,
		})
	}
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.catalog.shutdown();
	}
}

pub struct App<'a> {
	pub(crate) session: SearchSession,
	pub(crate) search_input: SearchInput<'a>,
	pub(crate) album_state: TableState,
	pub(crate) ui: UiConfig,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) downloads: Vec<Delivery>,
	pub(super) catalog: CatalogRuntime,
}

impl<'a> App<'a> {
	pub(crate) fn new(options: SessionOptions, catalog: CatalogRuntime) -> Self {
		Self {
			session: SearchSession::new(options),
			search_input: SearchInput::new(""),
			album_state: TableState::default(),
			ui: UiConfig::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			downloads: Vec::new(),
			catalog,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.ui = ui;
	}

	/// Replace the query as if the user had typed it.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
		self.query_changed();
	}

	#[must_use]
	pub fn session(&self) -> &SearchSession {
		&self.session
	}

	/// Number of covers saved to disk so far.
	#[must_use]
	pub fn saved_count(&self) -> usize {
		self.downloads
			.iter()
			.filter(|delivery| matches!(delivery, Delivery::Saved(_)))
			.count()
	}

	pub(crate) fn query_changed(&mut self) {
		let text = self.search_input.text().to_string();
		if let Some(effect) = self.session.edit_query(text) {
			self.catalog.dispatch(effect);
		}
	}

	pub(crate) fn selected_album(&self) -> Option<&Album> {
		let index = self.album_state.selected()?;
		self.session.albums().get(index)
	}

	/// Keep the album highlight inside the current listing.
	pub(crate) fn ensure_album_selection(&mut self) {
		let len = self.session.albums().len();
		match self.album_state.selected() {
			_ if len == 0 => self.album_state.select(None),
			None => self.album_state.select(Some(0)),
			Some(selected) if selected >= len => self.album_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	pub(crate) fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			query: self.search_input.text().to_string(),
			artist: self
				.session
				.artist()
				.map(|artist| artist.display_name.clone()),
			downloads: self.downloads.clone(),
		}
	}
}
