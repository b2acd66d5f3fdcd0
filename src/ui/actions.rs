use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::SessionOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome())),
			KeyCode::Char('u') if ctrl => {
				self.search_input.clear();
				self.query_changed();
			}
			KeyCode::Char('o') if ctrl => self.open_selected_cover(),
			KeyCode::Enter => {
				if self.session.suggestions().is_empty() {
					self.download_selected_cover();
				} else if let Some(effect) = self.session.submit() {
					self.catalog.dispatch(effect);
				}
			}
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			_ => {
				if self.search_input.input(key) {
					self.query_changed();
				}
			}
		}
		Ok(None)
	}

	/// Suggestions take the arrow keys while they are visible.
	fn move_selection(&mut self, delta: isize) {
		if !self.session.suggestions().is_empty() {
			self.session.move_cursor(delta);
			return;
		}
		let len = self.session.albums().len();
		if len == 0 {
			return;
		}
		let next = match self.album_state.selected() {
			Some(selected) => selected.saturating_add_signed(delta).min(len - 1),
			None => 0,
		};
		self.album_state.select(Some(next));
	}

	fn download_selected_cover(&mut self) {
		if let Some(album) = self.selected_album().cloned() {
			self.catalog.download(album);
		}
	}

	fn open_selected_cover(&mut self) {
		if let Some(url) = self
			.selected_album()
			.and_then(|album| album.image_url.clone())
		{
			self.catalog.open(url);
		}
	}
}
