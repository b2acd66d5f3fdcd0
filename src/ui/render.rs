use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};

use super::App;
use super::components::{
	AlbumTableContext, ProgressState, PromptContext, render_album_table, render_footer,
	render_prompt, render_suggestions,
};

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		let prompt = self.ui.prompt();
		let progress_label = self.progress_label();
		render_prompt(
			frame,
			PromptContext {
				search_input: &self.search_input,
				prompt: &prompt,
				placeholder: Some(&self.ui.placeholder),
				area: layout[0],
				theme: &self.theme,
			},
			ProgressState {
				label: &progress_label,
				in_flight: self.session.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);

		let empty_message = self
			.session
			.shows_no_albums()
			.then_some(self.ui.no_albums.as_str());
		render_album_table(
			frame,
			&mut self.album_state,
			AlbumTableContext {
				albums: self.session.albums(),
				headers: &self.ui.album_headers,
				empty_message,
				area: layout[2],
				theme: &self.theme,
			},
		);

		if !self.session.suggestions().is_empty() {
			render_suggestions(
				frame,
				layout[2],
				self.session.suggestions(),
				self.session.cursor(),
				self.search_input.text(),
				&self.theme,
			);
		}

		render_footer(
			frame,
			layout[3],
			&self.ui.hint,
			self.saved_count(),
			&self.theme,
		);
	}

	fn progress_label(&self) -> String {
		if self.session.is_loading() {
			return self.session.phase().label().to_string();
		}
		match self.session.artist() {
			Some(artist) if self.session.search_executed() => {
				let count = self.session.albums().len();
				let noun = if count == 1 { "album" } else { "albums" };
				format!("{} · {count} {noun}", artist.display_name)
			}
			_ => String::new(),
		}
	}
}
