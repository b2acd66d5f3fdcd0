use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
		};
		input.textarea.set_cursor_line_style(Style::default());
		input
			.textarea
			.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
		input.set_text(initial);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.lines().next().unwrap_or_default().to_string();
		let style = self.textarea.cursor_style();
		let line_style = self.textarea.cursor_line_style();
		self.textarea = TextArea::new(vec![single_line]);
		self.textarea.set_cursor_style(style);
		self.textarea.set_cursor_line_style(line_style);
		self.textarea.move_cursor(CursorMove::End);
	}

	pub fn clear(&mut self) {
		self.set_text(String::new());
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would break the single line (Enter, Ctrl-m) are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
