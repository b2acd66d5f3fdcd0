use ratatui::style::{Color, Style};

/// Colours for every element the UI draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	/// Style of the suggestion overlay frame.
	#[must_use]
	pub fn overlay_style(&self) -> Style {
		Style::new().fg(self.header_fg()).bg(self.header_bg())
	}
}

/// A built-in theme and the names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, aliases: &'static [&'static str], theme: Theme) -> Self {
		Self {
			name,
			aliases,
			theme,
		}
	}

	pub(super) fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
