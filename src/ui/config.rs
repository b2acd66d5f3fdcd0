/// Labels the UI draws around the search and result panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Shown in front of the query input.
	pub title: String,
	/// Dimmed text in the empty query input.
	pub placeholder: String,
	/// Key hints in the footer.
	pub hint: String,
	/// Replaces the album table when a search returned nothing.
	pub no_albums: String,
	/// Column headings of the album table.
	pub album_headers: Vec<String>,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Artist".to_string(),
			placeholder: "Type an artist name".to_string(),
			hint: "↑↓ select • Enter search/save • Ctrl-o open • Ctrl-u clear • Esc quit"
				.to_string(),
			no_albums: "No albums found".to_string(),
			album_headers: ["Album", "Released", "Tracks", "Cover"]
				.into_iter()
				.map(String::from)
				.collect(),
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Prompt text rendered before the input, e.g. `Artist › `.
	#[must_use]
	pub fn prompt(&self) -> String {
		let title = self.title.trim();
		if title.is_empty() {
			"› ".to_string()
		} else {
			format!("{title} › ")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prompt_includes_the_title() {
		assert_eq!(UiConfig::default().prompt(), "Artist › ");
		assert_eq!(UiConfig::default().with_title("  ").prompt(), "› ");
	}

	#[test]
	fn album_table_has_four_columns() {
		assert_eq!(UiConfig::default().album_headers.len(), 4);
	}
}
