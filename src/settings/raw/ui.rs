use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_TITLE: &str = "Artist";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) input_title: String,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			input_title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self
				.theme
				.map(|theme| theme.trim().to_string())
				.filter(|theme| !theme.is_empty()),
		}
	}
}
