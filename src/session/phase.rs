use serde::Serialize;

/// Coarse stage of the search interaction.
///
/// Transitions are driven only by user input and catalog responses; there is
/// no terminal state and editing the query restarts the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
	#[default]
	Idle,
	Suggesting,
	Searching,
	Results,
}

impl Phase {
	/// The query text changed.
	#[must_use]
	pub fn after_edit(self, has_query: bool) -> Self {
		if has_query { Self::Suggesting } else { Self::Idle }
	}

	/// An artist was picked and its albums requested.
	#[must_use]
	pub fn after_submit(self) -> Self {
		Self::Searching
	}

	/// The album listing arrived, possibly empty.
	#[must_use]
	pub fn after_albums(self) -> Self {
		Self::Results
	}

	/// The album listing failed; fall back to whatever was on screen before.
	#[must_use]
	pub fn after_failed_search(self, search_executed: bool) -> Self {
		match self {
			Self::Searching if search_executed => Self::Results,
			Self::Searching => Self::Idle,
			other => other,
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Suggesting => "suggesting",
			Self::Searching => "searching",
			Self::Results => "results",
		}
	}
}
