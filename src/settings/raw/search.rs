use covers::session::StalePolicy;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Response ordering options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) discard_stale_responses: Option<bool>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.allow_stale {
			self.discard_stale_responses = Some(false);
		}
	}

	pub(super) fn stale_policy(&self) -> StalePolicy {
		match self.discard_stale_responses {
			Some(false) => StalePolicy::LastArrivalWins,
			_ => StalePolicy::Discard,
		}
	}
}
