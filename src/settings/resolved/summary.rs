use covers::session::StalePolicy;

use super::super::util::display_path;
use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Client ID: {}", config.credentials.client_id);
	println!("  Client secret: (set)");
	println!("  Accounts URL: {}", config.accounts_url);
	println!("  API URL: {}", config.api_url);
	println!("  Market: {}", config.album_query.market);
	println!("  Release groups: {}", config.album_query.include_groups);
	println!("  Album limit: {}", config.album_query.limit);
	println!("  Suggestion limit: {}", config.session.suggestion_limit);
	println!(
		"  Discard stale responses: {}",
		bool_to_word(config.session.stale_policy == StalePolicy::Discard)
	);
	println!(
		"  Download directory: {}",
		display_path(&config.download_dir)
	);
	println!("  Download mode: {}", config.download_mode.as_str());
	if let Some(agent) = &config.user_agent {
		println!("  User agent: {agent}");
	}
	println!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	println!("  Prompt title: {}", config.input_title);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::super::sample_config;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let mut config = sample_config();
		config.user_agent = Some("iPhone".into());
		config.initial_query = "foo".into();
		config.theme = Some("light".into());

		print_summary(&config);
	}
}
