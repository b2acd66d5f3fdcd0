use covers::session::{MAX_ALBUMS, MAX_SUGGESTIONS};
use covers::ui::style;
use reqwest::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.credentials.client_id.is_empty() {
		return Err(ConfigError::invalid(
			"catalog.client_id",
			"",
			sources.source_for_client_id(),
			"is required; set COVERS__CATALOG__CLIENT_ID or add it to a config file",
		));
	}

	if config.credentials.client_secret.is_empty() {
		return Err(ConfigError::invalid(
			"catalog.client_secret",
			"",
			sources.source_for_client_secret(),
			"is required; set COVERS__CATALOG__CLIENT_SECRET or add it to a config file",
		));
	}

	for (key, value, source) in [
		("catalog.accounts_url", &config.accounts_url, &sources.accounts_url),
		("catalog.api_url", &config.api_url, &sources.api_url),
	] {
		if let Err(err) = Url::parse(value) {
			return Err(ConfigError::invalid(
				key,
				value.as_str(),
				ConfigSources::source_for(source),
				format!("must be an absolute URL ({err})"),
			));
		}
	}

	if config.album_query.market.is_empty() {
		return Err(ConfigError::invalid(
			"catalog.market",
			"",
			ConfigSources::source_for(&sources.market),
			"must not be empty",
		));
	}

	let album_limit = config.album_query.limit as usize;
	if !(1..=MAX_ALBUMS).contains(&album_limit) {
		return Err(ConfigError::invalid(
			"catalog.album_limit",
			album_limit.to_string(),
			ConfigSources::source_for(&sources.album_limit),
			format!("must be between 1 and {MAX_ALBUMS}"),
		));
	}

	let suggestion_limit = config.session.suggestion_limit;
	if !(1..=MAX_SUGGESTIONS).contains(&suggestion_limit) {
		return Err(ConfigError::invalid(
			"catalog.suggestion_limit",
			suggestion_limit.to_string(),
			ConfigSources::source_for(&sources.suggestion_limit),
			format!("must be between 1 and {MAX_SUGGESTIONS}"),
		));
	}

	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.as_str(),
			ConfigSources::source_for(&sources.theme),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}
