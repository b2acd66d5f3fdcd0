use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	/// Built-in value; nothing was configured.
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => f.write_str("built-in default"),
		}
	}
}

/// Where each validated setting was taken from; `None` means unset.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) client_id: Option<SettingSource>,
	pub(crate) client_secret: Option<SettingSource>,
	pub(crate) accounts_url: Option<SettingSource>,
	pub(crate) api_url: Option<SettingSource>,
	pub(crate) market: Option<SettingSource>,
	pub(crate) album_limit: Option<SettingSource>,
	pub(crate) suggestion_limit: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	/// Credentials have no default, so an unset value points at the key.
	pub(crate) fn source_for_client_id(&self) -> SettingSource {
		self.client_id
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.client_id"))
	}

	pub(crate) fn source_for_client_secret(&self) -> SettingSource {
		self.client_secret
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.client_secret"))
	}

	pub(crate) fn source_for(source: &Option<SettingSource>) -> SettingSource {
		source.clone().unwrap_or(SettingSource::Default)
	}
}
