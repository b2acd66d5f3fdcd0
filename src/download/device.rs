use std::env;

use serde::Deserialize;

const MOBILE_MARKERS: [&str; 4] = ["android", "iphone", "ipad", "ipod"];
const USER_AGENT_ENV: &str = "COVERS_USER_AGENT";

/// How a cover should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
	/// Decide from the user agent and the host platform.
	#[default]
	Auto,
	/// Always fetch and save the image.
	Save,
	/// Always hand the URL to the system opener.
	Open,
}

impl DownloadMode {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Auto => "auto",
			Self::Save => "save",
			Self::Open => "open",
		}
	}
}

/// Device family; decides between saving bytes and opening the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
	Desktop,
	/// Touch devices where programmatic saving is unreliable.
	Mobile,
}

impl DeviceClass {
	/// Classify a user-agent string (`Android|iPhone|iPad|iPod`, any case).
	#[must_use]
	pub fn from_user_agent(user_agent: &str) -> Self {
		let lowered = user_agent.to_ascii_lowercase();
		if MOBILE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
			Self::Mobile
		} else {
			Self::Desktop
		}
	}

	/// Resolve the device class for a configured mode.
	///
	/// `Auto` prefers an explicit user agent (argument, then
	/// `COVERS_USER_AGENT`) and otherwise looks at the host platform.
	#[must_use]
	pub fn resolve(mode: DownloadMode, user_agent: Option<&str>) -> Self {
		match mode {
			DownloadMode::Save => Self::Desktop,
			DownloadMode::Open => Self::Mobile,
			DownloadMode::Auto => {
				let from_env = env::var(USER_AGENT_ENV).ok();
				match user_agent.or(from_env.as_deref()).map(str::trim) {
					Some(agent) if !agent.is_empty() => Self::from_user_agent(agent),
					_ if host_is_mobile() => Self::Mobile,
					_ => Self::Desktop,
				}
			}
		}
	}

	#[must_use]
	pub fn is_mobile(self) -> bool {
		self == Self::Mobile
	}
}

fn host_is_mobile() -> bool {
	cfg!(any(target_os = "android", target_os = "ios")) || env::var_os("TERMUX_VERSION").is_some()
}
