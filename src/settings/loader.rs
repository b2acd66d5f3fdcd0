use anyhow::{Result, anyhow};
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining a `.env` file, config files, environment
/// variables and CLI arguments.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	if let Ok(path) = dotenvy::dotenv() {
		debug!(path = %path.display(), "loaded environment file");
	}
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
