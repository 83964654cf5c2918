use std::env;

use anyhow::{Result, anyhow};

use super::raw::{ACCESS_KEY_ENV, RawConfig};
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.apply_key_alias(env::var(ACCESS_KEY_ENV).ok());
	raw.resolve(cli)
}
