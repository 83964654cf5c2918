use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod ui;

pub(super) use api::ACCESS_KEY_ENV;
use api::ApiSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Use the value of `PICFIND_ACCESS_KEY` when nothing else supplied a key.
	/// Call after the CLI overrides.
	pub(super) fn apply_key_alias(&mut self, value: Option<String>) {
		self.api.apply_key_alias(value);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			access_key: self.api.alias_source().or_else(|| {
				detect_source(
					cli.access_key.is_some(),
					self.api.access_key.is_some(),
					"PICFIND__API__ACCESS_KEY",
					"--access-key",
					"api.access_key",
				)
			}),
			base_url: detect_source(
				cli.base_url.is_some(),
				self.api.base_url.is_some(),
				"PICFIND__API__BASE_URL",
				"--base-url",
				"api.base_url",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.api.timeout_secs.is_some(),
				"PICFIND__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"PICFIND__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.ui.log_level.is_some(),
				"PICFIND__UI__LOG_LEVEL",
				"--log-level",
				"ui.log_level",
			),
		};

		let api = self.api.finalize();
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			access_key: api.access_key,
			base_url: api.base_url,
			timeout_secs: api.timeout_secs,
			initial_query: ui.initial_query,
			input_title: ui.input_title,
			theme: ui.theme,
			show_logs: ui.show_logs,
			log_level: ui.log_level,
			startup_loading_timeout_ms: ui.startup_loading_timeout_ms,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
