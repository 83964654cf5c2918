use serde::Deserialize;

use crate::cli::CliArgs;

/// Startup loading fallback used when the configuration leaves it unset.
pub(super) const DEFAULT_STARTUP_LOADING_TIMEOUT_MS: u64 = 1000;
const DEFAULT_THEME: &str = "meadow";
const DEFAULT_LOG_LEVEL: &str = "info";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) input_title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) show_logs: Option<bool>,
	pub(super) log_level: Option<String>,
	pub(super) startup_loading_timeout_ms: Option<u64>,
}

pub(super) struct UiResolution {
	pub(super) input_title: Option<String>,
	pub(super) initial_query: String,
	pub(super) theme: String,
	pub(super) show_logs: bool,
	pub(super) log_level: String,
	pub(super) startup_loading_timeout_ms: u64,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.input_title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if cli.show_logs {
			self.show_logs = Some(true);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log_level = Some(level);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			input_title: self.input_title.filter(|title| !title.trim().is_empty()),
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self
				.theme
				.map(|theme| theme.trim().to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			show_logs: self.show_logs.unwrap_or(false),
			log_level: self
				.log_level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			startup_loading_timeout_ms: self
				.startup_loading_timeout_ms
				.unwrap_or(DEFAULT_STARTUP_LOADING_TIMEOUT_MS),
		}
	}
}
