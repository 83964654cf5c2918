use std::time::Duration;

use anyhow::{Context, Result};
use log::LevelFilter;
use picfind::ApiConfig;
use picfind::logging;
use reqwest::Url;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub access_key: String,
	pub base_url: String,
	pub timeout_secs: Option<u64>,
	pub initial_query: String,
	pub input_title: Option<String>,
	pub theme: String,
	pub show_logs: bool,
	pub log_level: String,
	/// Zero disables the startup loading fallback.
	pub startup_loading_timeout_ms: u64,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Connection settings for the HTTP client.
	pub fn api_config(&self) -> Result<ApiConfig> {
		let base_url = Url::parse(&self.base_url)
			.with_context(|| format!("invalid API base URL '{}'", self.base_url))?;
		Ok(ApiConfig::new(base_url, self.access_key.clone())
			.with_timeout(self.timeout_secs.map(Duration::from_secs)))
	}

	pub fn log_level(&self) -> LevelFilter {
		logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
	}

	pub fn startup_loading_timeout(&self) -> Option<Duration> {
		(self.startup_loading_timeout_ms > 0)
			.then(|| Duration::from_millis(self.startup_loading_timeout_ms))
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		access_key: "abcdef123456".into(),
		base_url: "https://api.unsplash.com".into(),
		timeout_secs: None,
		initial_query: String::new(),
		input_title: None,
		theme: "meadow".into(),
		show_logs: false,
		log_level: "info".into(),
		startup_loading_timeout_ms: 1000,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_config_carries_timeout_and_key() {
		let config = ResolvedConfig {
			timeout_secs: Some(4),
			..sample()
		};
		let api = config.api_config().expect("api config");
		assert_eq!(api.access_key(), "abcdef123456");
		assert_eq!(api.timeout(), Some(Duration::from_secs(4)));
		assert_eq!(api.base_url().host_str(), Some("api.unsplash.com"));
	}

	#[test]
	fn zero_startup_timeout_disables_fallback() {
		let config = ResolvedConfig {
			startup_loading_timeout_ms: 0,
			..sample()
		};
		assert_eq!(config.startup_loading_timeout(), None);
		assert_eq!(
			sample().startup_loading_timeout(),
			Some(Duration::from_millis(1000))
		);
	}

	#[test]
	fn log_level_falls_back_to_info() {
		let config = ResolvedConfig {
			log_level: "debug".into(),
			..sample()
		};
		assert_eq!(config.log_level(), LevelFilter::Debug);
		let config = ResolvedConfig {
			log_level: "chatty".into(),
			..sample()
		};
		assert_eq!(config.log_level(), LevelFilter::Info);
	}
}
