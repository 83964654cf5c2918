use picfind::logging;
use picfind::ui::style;
use reqwest::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.access_key.is_empty() {
		return Err(ConfigError::invalid(
			"api.access_key",
			"",
			sources.source_for_access_key(),
			"an Unsplash access key is required",
		));
	}

	match Url::parse(&config.base_url) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => {}
		Ok(_) => {
			return Err(ConfigError::invalid(
				"api.base_url",
				config.base_url.clone(),
				sources.source_for_base_url(),
				"must use http or https",
			));
		}
		Err(err) => {
			return Err(ConfigError::invalid(
				"api.base_url",
				config.base_url.clone(),
				sources.source_for_base_url(),
				err.to_string(),
			));
		}
	}

	if let Some(secs) = config.timeout_secs
		&& secs == 0
	{
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			secs.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if style::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("expected one of: {}", style::names().join(", ")),
		));
	}

	if logging::parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			"ui.log_level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::{SettingSource, sample};
	use super::*;

	#[test]
	fn sample_configuration_is_valid() {
		validate(&sample(), &ConfigSources::default()).expect("valid");
	}

	#[test]
	fn validation_rejects_missing_access_key() {
		let config = ResolvedConfig {
			access_key: String::new(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "api.access_key");
		assert!(err.to_string().contains("built-in default"));
	}

	#[test]
	fn validation_rejects_non_http_base_url() {
		let config = ResolvedConfig {
			base_url: "ftp://example.com".into(),
			..sample()
		};
		let sources = ConfigSources {
			base_url: Some(SettingSource::CliFlag("--base-url")),
			..ConfigSources::default()
		};
		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.base_url");
		assert!(err.to_string().contains("CLI flag `--base-url`"));

		let config = ResolvedConfig {
			base_url: "not a url".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "api.base_url");
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_secs: Some(0),
			..sample()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::Environment("PICFIND__API__TIMEOUT_SECS")),
			..ConfigSources::default()
		};
		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: "neon".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("meadow"));
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let config = ResolvedConfig {
			log_level: "chatty".into(),
			..sample()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.log_level");
	}
}
