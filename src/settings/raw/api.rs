use serde::Deserialize;

use super::super::resolved::SettingSource;

use crate::cli::CliArgs;
use picfind::api::DEFAULT_BASE_URL;

/// `[api]` table: credential, endpoint and request timeout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) access_key: Option<String>,
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	/// Set when the key came from [`ACCESS_KEY_ENV`] rather than the layered sources.
	#[serde(skip)]
	pub(super) key_from_alias: bool,
}

/// Shorthand variable for the access key, below every other source.
pub(crate) const ACCESS_KEY_ENV: &str = "PICFIND_ACCESS_KEY";

pub(super) struct ApiResolution {
	pub(super) access_key: String,
	pub(super) base_url: String,
	pub(super) timeout_secs: Option<u64>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(key) = cli.access_key.clone() {
			self.access_key = Some(key);
		}
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(secs) = cli.timeout_secs {
			self.timeout_secs = Some(secs);
		}
	}

	/// Fall back to the value of [`ACCESS_KEY_ENV`] when no other source set a key.
	pub(super) fn apply_key_alias(&mut self, value: Option<String>) {
		if self.access_key.is_none()
			&& let Some(key) = value.filter(|key| !key.trim().is_empty())
		{
			self.access_key = Some(key);
			self.key_from_alias = true;
		}
	}

	pub(super) fn alias_source(&self) -> Option<SettingSource> {
		self.key_from_alias
			.then_some(SettingSource::Environment(ACCESS_KEY_ENV))
	}

	pub(super) fn finalize(self) -> ApiResolution {
		ApiResolution {
			access_key: self
				.access_key
				.map(|key| key.trim().to_string())
				.unwrap_or_default(),
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout_secs: self.timeout_secs,
		}
	}
}
