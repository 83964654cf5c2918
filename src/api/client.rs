use std::fmt;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::SearchBackend;
use super::error::ApiError;
use super::models::{Collection, Photo, SearchResponse};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

const PHOTOS_ENDPOINT: &str = "search/photos";
const COLLECTIONS_ENDPOINT: &str = "search/collections";
const IMAGE_ENDPOINT: &str = "thumbnail";

/// Only the first page of photo results is ever requested.
const RESULTS_PAGE: &str = "1";

const USER_AGENT: &str = concat!("picfind/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`UnsplashClient`].
#[derive(Clone)]
pub struct ApiConfig {
	base_url: Url,
	access_key: String,
	timeout: Option<Duration>,
}

impl ApiConfig {
	/// Create a configuration without a request timeout.
	pub fn new(base_url: Url, access_key: impl Into<String>) -> Self {
		Self {
			base_url: with_trailing_slash(base_url),
			access_key: access_key.into(),
			timeout: None,
		}
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn access_key(&self) -> &str {
		&self.access_key
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}
}

impl fmt::Debug for ApiConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ApiConfig")
			.field("base_url", &self.base_url.as_str())
			.field("access_key", &"<redacted>")
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	url
}

/// Blocking client for the photo and collection search endpoints.
pub struct UnsplashClient {
	client: Client,
	config: ApiConfig,
}

impl UnsplashClient {
	pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept-Version", HeaderValue::from_static("v1"));

		let client = Client::builder()
			.user_agent(USER_AGENT)
			.default_headers(headers)
			.timeout(config.timeout)
			.build()
			.map_err(ApiError::Client)?;

		Ok(Self { client, config })
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	fn endpoint(&self, endpoint: &'static str) -> Result<Url, ApiError> {
		self.config
			.base_url
			.join(endpoint)
			.map_err(|err| ApiError::Url {
				endpoint,
				reason: err.to_string(),
			})
	}

	fn get_json<T: DeserializeOwned>(
		&self,
		endpoint: &'static str,
		params: &[(&str, &str)],
	) -> Result<T, ApiError> {
		let url = self.endpoint(endpoint)?;
		log::debug!(target: "picfind::api", "GET {url} {:?}", params_for_log(params));

		let response = self
			.client
			.get(url)
			.query(params)
			.query(&[("client_id", self.config.access_key.as_str())])
			.send()
			.map_err(|source| ApiError::Request { endpoint, source })?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				endpoint,
				status: status.as_u16(),
			});
		}

		let body = response
			.text()
			.map_err(|source| ApiError::Request { endpoint, source })?;
		serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
	}
}

fn params_for_log(params: &[(&str, &str)]) -> Vec<String> {
	params
		.iter()
		.map(|(key, value)| format!("{key}={value}"))
		.collect()
}

impl SearchBackend for UnsplashClient {
	fn search_photos(&self, query: &str) -> Result<Vec<Photo>, ApiError> {
		let response: SearchResponse<Photo> = self.get_json(
			PHOTOS_ENDPOINT,
			&[("page", RESULTS_PAGE), ("query", query)],
		)?;
		Ok(response.results)
	}

	fn search_collections(&self, query: &str) -> Result<Vec<Collection>, ApiError> {
		let response: SearchResponse<Collection> =
			self.get_json(COLLECTIONS_ENDPOINT, &[("query", query)])?;
		Ok(response.results)
	}

	fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
		let url = Url::parse(url).map_err(|err| ApiError::Url {
			endpoint: IMAGE_ENDPOINT,
			reason: err.to_string(),
		})?;
		let response = self.client.get(url).send().map_err(|source| ApiError::Request {
			endpoint: IMAGE_ENDPOINT,
			source,
		})?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				endpoint: IMAGE_ENDPOINT,
				status: status.as_u16(),
			});
		}

		let bytes = response.bytes().map_err(|source| ApiError::Request {
			endpoint: IMAGE_ENDPOINT,
			source,
		})?;
		Ok(bytes.to_vec())
	}
}
