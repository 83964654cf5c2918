use thiserror::Error;

/// Failure while talking to the photo API.
///
/// The controller treats every variant alike: log it and keep the previous
/// state. Variants only change what the log line says.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("invalid endpoint URL for {endpoint}: {reason}")]
	Url { endpoint: &'static str, reason: String },
	#[error("request to {endpoint} failed: {source}")]
	Request {
		endpoint: &'static str,
		#[source]
		source: reqwest::Error,
	},
	#[error("{endpoint} responded with HTTP {status}")]
	Status { endpoint: &'static str, status: u16 },
	#[error("failed to decode {endpoint} response: {source}")]
	Decode {
		endpoint: &'static str,
		#[source]
		source: serde_json::Error,
	},
	#[error("{0}")]
	Dispatch(String),
	#[error("{0} is not supported by this backend")]
	Unsupported(&'static str),
}
