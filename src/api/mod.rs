//! Access to the Unsplash search API.
//!
//! [`SearchBackend`] is the seam the rest of the crate talks to;
//! [`UnsplashClient`] is the blocking HTTP implementation used at runtime.

mod client;
mod error;
mod models;

pub use client::{ApiConfig, DEFAULT_BASE_URL, UnsplashClient};
pub use error::ApiError;
pub use models::{
	Collection, Photo, PhotoLinks, PhotoUrls, PhotoUser, ProfileImage, SearchResponse,
};

/// Source of photos and collection suggestions.
///
/// Implementations block the calling thread; the search dispatcher runs each
/// call on its own worker thread.
pub trait SearchBackend: Send + Sync {
	/// `GET /search/photos` for the first page of results.
	fn search_photos(&self, query: &str) -> Result<Vec<Photo>, ApiError>;

	/// `GET /search/collections`, used for autocomplete suggestions.
	fn search_collections(&self, query: &str) -> Result<Vec<Collection>, ApiError>;

	/// Download raw image bytes from an absolute URL.
	fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, ApiError> {
		Err(ApiError::Unsupported("image download"))
	}
}
