//! Ephemeral search state and the transitions applied to it.
//!
//! Every mutation goes through a method on [`SearchState`]; none of them do
//! I/O, which keeps the controller's behaviour testable without a network.

mod tracker;

pub use tracker::RequestTracker;

use crate::api::{ApiError, Collection, Photo};
use crate::search::filter_suggestions;

/// Message shown when a completed search produced no photos.
pub const NO_DATA_MESSAGE: &str = "There is no data related to this keyword.";

/// Message shown in the result area while a photo search is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
	/// Text currently in the search box.
	pub query: String,
	/// Result grid, replaced wholesale by each successful photo search.
	pub photos: Vec<Photo>,
	/// Suggestion strip, replaced wholesale by each collection search.
	pub suggestions: Vec<Collection>,
	/// A photo search is in flight.
	pub loading: bool,
	/// The last completed photo search returned zero photos.
	pub no_data: bool,
	/// Most recent request failure, cleared by the next applied success.
	pub last_error: Option<String>,
}

impl SearchState {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Self::default()
		}
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn begin_photo_search(&mut self) {
		self.loading = true;
	}

	pub fn apply_photos(&mut self, photos: Vec<Photo>) {
		self.no_data = photos.is_empty();
		self.photos = photos;
		self.suggestions.clear();
		self.last_error = None;
	}

	pub fn apply_photo_failure(&mut self, error: &ApiError) {
		self.last_error = Some(format!("Photo search failed: {error}"));
	}

	pub fn finish_photo_search(&mut self) {
		self.loading = false;
	}

	pub fn apply_suggestions(&mut self, query: &str, collections: Vec<Collection>) {
		self.suggestions = filter_suggestions(query, collections);
		self.last_error = None;
	}

	pub fn apply_suggestion_failure(&mut self, error: &ApiError) {
		self.last_error = Some(format!("Suggestions failed: {error}"));
	}

	/// Clear `loading` when the startup fallback timer fires.
	pub fn expire_startup_loading(&mut self) {
		self.loading = false;
	}

	/// Whether the "no data" message replaces the result grid.
	#[must_use]
	pub fn shows_no_data(&self) -> bool {
		!self.loading && self.photos.is_empty() && self.no_data
	}
}
