use serde::Serialize;

use crate::api::Photo;

/// Captures how an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// The user picked a photo rather than cancelling.
	pub accepted: bool,
	/// Query text at exit.
	pub query: String,
	/// The picked photo, when one was selected.
	pub selection: Option<Photo>,
}

impl SearchOutcome {
	pub(crate) fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	pub(crate) fn accepted(query: impl Into<String>, selection: Option<Photo>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection,
		}
	}

	#[must_use]
	pub fn selected_photo(&self) -> Option<&Photo> {
		self.selection.as_ref()
	}
}
