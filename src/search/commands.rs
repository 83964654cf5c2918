use crate::api::{ApiError, Collection, Photo};

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
	Photos,
	Suggestions,
}

impl RequestKind {
	pub(crate) fn thread_name(self, id: u64) -> String {
		match self {
			Self::Photos => format!("photos-{id}"),
			Self::Suggestions => format!("suggest-{id}"),
		}
	}
}

/// A single fetch issued by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	/// Sequence number, monotonic per [`RequestKind`].
	pub id: u64,
	pub kind: RequestKind,
	pub query: String,
}

/// Commands understood by the background dispatcher.
#[derive(Debug)]
pub enum SearchCommand {
	/// Run a request on its own worker thread.
	Query(SearchRequest),
	/// Stop accepting requests. Requests already running still complete.
	Shutdown,
}

/// Outcome of a finished request.
#[derive(Debug)]
pub enum SearchPayload {
	Photos(Result<Vec<Photo>, ApiError>),
	Suggestions(Result<Vec<Collection>, ApiError>),
}

impl SearchPayload {
	pub(crate) fn failed(kind: RequestKind, error: ApiError) -> Self {
		match kind {
			RequestKind::Photos => Self::Photos(Err(error)),
			RequestKind::Suggestions => Self::Suggestions(Err(error)),
		}
	}
}

/// A completed request sent back to the UI thread.
#[derive(Debug)]
pub struct SearchEvent {
	pub id: u64,
	pub query: String,
	pub payload: SearchPayload,
}
