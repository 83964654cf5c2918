//! The search controller: turns user intents into requests and applies the
//! responses to [`SearchState`].

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyCode;

use crate::api::{Collection, SearchBackend};
use crate::search::{
	self, RequestKind, SearchCommand, SearchEvent, SearchPayload, SearchRequest,
};
use crate::state::{RequestTracker, SearchState};

/// Key that submits the current query.
pub const CONFIRM_KEY: KeyCode = KeyCode::Enter;

/// Default for the one-shot loading fallback armed at startup.
pub const DEFAULT_STARTUP_LOADING_TIMEOUT: Duration = Duration::from_millis(1000);

pub struct SearchController {
	state: SearchState,
	commands: Sender<SearchCommand>,
	events: Receiver<SearchEvent>,
	photos: RequestTracker,
	suggestions: RequestTracker,
	startup_deadline: Option<Instant>,
}

impl Drop for SearchController {
	fn drop(&mut self) {
		self.shutdown();
	}
}

impl SearchController {
	/// Spawn a dispatcher for `backend` and wrap it in a controller.
	pub fn new(backend: Arc<dyn SearchBackend>, initial_query: impl Into<String>) -> io::Result<Self> {
		let (commands, events) = search::spawn(backend)?;
		Ok(Self::from_channels(commands, events, initial_query))
	}

	/// Build a controller over existing dispatcher channels.
	pub fn from_channels(
		commands: Sender<SearchCommand>,
		events: Receiver<SearchEvent>,
		initial_query: impl Into<String>,
	) -> Self {
		Self {
			state: SearchState::new(initial_query),
			commands,
			events,
			photos: RequestTracker::new(),
			suggestions: RequestTracker::new(),
			startup_deadline: None,
		}
	}

	/// Arm the startup loading fallback. It fires at most once.
	#[must_use]
	pub fn with_startup_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.startup_deadline = timeout.map(|timeout| Instant::now() + timeout);
		self
	}

	pub fn state(&self) -> &SearchState {
		&self.state
	}

	pub fn query(&self) -> &str {
		&self.state.query
	}

	/// Replace the query and fetch suggestions for it. Every call issues a
	/// request; there is no debounce and no minimum length.
	pub fn update_query(&mut self, text: impl Into<String>) {
		let text = text.into();
		self.state.set_query(text.clone());
		self.fetch_suggestions(&text);
	}

	/// Search photos for the current query.
	pub fn fetch_photos(&mut self) -> u64 {
		self.state.begin_photo_search();
		let id = self.photos.issue();
		let request = SearchRequest {
			id,
			kind: RequestKind::Photos,
			query: self.state.query.clone(),
		};
		self.dispatch(request);
		id
	}

	/// Search collections for `query` to refresh the suggestion strip.
	pub fn fetch_suggestions(&mut self, query: &str) -> u64 {
		let id = self.suggestions.issue();
		let request = SearchRequest {
			id,
			kind: RequestKind::Suggestions,
			query: query.to_string(),
		};
		self.dispatch(request);
		id
	}

	/// Adopt the suggestion's title as the query and search photos for it.
	pub fn select_suggestion(&mut self, suggestion: &Collection) {
		self.state.set_query(suggestion.title.clone());
		self.fetch_photos();
	}

	/// Search photos when `key` is the confirm key. Returns whether it did.
	pub fn submit_on_enter(&mut self, key: KeyCode) -> bool {
		if key != CONFIRM_KEY {
			return false;
		}
		self.fetch_photos();
		true
	}

	/// Apply every response that has arrived. Returns whether anything changed.
	pub fn pump_responses(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.events.try_recv() {
				Ok(event) => {
					self.apply_event(event);
					changed = true;
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	/// Fire the startup fallback once its deadline has passed.
	pub fn tick(&mut self, now: Instant) {
		if let Some(deadline) = self.startup_deadline
			&& now >= deadline
		{
			self.startup_deadline = None;
			self.state.expire_startup_loading();
		}
	}

	/// Whether a photo or suggestion request is still outstanding.
	pub fn has_pending_requests(&self) -> bool {
		self.photos.has_pending() || self.suggestions.has_pending()
	}

	pub fn shutdown(&self) {
		let _ = self.commands.send(SearchCommand::Shutdown);
	}

	pub(crate) fn apply_event(&mut self, event: SearchEvent) {
		let SearchEvent { id, query, payload } = event;
		match payload {
			SearchPayload::Photos(result) => {
				let latest = self.photos.is_latest(id);
				let current = self.photos.settle(id);
				match result {
					Ok(photos) if current => {
						log::info!(
							target: "picfind::search",
							"{} photos for {query:?}",
							photos.len()
						);
						self.state.apply_photos(photos);
					}
					Ok(_) => {
						log::debug!(target: "picfind::search", "discarding stale photos #{id} for {query:?}");
					}
					Err(err) => {
						log::error!(target: "picfind::search", "Error fetching images: {err}");
						if current {
							self.state.apply_photo_failure(&err);
						}
					}
				}
				if latest {
					self.state.finish_photo_search();
				}
			}
			SearchPayload::Suggestions(result) => {
				let current = self.suggestions.settle(id);
				match result {
					Ok(collections) if current => {
						self.state.apply_suggestions(&query, collections);
					}
					Ok(_) => {
						log::debug!(target: "picfind::search", "discarding stale suggestions #{id} for {query:?}");
					}
					Err(err) => {
						log::error!(target: "picfind::search", "Error fetching suggestions: {err}");
						if current {
							self.state.apply_suggestion_failure(&err);
						}
					}
				}
			}
		}
	}

	fn dispatch(&mut self, request: SearchRequest) {
		log::debug!(
			target: "picfind::search",
			"dispatch {:?} #{} for {:?}",
			request.kind,
			request.id,
			request.query
		);
		if let Err(err) = self.commands.send(SearchCommand::Query(request)) {
			log::error!(target: "picfind::search", "search dispatcher is gone: {err}");
			if let SearchCommand::Query(request) = err.0
				&& request.kind == RequestKind::Photos
			{
				self.photos.settle(request.id);
				self.state.finish_photo_search();
			}
		}
	}
}
