use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::commands::{RequestKind, SearchCommand, SearchEvent, SearchPayload, SearchRequest};
use crate::api::{ApiError, SearchBackend};

/// Launch the dispatcher thread and return its command and event channels.
///
/// Every request runs on a dedicated thread, so slow requests never block
/// newer ones and events arrive in completion order.
pub fn spawn(
	backend: Arc<dyn SearchBackend>,
) -> io::Result<(Sender<SearchCommand>, Receiver<SearchEvent>)> {
	let (command_tx, command_rx) = mpsc::channel();
	let (event_tx, event_rx) = mpsc::channel();

	thread::Builder::new()
		.name("search-dispatch".into())
		.spawn(move || dispatch_loop(backend, command_rx, event_tx))?;

	Ok((command_tx, event_rx))
}

fn dispatch_loop(
	backend: Arc<dyn SearchBackend>,
	command_rx: Receiver<SearchCommand>,
	event_tx: Sender<SearchEvent>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			SearchCommand::Query(request) => dispatch(&backend, request, &event_tx),
			SearchCommand::Shutdown => break,
		}
	}
	log::debug!(target: "picfind::search", "dispatcher stopped");
}

fn dispatch(backend: &Arc<dyn SearchBackend>, request: SearchRequest, event_tx: &Sender<SearchEvent>) {
	let SearchRequest { id, kind, query } = request;
	let name = kind.thread_name(id);
	let worker_backend = Arc::clone(backend);
	let worker_tx = event_tx.clone();
	let worker_query = query.clone();

	let spawned = thread::Builder::new().name(name).spawn(move || {
		let payload = execute(worker_backend.as_ref(), kind, &worker_query);
		// The UI may already be gone; nothing left to report to.
		let _ = worker_tx.send(SearchEvent {
			id,
			query: worker_query,
			payload,
		});
	});

	if let Err(err) = spawned {
		log::error!(target: "picfind::search", "failed to start request {id}: {err}");
		let _ = event_tx.send(SearchEvent {
			id,
			query,
			payload: SearchPayload::failed(
				kind,
				ApiError::Dispatch(format!("failed to start request thread: {err}")),
			),
		});
	}
}

fn execute(backend: &dyn SearchBackend, kind: RequestKind, query: &str) -> SearchPayload {
	match kind {
		RequestKind::Photos => SearchPayload::Photos(backend.search_photos(query)),
		RequestKind::Suggestions => SearchPayload::Suggestions(backend.search_collections(query)),
	}
}
