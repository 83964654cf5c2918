//! Background thumbnail fetcher.
//!
//! Requests queue up while the user scrolls; the worker skips straight to the
//! newest one before touching the network.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::cache::{CACHE_CAPACITY, ThumbnailCache};
use crate::api::SearchBackend;

pub(crate) enum ThumbnailCommand {
	Load { id: u64, url: String },
	Shutdown,
}

pub(crate) struct ThumbnailResult<V> {
	pub id: u64,
	pub url: String,
	pub result: Result<V, String>,
}

/// Spawn the fetch worker. `decode` turns downloaded bytes into `V`.
pub(crate) fn spawn<V, F>(
	backend: Arc<dyn SearchBackend>,
	decode: F,
) -> io::Result<(Sender<ThumbnailCommand>, Receiver<ThumbnailResult<V>>)>
where
	V: Clone + Send + 'static,
	F: Fn(Vec<u8>) -> Result<V, String> + Send + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::Builder::new()
		.name("thumbnail-worker".into())
		.spawn(move || worker_loop(backend, decode, command_rx, result_tx))?;

	Ok((command_tx, result_rx))
}

fn worker_loop<V, F>(
	backend: Arc<dyn SearchBackend>,
	decode: F,
	command_rx: Receiver<ThumbnailCommand>,
	result_tx: Sender<ThumbnailResult<V>>,
) where
	V: Clone,
	F: Fn(Vec<u8>) -> Result<V, String>,
{
	let mut cache: ThumbnailCache<V> = ThumbnailCache::new(CACHE_CAPACITY);

	while let Ok(command) = command_rx.recv() {
		let (id, url) = match command {
			ThumbnailCommand::Load { id, url } => match drain_to_latest(&command_rx, id, url) {
				Some(latest) => latest,
				None => break,
			},
			ThumbnailCommand::Shutdown => break,
		};

		let result = match cache.get(&url) {
			Some(cached) => Ok(cached),
			None => {
				let fetched = backend
					.fetch_image(&url)
					.map_err(|err| err.to_string())
					.and_then(&decode);
				if let Err(err) = &fetched {
					log::warn!(target: "picfind::thumbnails", "thumbnail {url} failed: {err}");
				}
				cache.remember(&url, &fetched);
				fetched
			}
		};

		if result_tx.send(ThumbnailResult { id, url, result }).is_err() {
			break;
		}
	}
}

/// Return the newest queued request, or `None` if a shutdown was queued.
fn drain_to_latest(
	rx: &Receiver<ThumbnailCommand>,
	mut id: u64,
	mut url: String,
) -> Option<(u64, String)> {
	while let Ok(command) = rx.try_recv() {
		match command {
			ThumbnailCommand::Load {
				id: newer_id,
				url: newer_url,
			} => {
				id = newer_id;
				url = newer_url;
			}
			ThumbnailCommand::Shutdown => return None,
		}
	}
	Some((id, url))
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use super::*;
	use crate::api::{ApiError, Collection, Photo};

	#[derive(Default)]
	struct ImageHost {
		fetched: Mutex<Vec<String>>,
	}

	impl SearchBackend for ImageHost {
		fn search_photos(&self, _query: &str) -> Result<Vec<Photo>, ApiError> {
			Ok(Vec::new())
		}

		fn search_collections(&self, _query: &str) -> Result<Vec<Collection>, ApiError> {
			Ok(Vec::new())
		}

		fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
			let attempts = {
				let mut fetched = self.fetched.lock().expect("lock");
				fetched.push(url.to_string());
				fetched.iter().filter(|seen| seen.as_str() == url).count()
			};
			if url.ends_with("flaky") && attempts == 1 {
				return Err(ApiError::Dispatch("connection reset".into()));
			}
			if url.ends_with("missing") {
				return Err(ApiError::Status {
					endpoint: "thumbnail",
					status: 404,
				});
			}
			Ok(url.as_bytes().to_vec())
		}
	}

	fn byte_len(bytes: Vec<u8>) -> Result<usize, String> {
		Ok(bytes.len())
	}

	#[test]
	fn queued_requests_collapse_to_the_newest() {
		let (tx, rx) = mpsc::channel();
		tx.send(ThumbnailCommand::Load {
			id: 2,
			url: "b".into(),
		})
		.expect("send");
		tx.send(ThumbnailCommand::Load {
			id: 3,
			url: "c".into(),
		})
		.expect("send");

		assert_eq!(drain_to_latest(&rx, 1, "a".into()), Some((3, String::from("c"))));
	}

	#[test]
	fn queued_shutdown_wins() {
		let (tx, rx) = mpsc::channel();
		tx.send(ThumbnailCommand::Shutdown).expect("send");
		assert_eq!(drain_to_latest(&rx, 1, "a".into()), None);
	}

	#[test]
	fn repeated_urls_are_served_from_cache() {
		let host = Arc::new(ImageHost::default());
		let (tx, rx) = spawn(host.clone(), byte_len).expect("spawn");

		for id in 1..=2 {
			tx.send(ThumbnailCommand::Load {
				id,
				url: "https://img.example/abc".into(),
			})
			.expect("send");
			let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
			assert_eq!(result.result, Ok("https://img.example/abc".len()));
		}
		tx.send(ThumbnailCommand::Shutdown).expect("send");

		assert_eq!(host.fetched.lock().expect("lock").len(), 1);
	}

	#[test]
	fn fetch_failures_are_reported() {
		let host = Arc::new(ImageHost::default());
		let (tx, rx) = spawn(host, byte_len).expect("spawn");
		tx.send(ThumbnailCommand::Load {
			id: 7,
			url: "https://img.example/missing".into(),
		})
		.expect("send");

		let result = rx.recv_timeout(Duration::from_secs(2)).expect("result");
		assert_eq!(result.id, 7);
		assert!(result.result.is_err());
	}

	#[test]
	fn failed_downloads_are_fetched_again() {
		let host = Arc::new(ImageHost::default());
		let (tx, rx) = spawn(host.clone(), byte_len).expect("spawn");
		let url = "https://img.example/flaky";

		tx.send(ThumbnailCommand::Load {
			id: 1,
			url: url.into(),
		})
		.expect("send");
		let first = rx.recv_timeout(Duration::from_secs(2)).expect("first result");
		assert!(first.result.is_err());

		tx.send(ThumbnailCommand::Load {
			id: 2,
			url: url.into(),
		})
		.expect("send");
		let second = rx.recv_timeout(Duration::from_secs(2)).expect("second result");
		assert_eq!(second.result, Ok(url.len()));
		tx.send(ThumbnailCommand::Shutdown).expect("send");

		assert_eq!(host.fetched.lock().expect("lock").len(), 2);
	}
}
