//! Lazy thumbnail preview for the selected photo.
//!
//! Only the photo under the cursor is ever downloaded. Images are decoded and
//! pre-encoded for the terminal's graphics protocol on the worker thread, so
//! drawing a ready thumbnail never blocks the UI.

mod cache;
mod worker;

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::{Arc, OnceLock};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::Protocol;
use ratatui_image::{Image, Resize};

use crate::api::SearchBackend;
use worker::{ThumbnailCommand, ThumbnailResult};

static PICKER: OnceLock<Picker> = OnceLock::new();

const FALLBACK_FONT_SIZE: (u16, u16) = (8, 16);

const ENCODE_AREA: Rect = Rect {
	x: 0,
	y: 0,
	width: 40,
	height: 20,
};

/// Probe the terminal for a graphics protocol.
///
/// Must run after the terminal enters the alternate screen and before the
/// input thread starts reading events. Later calls are no-ops.
pub fn initialize_graphics() {
	PICKER.get_or_init(|| match Picker::from_query_stdio() {
		Ok(picker) => picker,
		Err(err) => {
			log::warn!(
				target: "picfind::thumbnails",
				"graphics protocol detection failed ({err:?}); using half blocks"
			);
			Picker::from_fontsize(FALLBACK_FONT_SIZE)
		}
	});
}

fn picker() -> &'static Picker {
	PICKER.get_or_init(|| Picker::from_fontsize(FALLBACK_FONT_SIZE))
}

/// A decoded thumbnail encoded for the current terminal.
#[derive(Clone)]
pub struct Thumbnail {
	protocol: Protocol,
	dimensions: (u32, u32),
}

impl std::fmt::Debug for Thumbnail {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Thumbnail")
			.field("dimensions", &self.dimensions)
			.finish_non_exhaustive()
	}
}

impl Thumbnail {
	fn decode(bytes: Vec<u8>) -> Result<Self, String> {
		let image = image::load_from_memory(&bytes).map_err(|err| err.to_string())?;
		let dimensions = (image.width(), image.height());
		let protocol = picker()
			.new_protocol(image, ENCODE_AREA, Resize::Fit(None))
			.map_err(|err| format!("{err:?}"))?;
		Ok(Self {
			protocol,
			dimensions,
		})
	}

	/// Draw the thumbnail centered in `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		let centered = center_rect(self.protocol.area(), area);
		frame.render_widget(Image::new(&self.protocol), centered);
	}

	#[must_use]
	pub fn dimensions(&self) -> (u32, u32) {
		self.dimensions
	}
}

fn center_rect(inner: Rect, outer: Rect) -> Rect {
	Rect {
		x: outer.x + outer.width.saturating_sub(inner.width) / 2,
		y: outer.y + outer.height.saturating_sub(inner.height) / 2,
		width: inner.width.min(outer.width),
		height: inner.height.min(outer.height),
	}
}

/// Load state of the thumbnail for one URL.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
	Loading,
	Ready(Thumbnail),
	Failed(String),
}

/// UI-side handle to the thumbnail worker.
pub struct ThumbnailLoader {
	commands: Sender<ThumbnailCommand>,
	results: Receiver<ThumbnailResult<Thumbnail>>,
	next_id: u64,
	current: Option<(u64, String)>,
	state: ThumbnailState,
}

impl ThumbnailLoader {
	pub fn new(backend: Arc<dyn SearchBackend>) -> io::Result<Self> {
		let (commands, results) = worker::spawn(backend, Thumbnail::decode)?;
		Ok(Self {
			commands,
			results,
			next_id: 0,
			current: None,
			state: ThumbnailState::Loading,
		})
	}

	/// Ask for `url` unless it is already the current request. A failed
	/// current request is sent again.
	pub fn request(&mut self, url: &str) {
		let pending_or_ready = !matches!(self.state, ThumbnailState::Failed(_));
		if pending_or_ready
			&& self
				.current
				.as_ref()
				.is_some_and(|(_, current)| current == url)
		{
			return;
		}
		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		self.current = Some((id, url.to_string()));
		self.state = ThumbnailState::Loading;
		let _ = self.commands.send(ThumbnailCommand::Load {
			id,
			url: url.to_string(),
		});
	}

	/// Apply finished downloads. Results for superseded requests are dropped.
	pub fn poll(&mut self) {
		loop {
			match self.results.try_recv() {
				Ok(ThumbnailResult { id, url, result }) => {
					let Some((current_id, _)) = &self.current else {
						continue;
					};
					if *current_id != id {
						log::debug!(target: "picfind::thumbnails", "dropping stale thumbnail {url}");
						continue;
					}
					self.state = match result {
						Ok(thumbnail) => ThumbnailState::Ready(thumbnail),
						Err(err) => ThumbnailState::Failed(err),
					};
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// State of the thumbnail for `url`, if that is what was last requested.
	#[must_use]
	pub fn state_for(&self, url: &str) -> Option<&ThumbnailState> {
		match &self.current {
			Some((_, current)) if current == url => Some(&self.state),
			_ => None,
		}
	}
}

impl Drop for ThumbnailLoader {
	fn drop(&mut self) {
		let _ = self.commands.send(ThumbnailCommand::Shutdown);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::time::{Duration, Instant};

	use crate::api::{ApiError, Collection, Photo};

	struct Offline;

	impl SearchBackend for Offline {
		fn search_photos(&self, _query: &str) -> Result<Vec<Photo>, ApiError> {
			Ok(Vec::new())
		}

		fn search_collections(&self, _query: &str) -> Result<Vec<Collection>, ApiError> {
			Ok(Vec::new())
		}

		fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, ApiError> {
			Err(ApiError::Dispatch("offline".into()))
		}
	}

	fn wait_for_failure(loader: &mut ThumbnailLoader, url: &str) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while Instant::now() < deadline {
			loader.poll();
			if matches!(loader.state_for(url), Some(ThumbnailState::Failed(_))) {
				return;
			}
			std::thread::sleep(Duration::from_millis(5));
		}
		panic!("thumbnail for {url} never failed");
	}

	#[test]
	fn same_url_is_not_requested_twice_while_loading() {
		let mut loader = ThumbnailLoader::new(Arc::new(Offline)).expect("loader");
		loader.request("https://img.example/a");
		loader.request("https://img.example/a");
		assert_eq!(loader.next_id, 1);
	}

	#[test]
	fn failed_thumbnail_is_requested_again() {
		let url = "https://img.example/a";
		let mut loader = ThumbnailLoader::new(Arc::new(Offline)).expect("loader");
		loader.request(url);
		wait_for_failure(&mut loader, url);

		loader.request(url);
		assert_eq!(loader.next_id, 2);
		assert!(matches!(loader.state_for(url), Some(ThumbnailState::Loading)));
	}

	#[test]
	fn center_rect_clamps_oversized_inner() {
		let centered = center_rect(Rect::new(0, 0, 30, 20), Rect::new(0, 0, 10, 10));
		assert_eq!(centered, Rect::new(0, 0, 10, 10));
	}

	#[test]
	fn center_rect_centers_smaller_inner() {
		let centered = center_rect(Rect::new(0, 0, 4, 2), Rect::new(10, 10, 8, 6));
		assert_eq!(centered, Rect::new(12, 12, 4, 2));
	}
}
