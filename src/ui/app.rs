//! State owned by the terminal front-end.
//!
//! [`App`] wraps the [`SearchController`] with everything that only matters
//! for drawing: the text box, table selection, highlighted suggestion, theme
//! and the spinner.

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::input::SearchInput;
use super::style::Theme;
use crate::api::Photo;
use crate::controller::SearchController;
#[cfg(feature = "thumbnails")]
use crate::thumbnails::ThumbnailLoader;

pub const DEFAULT_INPUT_TITLE: &str = "Search";

pub struct App {
	pub(crate) controller: SearchController,
	pub(crate) search_input: SearchInput,
	pub(crate) table_state: TableState,
	/// Index into the suggestion strip; `None` when nothing is highlighted.
	pub(crate) suggestion_cursor: Option<usize>,
	pub(crate) theme: Theme,
	pub(crate) input_title: String,
	pub(crate) show_logs: bool,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) log_state: TuiWidgetState,
	#[cfg(feature = "thumbnails")]
	pub(crate) thumbnails: Option<ThumbnailLoader>,
	/// Thumbnail URL last handed to the loader.
	#[cfg(feature = "thumbnails")]
	requested_thumbnail: Option<String>,
}

impl App {
	pub fn new(controller: SearchController) -> Self {
		let search_input = SearchInput::new(controller.query());
		Self {
			controller,
			search_input,
			table_state: TableState::default(),
			suggestion_cursor: None,
			theme: Theme::default(),
			input_title: DEFAULT_INPUT_TITLE.to_string(),
			show_logs: false,
			throbber_state: ThrobberState::default(),
			log_state: TuiWidgetState::new(),
			#[cfg(feature = "thumbnails")]
			thumbnails: None,
			#[cfg(feature = "thumbnails")]
			requested_thumbnail: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_input_title(&mut self, title: impl Into<String>) {
		self.input_title = title.into();
	}

	pub fn set_show_logs(&mut self, show: bool) {
		self.show_logs = show;
	}

	#[cfg(feature = "thumbnails")]
	pub fn set_thumbnails(&mut self, loader: ThumbnailLoader) {
		self.thumbnails = Some(loader);
	}

	pub fn controller(&self) -> &SearchController {
		&self.controller
	}

	/// Photo under the cursor in the result grid.
	#[must_use]
	pub fn selected_photo(&self) -> Option<&Photo> {
		let photos = &self.controller.state().photos;
		self.table_state
			.selected()
			.and_then(|index| photos.get(index))
	}

	/// Apply finished requests and keep selections within bounds.
	pub(crate) fn pump(&mut self) -> bool {
		let changed = self.controller.pump_responses();
		if changed {
			self.clamp_selections();
			#[cfg(feature = "thumbnails")]
			{
				self.requested_thumbnail = None;
			}
		}
		#[cfg(feature = "thumbnails")]
		self.pump_thumbnails();
		changed
	}

	pub(crate) fn clamp_selections(&mut self) {
		let state = self.controller.state();
		let photo_count = state.photos.len();
		let suggestion_count = state.suggestions.len();

		if photo_count == 0 {
			self.table_state.select(None);
		} else {
			let selected = self.table_state.selected().unwrap_or(0);
			self.table_state.select(Some(selected.min(photo_count - 1)));
		}

		self.suggestion_cursor = match self.suggestion_cursor {
			Some(_) if suggestion_count == 0 => None,
			Some(index) => Some(index.min(suggestion_count - 1)),
			None => None,
		};
	}

	/// Request the selected photo's thumbnail when the selection or the
	/// results changed, then apply finished downloads.
	#[cfg(feature = "thumbnails")]
	fn pump_thumbnails(&mut self) {
		let url = self.selected_photo().map(|photo| photo.thumbnail_url().to_string());
		let Some(loader) = self.thumbnails.as_mut() else {
			return;
		};
		if let Some(url) = url
			&& self.requested_thumbnail.as_deref() != Some(url.as_str())
		{
			loader.request(&url);
			self.requested_thumbnail = Some(url);
		}
		loader.poll();
	}
}
