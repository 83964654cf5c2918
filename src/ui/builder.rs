use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use super::style::{self, Theme};
use super::{App, SearchOutcome};
use crate::api::SearchBackend;
use crate::controller::{DEFAULT_STARTUP_LOADING_TIMEOUT, SearchController};
#[cfg(feature = "thumbnails")]
use crate::thumbnails::ThumbnailLoader;

/// Builder for the interactive image search.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	initial_query: String,
	input_title: Option<String>,
	theme: Option<Theme>,
	show_logs: bool,
	startup_loading_timeout: Option<Duration>,
}

impl SearchUi {
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			initial_query: String::new(),
			input_title: None,
			theme: None,
			show_logs: false,
			startup_loading_timeout: Some(DEFAULT_STARTUP_LOADING_TIMEOUT),
		}
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	/// Use a built-in theme. Unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!(target: "picfind::ui", "unknown theme {name:?}"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_show_logs(mut self, show: bool) -> Self {
		self.show_logs = show;
		self
	}

	/// One-shot fallback that clears the loading flag after startup. `None`
	/// disables it.
	pub fn with_startup_loading_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.startup_loading_timeout = timeout;
		self
	}

	/// Spawn the workers and assemble the [`App`] without touching the terminal.
	pub fn into_app(self) -> Result<App> {
		let controller = SearchController::new(Arc::clone(&self.backend), self.initial_query)?
			.with_startup_timeout(self.startup_loading_timeout);
		let mut app = App::new(controller);
		if let Some(title) = self.input_title {
			app.set_input_title(title);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_show_logs(self.show_logs);
		#[cfg(feature = "thumbnails")]
		app.set_thumbnails(ThumbnailLoader::new(self.backend)?);
		Ok(app)
	}

	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.into_app()?;
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{ApiError, Collection, Photo};
	use crate::ui::style::theme::SLATE;

	struct Offline;

	impl SearchBackend for Offline {
		fn search_photos(&self, _query: &str) -> Result<Vec<Photo>, ApiError> {
			Ok(Vec::new())
		}

		fn search_collections(&self, _query: &str) -> Result<Vec<Collection>, ApiError> {
			Ok(Vec::new())
		}
	}

	#[test]
	fn builder_options_reach_the_app() {
		let app = SearchUi::new(Arc::new(Offline))
			.with_initial_query("sunset")
			.with_input_title("Image Search")
			.with_theme_name("slate")
			.with_show_logs(true)
			.into_app()
			.expect("app");

		assert_eq!(app.controller().query(), "sunset");
		assert_eq!(app.search_input.text(), "sunset");
		assert_eq!(app.input_title, "Image Search");
		assert_eq!(app.theme, SLATE);
		assert!(app.show_logs);
	}

	#[test]
	fn unknown_theme_keeps_default() {
		let app = SearchUi::new(Arc::new(Offline))
			.with_theme_name("neon")
			.into_app()
			.expect("app");
		assert_eq!(app.theme, Theme::default());
	}
}
