use std::sync::Arc;

use anyhow::Result;
use picfind::{SearchBackend, SearchOutcome, SearchUi, UnsplashClient};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let client = UnsplashClient::new(config.api_config()?)?;
		log::info!(
			target: "picfind::workflow",
			"using API endpoint {}",
			client.config().base_url()
		);
		let startup_timeout = config.startup_loading_timeout();

		let ResolvedConfig {
			initial_query,
			input_title,
			theme,
			show_logs,
			..
		} = config;

		let builder = Self::new(Arc::new(client))
			.with_input_title(input_title)
			.with_initial_query(initial_query)
			.with_theme(&theme)
			.with_show_logs(show_logs);

		Ok(builder.finish().with_startup_loading_timeout(startup_timeout))
	}

	fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			search_ui: SearchUi::new(backend),
		}
	}

	fn with_input_title(mut self, title: Option<String>) -> Self {
		if let Some(title) = title {
			self.search_ui = self.search_ui.with_input_title(title);
		}
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn with_theme(mut self, theme: &str) -> Self {
		self.search_ui = self.search_ui.with_theme_name(theme);
		self
	}

	fn with_show_logs(mut self, show: bool) -> Self {
		self.search_ui = self.search_ui.with_show_logs(show);
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
