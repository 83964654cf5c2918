use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::App;
use super::components::{
	InputContext, ProgressState, ResultsView, render_banner, render_detail, render_footer,
	render_input, render_logs, render_results, render_status, render_suggestions,
};
use crate::state::LOADING_MESSAGE;

const DETAIL_PERCENT: u16 = 40;
const LOG_PANE_HEIGHT: u16 = 8;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let log_height = if self.show_logs { LOG_PANE_HEIGHT } else { 0 };
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(log_height),
				Constraint::Length(1),
			])
			.split(area);

		render_banner(frame, layout[0], &self.theme);

		let state = self.controller.state();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				prompt: &self.input_title,
				area: layout[1],
				theme: &self.theme,
			},
			ProgressState {
				label: LOADING_MESSAGE,
				active: state.loading,
				throbber_state: &self.throbber_state,
			},
		);
		render_suggestions(
			frame,
			layout[2],
			&state.suggestions,
			self.suggestion_cursor,
			&self.theme,
		);
		render_status(
			frame,
			layout[3],
			state.last_error.as_deref(),
			state.photos.len(),
			&self.theme,
		);

		self.render_body(frame, layout[4]);

		if self.show_logs {
			render_logs(frame, layout[5], &self.log_state, &self.theme);
		}
		render_footer(frame, layout[6], &self.theme);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Percentage(100 - DETAIL_PERCENT),
				Constraint::Percentage(DETAIL_PERCENT),
			])
			.split(area);

		let state = self.controller.state();
		render_results(
			frame,
			columns[0],
			&mut self.table_state,
			ResultsView {
				photos: &state.photos,
				loading: state.loading,
				no_data: state.no_data,
			},
			&self.theme,
		);

		let selected = self
			.table_state
			.selected()
			.and_then(|index| state.photos.get(index));
		#[cfg(feature = "thumbnails")]
		let thumbnail = selected.and_then(|photo| {
			self.thumbnails
				.as_ref()
				.and_then(|loader| loader.state_for(photo.thumbnail_url()))
		});
		render_detail(
			frame,
			columns[1],
			selected,
			#[cfg(feature = "thumbnails")]
			thumbnail,
			&self.theme,
		);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::api::{Collection, Photo, PhotoUrls, PhotoUser};
	use crate::controller::SearchController;
	use crate::search::{SearchEvent, SearchPayload};
	use crate::state::NO_DATA_MESSAGE;
	use crate::ui::components::BANNER_TITLE;

	fn render(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		terminal.backend().to_string()
	}

	fn photo(id: &str, owner: &str) -> Photo {
		Photo {
			id: id.into(),
			description: None,
			alt_description: Some(format!("{owner}'s photo")),
			urls: PhotoUrls {
				small: format!("https://images.example/{id}"),
				..PhotoUrls::default()
			},
			user: PhotoUser {
				name: owner.into(),
				..PhotoUser::default()
			},
			links: Default::default(),
		}
	}

	#[test]
	fn full_screen_shows_results_suggestions_and_detail() {
		let (command_tx, _command_rx) = mpsc::channel();
		let (event_tx, event_rx) = mpsc::channel();
		let mut controller = SearchController::from_channels(command_tx, event_rx, "cat");
		let photo_id = controller.fetch_photos();
		controller.update_query("cat");
		event_tx
			.send(SearchEvent {
				id: photo_id,
				query: "cat".into(),
				payload: SearchPayload::Photos(Ok(vec![photo("a", "Ada"), photo("b", "Grace")])),
			})
			.expect("send");
		event_tx
			.send(SearchEvent {
				id: 1,
				query: "cat".into(),
				payload: SearchPayload::Suggestions(Ok(vec![Collection::new("1", "Cats")])),
			})
			.expect("send");

		let mut app = App::new(controller);
		app.set_input_title("Image Search");
		app.pump();
		let view = render(&mut app);

		assert!(view.contains(BANNER_TITLE));
		assert!(view.contains("Image Search > "));
		assert!(view.contains("Cats"));
		assert!(view.contains("2 photos"));
		assert!(view.contains("Grace"));
		assert!(view.contains("By: Ada"));
		assert!(!view.contains(LOADING_MESSAGE));
	}

	#[test]
	fn loading_message_and_throbber_while_searching() {
		let (command_tx, _command_rx) = mpsc::channel();
		let (_event_tx, event_rx) = mpsc::channel();
		let mut controller = SearchController::from_channels(command_tx, event_rx, "cat");
		controller.fetch_photos();

		let mut app = App::new(controller);
		let view = render(&mut app);

		assert!(view.contains(LOADING_MESSAGE));
		assert!(!view.contains(NO_DATA_MESSAGE));
	}

	#[test]
	fn empty_result_shows_no_data_message() {
		let (command_tx, _command_rx) = mpsc::channel();
		let (event_tx, event_rx) = mpsc::channel();
		let mut controller = SearchController::from_channels(command_tx, event_rx, "qwertyuiop");
		let id = controller.fetch_photos();
		event_tx
			.send(SearchEvent {
				id,
				query: "qwertyuiop".into(),
				payload: SearchPayload::Photos(Ok(Vec::new())),
			})
			.expect("send");

		let mut app = App::new(controller);
		app.pump();
		let view = render(&mut app);

		assert!(view.contains(NO_DATA_MESSAGE));
		assert!(!view.contains(LOADING_MESSAGE));
		assert!(view.contains("Select a photo"));
	}

	#[test]
	fn log_pane_only_when_enabled() {
		let (command_tx, _command_rx) = mpsc::channel();
		let (_event_tx, event_rx) = mpsc::channel();
		let controller = SearchController::from_channels(command_tx, event_rx, "");
		let mut app = App::new(controller);

		assert!(!render(&mut app).contains("Log (F2)"));
		app.set_show_logs(true);
		assert!(render(&mut app).contains("Log (F2)"));
	}
}
