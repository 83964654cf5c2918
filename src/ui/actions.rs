use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SearchOutcome};

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancel())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.cancel())),
			KeyCode::Char('o') if ctrl => {
				let selection = self.selected_photo().cloned();
				return Ok(Some(SearchOutcome::accepted(
					self.controller.query(),
					selection,
				)));
			}
			KeyCode::F(2) => self.show_logs = !self.show_logs,
			KeyCode::Enter => self.confirm(key.code),
			KeyCode::Tab => self.cycle_suggestion(true),
			KeyCode::BackTab => self.cycle_suggestion(false),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.search_input.input(key) {
					self.suggestion_cursor = None;
					let text = self.search_input.text().to_string();
					self.controller.update_query(text);
				}
			}
		}
		Ok(None)
	}

	fn cancel(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.controller.query())
	}

	/// Take the highlighted suggestion if there is one, otherwise search the
	/// typed query.
	fn confirm(&mut self, code: KeyCode) {
		let highlighted = self
			.suggestion_cursor
			.and_then(|index| self.controller.state().suggestions.get(index))
			.cloned();
		match highlighted {
			Some(suggestion) => {
				self.controller.select_suggestion(&suggestion);
				self.search_input.set_text(suggestion.title);
				self.suggestion_cursor = None;
			}
			None => {
				self.controller.submit_on_enter(code);
			}
		}
	}

	fn cycle_suggestion(&mut self, forward: bool) {
		let count = self.controller.state().suggestions.len();
		if count == 0 {
			self.suggestion_cursor = None;
			return;
		}
		self.suggestion_cursor = Some(match (self.suggestion_cursor, forward) {
			(None, true) => 0,
			(None, false) => count - 1,
			(Some(index), true) => (index + 1) % count,
			(Some(index), false) => (index + count - 1) % count,
		});
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		let len = self.controller.state().photos.len();
		match self.table_state.selected() {
			Some(selected) if selected + 1 < len => self.table_state.select(Some(selected + 1)),
			None if len > 0 => self.table_state.select(Some(0)),
			_ => {}
		}
	}
}
