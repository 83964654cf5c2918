use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Type to Search";

/// Single-line search box.
pub struct SearchInput {
	textarea: TextArea<'static>,
}

impl SearchInput {
	#[must_use]
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			textarea: build_textarea(text.into()),
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.textarea = build_textarea(text.into());
	}

	/// Feed a key to the text area. Returns whether the text changed.
	///
	/// Keys that would insert a line break are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea(text: String) -> TextArea<'static> {
	let mut textarea = TextArea::new(vec![text]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
	textarea.set_placeholder_text(PLACEHOLDER);
	textarea.move_cursor(CursorMove::End);
	textarea
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_at_the_end() {
		let mut input = SearchInput::new("ca");
		assert!(input.input(key(KeyCode::Char('t'))));
		assert_eq!(input.text(), "cat");
	}

	#[test]
	fn line_breaks_are_ignored() {
		let mut input = SearchInput::new("cat");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "cat");
	}

	#[test]
	fn cursor_motion_is_not_an_edit() {
		let mut input = SearchInput::new("cat");
		assert!(!input.input(key(KeyCode::Left)));
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "ct");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = SearchInput::new("wild");
		input.set_text("Wildcats");
		assert_eq!(input.text(), "Wildcats");
		assert!(input.input(key(KeyCode::Char('!'))));
		assert_eq!(input.text(), "Wildcats!");
	}
}
