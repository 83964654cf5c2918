use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput,
	pub prompt: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Loading indicator drawn at the right edge of the prompt row.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub active: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the editable query and the loading indicator.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		prompt,
		area,
		theme,
	} = input;

	let prompt_width = prompt_width(prompt);
	let input_area = if prompt_width == 0 {
		area
	} else {
		let horizontal = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
			.split(area);
		let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
		frame.render_widget(prompt_widget, horizontal[0]);
		horizontal[1]
	};

	search_input.render(frame, input_area);
	render_progress(frame, input_area, progress, theme);
}

fn prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		u16::try_from(prompt.width())
			.unwrap_or(u16::MAX)
			.saturating_add(3)
	}
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		label,
		active,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || !active {
		return;
	}

	let style = theme.loading;
	let mut line = Line::default();
	let spinner = Throbber::default().style(style).throbber_style(style);
	line.spans.push(spinner.to_symbol_span(throbber_state));
	line.spans.push(Span::styled(label.to_string(), style));

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Never draw over the typed query.
	let row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	if max_width == 0 {
		return;
	}
	buffer.set_line(start_x, row, &line, max_width);
}
