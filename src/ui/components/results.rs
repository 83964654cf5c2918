use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::api::Photo;
use crate::state::{LOADING_MESSAGE, NO_DATA_MESSAGE};
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
const HEADERS: [&str; 3] = ["#", "Photographer", "Description"];

/// What the result grid should show this frame.
pub struct ResultsView<'a> {
	pub photos: &'a [Photo],
	pub loading: bool,
	pub no_data: bool,
}

/// Render the photo table plus the loading or "no data" message.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	view: ResultsView<'_>,
	theme: &Theme,
) {
	let header = Row::new(HEADERS.iter().map(|title| Cell::from(*title)))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let table = Table::new(
		build_rows(view.photos),
		[
			Constraint::Length(4),
			Constraint::Percentage(30),
			Constraint::Fill(1),
		],
	)
	.header(header)
	.column_spacing(TABLE_COLUMN_SPACING)
	.highlight_spacing(HighlightSpacing::WhenSelected)
	.row_highlight_style(theme.row_highlight_style())
	.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);

	if view.loading {
		render_message(frame, area, LOADING_MESSAGE, theme.loading, false);
	} else if view.no_data && view.photos.is_empty() {
		render_message(frame, area, NO_DATA_MESSAGE, theme.empty_style(), true);
	}
}

fn build_rows(photos: &[Photo]) -> Vec<Row<'static>> {
	photos
		.iter()
		.enumerate()
		.map(|(index, photo)| {
			Row::new(vec![
				Cell::from((index + 1).to_string()),
				Cell::from(photo.owner_name().to_string()),
				Cell::from(photo.caption().unwrap_or_default().to_string()),
			])
		})
		.collect()
}

/// Draw `text` below the header. A loading banner covers one line so the
/// previous results stay visible underneath; other messages fill the area.
fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style, fill: bool) {
	if area.height <= HEADER_AND_DIVIDER_HEIGHT {
		return;
	}
	let mut message_area = area;
	message_area.y += HEADER_AND_DIVIDER_HEIGHT;
	message_area.height -= HEADER_AND_DIVIDER_HEIGHT;
	if !fill {
		message_area.height = 1;
	}

	let message = Paragraph::new(text.to_string())
		.alignment(Alignment::Center)
		.style(style);
	frame.render_widget(Clear, message_area);
	frame.render_widget(message, message_area);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle_style = base_style.fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::api::{PhotoUrls, PhotoUser};

	fn photo(owner: &str, alt: &str) -> Photo {
		Photo {
			id: owner.to_lowercase(),
			description: None,
			alt_description: Some(alt.into()),
			urls: PhotoUrls::default(),
			user: PhotoUser {
				name: owner.into(),
				..PhotoUser::default()
			},
			links: Default::default(),
		}
	}

	fn draw(view: ResultsView<'_>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(60, 8)).expect("terminal");
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_results(frame, area, &mut table_state, view, &Theme::default());
			})
			.expect("draw");
		terminal.backend().to_string()
	}

	#[test]
	fn rows_show_owner_and_caption() {
		let photos = [photo("Ada", "a cat on a wall"), photo("Grace", "two dogs")];
		let view = draw(ResultsView {
			photos: &photos,
			loading: false,
			no_data: false,
		});
		assert!(view.contains("Photographer"));
		assert!(view.contains("Ada"));
		assert!(view.contains("a cat on a wall"));
		assert!(view.contains("two dogs"));
		assert!(!view.contains(NO_DATA_MESSAGE));
	}

	#[test]
	fn empty_search_shows_no_data_message() {
		let view = draw(ResultsView {
			photos: &[],
			loading: false,
			no_data: true,
		});
		assert!(view.contains(NO_DATA_MESSAGE));
		assert!(!view.contains(LOADING_MESSAGE));
	}

	#[test]
	fn loading_hides_no_data_message() {
		let view = draw(ResultsView {
			photos: &[],
			loading: true,
			no_data: true,
		});
		assert!(view.contains(LOADING_MESSAGE));
		assert!(!view.contains(NO_DATA_MESSAGE));
	}

	#[test]
	fn fresh_grid_shows_no_message() {
		let view = draw(ResultsView {
			photos: &[],
			loading: false,
			no_data: false,
		});
		assert!(!view.contains(LOADING_MESSAGE));
		assert!(!view.contains(NO_DATA_MESSAGE));
	}
}
