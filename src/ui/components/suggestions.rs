use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::api::Collection;
use crate::ui::style::Theme;

const CHIP_GAP: usize = 1;

/// Render the suggestion strip as a row of chips.
///
/// When the strip is wider than `area`, leading chips are dropped until the
/// highlighted one fits.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	suggestions: &[Collection],
	highlighted: Option<usize>,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || suggestions.is_empty() {
		return;
	}

	let labels: Vec<String> = suggestions
		.iter()
		.map(|suggestion| format!(" {} ", suggestion.title))
		.collect();
	let widths: Vec<usize> = labels.iter().map(|label| label.width()).collect();
	let start = first_visible(&widths, highlighted, area.width as usize);

	let mut spans = Vec::with_capacity(labels.len() * 2);
	for (index, label) in labels.into_iter().enumerate().skip(start) {
		if !spans.is_empty() {
			spans.push(Span::raw(" ".repeat(CHIP_GAP)));
		}
		let style = if Some(index) == highlighted {
			theme.suggestion_selected
		} else {
			theme.suggestion
		};
		spans.push(Span::styled(label, style));
	}

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn first_visible(widths: &[usize], highlighted: Option<usize>, available: usize) -> usize {
	let Some(target) = highlighted.filter(|index| *index < widths.len()) else {
		return 0;
	};
	let mut start = 0;
	while start < target && span_width(&widths[start..=target]) > available {
		start += 1;
	}
	start
}

fn span_width(widths: &[usize]) -> usize {
	let gaps = widths.len().saturating_sub(1) * CHIP_GAP;
	widths.iter().sum::<usize>() + gaps
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn highlighted_chip_scrolls_into_view() {
		let widths = [6, 6, 6, 6];
		assert_eq!(first_visible(&widths, None, 10), 0);
		assert_eq!(first_visible(&widths, Some(0), 10), 0);
		assert_eq!(first_visible(&widths, Some(1), 13), 0);
		assert_eq!(first_visible(&widths, Some(3), 13), 2);
		assert_eq!(first_visible(&widths, Some(9), 13), 0);
	}

	#[test]
	fn chips_render_in_order() {
		let suggestions = vec![Collection::new("1", "Cats"), Collection::new("2", "Wildcats")];
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).expect("terminal");
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_suggestions(frame, area, &suggestions, Some(1), &Theme::default());
			})
			.expect("draw");
		let view = terminal.backend().to_string();
		let cats = view.find("Cats").expect("Cats chip");
		let wild = view.find("Wildcats").expect("Wildcats chip");
		assert!(cats < wild);
	}
}
