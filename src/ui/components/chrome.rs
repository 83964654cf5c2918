//! Banner, status line and footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

pub const BANNER_TITLE: &str = "Image Search";
pub const COPYRIGHT_NOTICE: &str = "© 2023 All Rights Reserved.";

const KEY_HINTS: &[(&str, &str)] = &[
	("Enter", "search"),
	("Tab", "suggestion"),
	("↑↓", "select"),
	("Ctrl-O", "pick"),
	("F2", "log"),
	("Esc", "quit"),
];

pub fn render_banner(frame: &mut Frame, area: Rect, theme: &Theme) {
	let banner = Paragraph::new(BANNER_TITLE)
		.alignment(Alignment::Center)
		.style(theme.banner);
	frame.render_widget(banner, area);
}

/// Render the last request failure, or a short summary of the results.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	last_error: Option<&str>,
	photo_count: usize,
	theme: &Theme,
) {
	let line = match last_error {
		Some(err) => Line::styled(err.to_string(), theme.error),
		None if photo_count > 0 => Line::styled(
			format!("{photo_count} photos"),
			theme.empty_style(),
		),
		None => Line::default(),
	};
	frame.render_widget(Paragraph::new(line), area);
}

/// Key hints on the left, the copyright notice on the right when it fits.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
	let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
	for (key, action) in KEY_HINTS {
		spans.push(Span::styled(format!(" {key} "), theme.footer));
		spans.push(Span::raw(format!(" {action} ")));
	}
	let hints = Line::from(spans);
	let used = hints.width() + COPYRIGHT_NOTICE.width() + 1;
	frame.render_widget(Paragraph::new(hints), area);

	if used <= usize::from(area.width) {
		let notice = Paragraph::new(COPYRIGHT_NOTICE)
			.alignment(Alignment::Right)
			.style(theme.empty_style());
		frame.render_widget(notice, area);
	}
}
