use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::api::Photo;
#[cfg(feature = "thumbnails")]
use crate::thumbnails::ThumbnailState;
use crate::ui::style::Theme;

const DETAIL_LINES: u16 = 6;

/// Render the selected photo: thumbnail area above, metadata below.
pub fn render_detail(
	frame: &mut Frame,
	area: Rect,
	photo: Option<&Photo>,
	#[cfg(feature = "thumbnails")] thumbnail: Option<&ThumbnailState>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::LEFT)
		.border_style(theme.empty_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let Some(photo) = photo else {
		let hint = Paragraph::new("Select a photo to see its details").style(theme.empty_style());
		frame.render_widget(hint, inner);
		return;
	};

	let sections = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Min(0), Constraint::Length(DETAIL_LINES)])
		.split(inner);

	#[cfg(feature = "thumbnails")]
	render_thumbnail(frame, sections[0], photo, thumbnail, theme);
	#[cfg(not(feature = "thumbnails"))]
	render_thumbnail_url(frame, sections[0], photo, theme);

	frame.render_widget(
		Paragraph::new(metadata_lines(photo, theme)).wrap(Wrap { trim: true }),
		sections[1],
	);
}

fn metadata_lines(photo: &Photo, theme: &Theme) -> Vec<Line<'static>> {
	let label = theme.prompt_style();
	let field = |name: &'static str, value: String| {
		Line::from(vec![Span::styled(format!("{name}: "), label), Span::raw(value)])
	};
	let mut lines = vec![
		field("By", photo.owner_name().to_string()),
		field("Avatar", photo.avatar_url().to_string()),
		field("Id", photo.id.clone()),
		field("Link", photo.share_url().to_string()),
	];
	if let Some(caption) = photo.caption() {
		lines.push(Line::styled(caption.to_string(), theme.empty_style()));
	}
	lines
}

#[cfg(not(feature = "thumbnails"))]
fn render_thumbnail_url(frame: &mut Frame, area: Rect, photo: &Photo, theme: &Theme) {
	let lines = vec![
		Line::styled("Thumbnail", theme.prompt_style()),
		Line::raw(photo.thumbnail_url().to_string()),
	];
	frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

#[cfg(feature = "thumbnails")]
fn render_thumbnail(
	frame: &mut Frame,
	area: Rect,
	photo: &Photo,
	thumbnail: Option<&ThumbnailState>,
	theme: &Theme,
) {
	let message = match thumbnail {
		Some(ThumbnailState::Ready(image)) => {
			image.render(frame, area);
			return;
		}
		Some(ThumbnailState::Failed(err)) => format!("Thumbnail unavailable: {err}"),
		Some(ThumbnailState::Loading) | None => format!("Loading {}", photo.thumbnail_url()),
	};
	frame.render_widget(
		Paragraph::new(message)
			.style(theme.empty_style())
			.wrap(Wrap { trim: true }),
		area,
	);
}

#[cfg(all(test, not(feature = "thumbnails")))]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::api::{PhotoUrls, PhotoUser, ProfileImage};

	#[test]
	fn detail_lists_owner_avatar_and_thumbnail() {
		let photo = Photo {
			id: "xyz".into(),
			description: None,
			alt_description: Some("a cat".into()),
			urls: PhotoUrls {
				small: "https://img.example/s".into(),
				..PhotoUrls::default()
			},
			user: PhotoUser {
				name: "Ada".into(),
				profile_image: ProfileImage {
					small: "https://img.example/a".into(),
				},
				..PhotoUser::default()
			},
			links: Default::default(),
		};

		let mut terminal = Terminal::new(TestBackend::new(50, 12)).expect("terminal");
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_detail(frame, area, Some(&photo), &Theme::default());
			})
			.expect("draw");
		let view = terminal.backend().to_string();
		assert!(view.contains("https://img.example/s"));
		assert!(view.contains("By: Ada"));
		assert!(view.contains("Avatar: https://img.example/a"));
		assert!(view.contains("Id: xyz"));
	}
}
