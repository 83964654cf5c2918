use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::ui::style::Theme;

/// Render the diagnostic log pane.
pub fn render_logs(frame: &mut Frame, area: Rect, state: &TuiWidgetState, theme: &Theme) {
	frame.render_widget(Clear, area);
	if area.width == 0 || area.height == 0 {
		return;
	}

	let block = Block::default()
		.title(" Log (F2) ")
		.borders(Borders::TOP)
		.border_style(theme.empty_style());
	let widget = TuiLoggerWidget::default()
		.block(block)
		.style_error(theme.error)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.state(state);
	frame.render_widget(widget, area);
}
