use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use super::text::truncate_end;
use crate::ui::style::Theme;

/// Key hints on the left, the session's download count on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, hint: &str, saved: usize, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let counter = match saved {
		1 => "1 cover saved".to_string(),
		n => format!("{n} covers saved"),
	};
	let counter_width = (counter.len() as u16).min(area.width);
	let [hint_area, counter_area] =
		Layout::horizontal([Constraint::Fill(1), Constraint::Length(counter_width)])
			.spacing(1)
			.areas(area);

	let hint = truncate_end(hint, hint_area.width as usize);
	frame.render_widget(
		Paragraph::new(hint).style(theme.empty_style()),
		hint_area,
	);
	frame.render_widget(
		Paragraph::new(counter)
			.alignment(Alignment::Right)
			.style(theme.prompt_style()),
		counter_area,
	);
}
