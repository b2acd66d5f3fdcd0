use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Title followed by the prompt marker.
	pub prompt: &'a str,
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Request activity shown at the right edge of the prompt row.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub in_flight: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the query input and the activity indicator.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, progress: ProgressState<'_>) {
	let PromptContext {
		search_input,
		prompt,
		placeholder,
		area,
		theme,
	} = prompt;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_width = (prompt.width() as u16).min(area.width);
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Fill(1)]).areas(area);

	frame.buffer_mut().set_line(
		prompt_area.left(),
		prompt_area.top(),
		&Line::from(Span::styled(prompt.to_string(), theme.prompt_style())),
		prompt_area.width,
	);
	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty()
		&& let Some(placeholder) = placeholder
	{
		render_placeholder(frame, input_area, placeholder, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell for the cursor.
	let start = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	if width == 0 {
		return;
	}
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(text.to_string(), theme.empty_style())),
		width,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		label,
		in_flight,
		throbber_state,
	} = progress;
	if area.width == 0 || label.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if in_flight {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(label.to_string(), muted_style));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Never draw over the query text.
	let row = area.top();
	let last_text_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_text_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
