use covers_catalog::Album;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use super::text::truncate_end;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

/// Argument bundle for the album table.
pub struct AlbumTableContext<'a> {
	pub albums: &'a [Album],
	pub headers: &'a [String],
	/// Message drawn instead of rows, if any.
	pub empty_message: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

fn column_widths() -> [Constraint; 4] {
	[
		Constraint::Fill(1),
		Constraint::Length(10),
		Constraint::Length(6),
		Constraint::Length(5),
	]
}

pub fn render_album_table(
	frame: &mut Frame,
	table_state: &mut TableState,
	context: AlbumTableContext<'_>,
) {
	let AlbumTableContext {
		albums,
		headers,
		empty_message,
		area,
		theme,
	} = context;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let highlight_spacing = HighlightSpacing::WhenSelected;
	let selection_width = selection_column_width(table_state, &highlight_spacing);
	let widths = resolve_column_widths(area, &column_widths(), selection_width);
	let name_width = widths.first().copied().unwrap_or_default() as usize;

	let header = Row::new(headers.iter().map(|header| Cell::from(header.as_str())))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let table = Table::new(build_album_rows(albums, name_width), column_widths())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(highlight_spacing)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme, 1);

	if let Some(message) = empty_message {
		render_empty_message(frame, area, message, theme);
	}
}

#[must_use]
pub fn build_album_rows(albums: &[Album], name_width: usize) -> Vec<Row<'static>> {
	albums
		.iter()
		.map(|album| {
			let name = if name_width == 0 {
				album.display_name.clone()
			} else {
				truncate_end(&album.display_name, name_width)
			};
			let released = album.release_date.clone().unwrap_or_default();
			let tracks = album
				.total_tracks
				.map(|tracks| tracks.to_string())
				.unwrap_or_default();
			let cover = if album.image_url.is_some() { "yes" } else { "-" };
			Row::new([
				Cell::from(name),
				Cell::from(released),
				Cell::from(Text::from(tracks).alignment(Alignment::Right)),
				Cell::from(cover),
			])
		})
		.collect()
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	if area.height <= HEADER_AND_DIVIDER_HEIGHT {
		return;
	}
	let message_area = Rect {
		y: area.y + HEADER_AND_DIVIDER_HEIGHT,
		height: area.height - HEADER_AND_DIVIDER_HEIGHT,
		..area
	};
	let empty = Paragraph::new(message.to_string())
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(Clear, message_area);
	frame.render_widget(empty, message_area);
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

	let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Line::from(spans)), sep_rect);
}

fn selection_column_width(state: &TableState, spacing: &HighlightSpacing) -> u16 {
	let should_add = match spacing {
		HighlightSpacing::Always => true,
		HighlightSpacing::WhenSelected => state.selected().is_some(),
		HighlightSpacing::Never => false,
	};
	if should_add {
		UnicodeWidthStr::width(HIGHLIGHT_SYMBOL) as u16
	} else {
		0
	}
}

fn resolve_column_widths(area: Rect, constraints: &[Constraint], selection_width: u16) -> Vec<u16> {
	let layout_area = Rect {
		x: 0,
		y: 0,
		width: area.width,
		height: 1,
	};
	let [_, columns_area] =
		Layout::horizontal([Constraint::Length(selection_width), Constraint::Min(0)])
			.areas(layout_area);

	Layout::horizontal(constraints.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}
