use covers_catalog::Suggestion;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use super::text::{highlight_match, truncate_end};
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Height the suggestion overlay needs, borders included.
#[must_use]
pub fn overlay_height(suggestions: usize) -> u16 {
	if suggestions == 0 {
		0
	} else {
		suggestions as u16 + 2
	}
}

/// Draw the artist suggestions as an overlay anchored at the top of `area`.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	suggestions: &[Suggestion],
	cursor: usize,
	query: &str,
	theme: &Theme,
) {
	let height = overlay_height(suggestions.len()).min(area.height);
	if height < 3 || area.width < 4 {
		return;
	}
	let overlay = Rect { height, ..area };

	// Border, highlight symbol and a spare column.
	let text_width = overlay.width.saturating_sub(5) as usize;
	let items: Vec<ListItem> = suggestions
		.iter()
		.map(|suggestion| {
			let name = truncate_end(&suggestion.display_name, text_width);
			ListItem::new(highlight_match(
				&name,
				query,
				theme.overlay_style(),
				theme.highlight_style(),
			))
		})
		.collect();

	let list = List::new(items)
		.block(
			Block::default()
				.borders(Borders::ALL)
				.title(" Artists ")
				.style(theme.overlay_style()),
		)
		.highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	let mut state = ListState::default().with_selected(Some(cursor));

	frame.render_widget(Clear, overlay);
	frame.render_stateful_widget(list, overlay, &mut state);
}
