use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Cut `text` to `max_width` columns, marking the cut with an ellipsis.
#[must_use]
pub fn truncate_end(text: &str, max_width: usize) -> String {
	if text.width() <= max_width {
		return text.to_string();
	}
	if max_width <= ELLIPSIS.width() {
		return ELLIPSIS.chars().take(max_width).collect();
	}
	let (slice, _) = text.unicode_truncate(max_width - ELLIPSIS.width());
	format!("{slice}{ELLIPSIS}")
}

/// Split `text` into spans, styling the first case-insensitive occurrence of
/// `needle`.
#[must_use]
pub fn highlight_match<'a>(text: &str, needle: &str, base: Style, highlight: Style) -> Line<'a> {
	let needle = needle.trim();
	let Some((start, end)) = find_ignore_case(text, needle) else {
		return Line::from(Span::styled(text.to_string(), base));
	};
	Line::from(vec![
		Span::styled(text[..start].to_string(), base),
		Span::styled(text[start..end].to_string(), highlight),
		Span::styled(text[end..].to_string(), base),
	])
}

fn find_ignore_case(text: &str, needle: &str) -> Option<(usize, usize)> {
	if needle.is_empty() {
		return None;
	}
	let needle_chars = needle.chars().count();
	text.char_indices().find_map(|(start, _)| {
		let candidate = &text[start..];
		let mut chars = candidate.char_indices();
		let matched = needle.chars().all(|expected| {
			chars
				.next()
				.is_some_and(|(_, actual)| actual.to_lowercase().eq(expected.to_lowercase()))
		});
		if !matched {
			return None;
		}
		let end = candidate
			.char_indices()
			.nth(needle_chars)
			.map_or(text.len(), |(offset, _)| start + offset);
		Some((start, end))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_text_is_untouched() {
		assert_eq!(truncate_end("Discovery", 20), "Discovery");
	}

	#[test]
	fn long_text_gets_an_ellipsis() {
		assert_eq!(truncate_end("Random Access Memories", 10), "Random Ac…");
		assert_eq!(truncate_end("Homework", 1), "…");
		assert_eq!(truncate_end("Homework", 0), "");
	}

	#[test]
	fn match_is_found_regardless_of_case() {
		assert_eq!(find_ignore_case("Daft Punk", "punk"), Some((5, 9)));
		assert_eq!(find_ignore_case("Björk", "JÖ"), Some((1, 4)));
		assert_eq!(find_ignore_case("Air", "zz"), None);
		assert_eq!(find_ignore_case("Air", ""), None);
	}

	#[test]
	fn highlight_splits_into_three_spans() {
		let line = highlight_match("Daft Punk", "daft", Style::new(), Style::new());
		let parts: Vec<&str> = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(parts, vec!["", "Daft", " Punk"]);
	}
}
