use covers_catalog::{Album, ArtistId, Suggestion};

use super::*;

fn artists(prefix: &str, count: usize) -> Vec<Suggestion> {
	(0..count)
		.map(|n| Suggestion::new(format!("{prefix}-{n}"), format!("{prefix} {n}")))
		.collect()
}

fn albums(count: usize) -> Vec<Album> {
	(0..count)
		.map(|n| Album::new(format!("Album {n}"), format!("https://i.example/{n}.jpg")))
		.collect()
}

fn suggest_id(effect: Option<Effect>) -> RequestId {
	match effect {
		Some(Effect::Suggest { id, .. }) => id,
		other => panic!("expected a suggest effect, got {other:?}"),
	}
}

fn album_id(effect: Option<Effect>) -> RequestId {
	match effect {
		Some(Effect::FetchAlbums { id, .. }) => id,
		other => panic!("expected an album effect, got {other:?}"),
	}
}

fn last_arrival_session() -> SearchSession {
	SearchSession::new(SessionOptions {
		stale_policy: StalePolicy::LastArrivalWins,
		..SessionOptions::default()
	})
}

#[test]
fn empty_query_clears_suggestions_without_a_request() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("daft"));
	session.apply_suggestions(id, artists("daft", 3));
	assert_eq!(session.suggestions().len(), 3);

	assert_eq!(session.edit_query(""), None);
	assert!(session.suggestions().is_empty());
	assert_eq!(session.phase(), Phase::Idle);
	assert!(!session.is_loading());
}

#[test]
fn whitespace_query_counts_as_empty() {
	let mut session = SearchSession::default();
	assert_eq!(session.edit_query("   "), None);
	assert_eq!(session.query(), "   ");
	assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn non_empty_query_issues_a_suggest_request() {
	let mut session = SearchSession::default();
	let effect = session.edit_query("Daft Punk");

	assert!(matches!(
		effect,
		Some(Effect::Suggest { ref query, .. }) if query == "Daft Punk"
	));
	assert_eq!(session.phase(), Phase::Suggesting);
	assert!(session.is_loading());
}

#[test]
fn suggestions_are_capped_at_ten() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("a"));

	assert!(session.apply_suggestions(id, artists("a", 25)));
	assert_eq!(session.suggestions().len(), MAX_SUGGESTIONS);
	assert_eq!(session.suggestions()[0].display_name, "a 0");
}

#[test]
fn configured_suggestion_limit_cannot_exceed_ten() {
	let mut session = SearchSession::new(SessionOptions {
		suggestion_limit: 40,
		..SessionOptions::default()
	});
	let id = suggest_id(session.edit_query("a"));
	session.apply_suggestions(id, artists("a", 25));
	assert_eq!(session.suggestions().len(), MAX_SUGGESTIONS);
}

#[test]
fn submit_uses_the_top_suggestion() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("Daft Punk"));
	session.apply_suggestions(id, artists("dp", 4));

	let effect = session.submit();

	assert!(matches!(
		effect,
		Some(Effect::FetchAlbums { ref artist, .. }) if *artist == ArtistId::new("dp-0")
	));
	assert!(session.suggestions().is_empty());
	assert_eq!(session.phase(), Phase::Searching);
	assert_eq!(
		session.artist().map(|artist| artist.display_name.as_str()),
		Some("dp 0")
	);
}

#[test]
fn submit_without_suggestions_does_nothing() {
	let mut session = SearchSession::default();
	session.edit_query("nobody");
	assert_eq!(session.submit(), None);
	assert_eq!(session.phase(), Phase::Suggesting);
}

#[test]
fn cursor_picks_a_specific_suggestion() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("x"));
	session.apply_suggestions(id, artists("x", 3));

	session.move_cursor(1);
	session.move_cursor(5);
	assert_eq!(session.cursor(), 2);
	session.move_cursor(-1);
	assert_eq!(
		session.highlighted().map(|s| s.id.clone()),
		Some(ArtistId::new("x-1"))
	);

	let effect = session.submit();
	assert!(matches!(
		effect,
		Some(Effect::FetchAlbums { ref artist, .. }) if *artist == ArtistId::new("x-1")
	));
}

#[test]
fn album_fetch_marks_search_executed_even_when_empty() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("quiet"));
	session.apply_suggestions(id, artists("quiet", 1));
	let id = album_id(session.select_suggestion(0));

	assert!(!session.shows_no_albums());
	assert!(session.apply_albums(id, Vec::new()));

	assert!(session.search_executed());
	assert!(session.suggestions().is_empty());
	assert!(session.shows_no_albums());
	assert_eq!(session.phase(), Phase::Results);
}

#[test]
fn no_albums_message_needs_an_executed_search() {
	let session = SearchSession::default();
	assert!(session.albums().is_empty());
	assert!(!session.search_executed());
	assert!(!session.shows_no_albums());
}

#[test]
fn albums_are_capped_at_fifty() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("prolific"));
	session.apply_suggestions(id, artists("prolific", 1));
	let id = album_id(session.submit());

	session.apply_albums(id, albums(80));
	assert_eq!(session.albums().len(), MAX_ALBUMS);
}

#[test]
fn late_suggestions_do_not_reappear_after_selection() {
	let mut session = SearchSession::default();
	let first = suggest_id(session.edit_query("d"));
	let second = suggest_id(session.edit_query("da"));
	session.apply_suggestions(second, artists("da", 2));
	let albums_id = album_id(session.submit());

	assert!(!session.apply_suggestions(first, artists("d", 5)));
	assert!(session.apply_albums(albums_id, albums(2)));
	assert!(session.suggestions().is_empty());
	assert_eq!(session.albums().len(), 2);
}

#[test]
fn stale_suggestions_are_dropped_by_default() {
	let mut session = SearchSession::default();
	let a = suggest_id(session.edit_query("a"));
	let ab = suggest_id(session.edit_query("ab"));

	// "ab" answers first, then the slower "a" request lands.
	assert!(session.apply_suggestions(ab, artists("ab", 2)));
	assert!(!session.apply_suggestions(a, artists("a", 7)));

	assert_eq!(session.suggestions().len(), 2);
	assert_eq!(session.suggestions()[0].display_name, "ab 0");
	assert!(!session.is_loading());
}

#[test]
fn last_arrival_wins_when_stale_responses_are_allowed() {
	let mut session = last_arrival_session();
	let a = suggest_id(session.edit_query("a"));
	let ab = suggest_id(session.edit_query("ab"));

	assert!(session.apply_suggestions(ab, artists("ab", 2)));
	assert!(session.apply_suggestions(a, artists("a", 7)));

	assert_eq!(session.suggestions().len(), 7);
	assert_eq!(session.suggestions()[0].display_name, "a 0");
}

#[test]
fn allowed_stale_responses_still_respect_a_selection() {
	let mut session = last_arrival_session();
	let first = suggest_id(session.edit_query("d"));
	let second = suggest_id(session.edit_query("da"));
	session.apply_suggestions(second, artists("da", 2));
	let albums_id = album_id(session.submit());
	session.apply_albums(albums_id, albums(2));

	assert!(!session.apply_suggestions(first, artists("d", 5)));
	assert!(session.suggestions().is_empty());
	assert_eq!(session.albums().len(), 2);
	assert_eq!(session.phase(), Phase::Results);
}

#[test]
fn allowed_stale_responses_do_not_fill_an_empty_query() {
	let mut session = last_arrival_session();
	let id = suggest_id(session.edit_query("a"));
	assert_eq!(session.edit_query(""), None);

	assert!(!session.apply_suggestions(id, artists("a", 4)));
	assert!(session.suggestions().is_empty());

	let next = suggest_id(session.edit_query("b"));
	assert!(session.apply_suggestions(next, artists("b", 3)));
	assert_eq!(session.suggestions().len(), 3);
}

#[test]
fn failed_suggestions_leave_the_list_untouched() {
	let mut session = SearchSession::default();
	let first = suggest_id(session.edit_query("a"));
	session.apply_suggestions(first, artists("a", 3));
	let second = suggest_id(session.edit_query("ab"));

	session.suggestions_failed(second);

	assert_eq!(session.suggestions().len(), 3);
	assert!(!session.is_loading());
}

#[test]
fn failed_album_fetch_keeps_previous_results() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("a"));
	session.apply_suggestions(id, artists("a", 2));
	let first = album_id(session.submit());
	session.apply_albums(first, albums(3));

	let id = suggest_id(session.edit_query("b"));
	session.apply_suggestions(id, artists("b", 2));
	let second = album_id(session.submit());
	session.albums_failed(second);

	assert_eq!(session.albums().len(), 3);
	assert_eq!(session.phase(), Phase::Results);
	assert!(!session.is_loading());
}

#[test]
fn failed_first_album_fetch_returns_to_idle() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("a"));
	session.apply_suggestions(id, artists("a", 1));
	let id = album_id(session.submit());

	session.albums_failed(id);

	assert_eq!(session.phase(), Phase::Idle);
	assert!(!session.search_executed());
}

#[test]
fn typing_after_results_keeps_albums_visible() {
	let mut session = SearchSession::default();
	let id = suggest_id(session.edit_query("a"));
	session.apply_suggestions(id, artists("a", 1));
	let id = album_id(session.submit());
	session.apply_albums(id, albums(4));

	session.edit_query("new artist");

	assert_eq!(session.phase(), Phase::Suggesting);
	assert_eq!(session.albums().len(), 4);
	assert!(session.search_executed());
}
