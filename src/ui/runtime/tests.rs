use covers_catalog::{Album, Suggestion};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::download::Delivery;
use crate::systems::catalog::{CatalogCommand, CatalogEvent};
use crate::ui::state::test_support::Harness;

fn render(harness: &mut Harness) -> String {
	let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
	terminal.draw(|frame| harness.app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

fn suggest(harness: &mut Harness, query: &str, suggestions: Vec<Suggestion>) {
	harness.app.set_query(query);
	let id = match harness.drain_commands().pop() {
		Some(CatalogCommand::Suggest { id, .. }) => id,
		other => panic!("expected a suggest request, got {other:?}"),
	};
	harness.deliver(CatalogEvent::Suggestions { id, suggestions });
}

fn list_albums(harness: &mut Harness, albums: Vec<Album>) {
	harness
		.app
		.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
		.unwrap();
	let id = match harness.drain_commands().pop() {
		Some(CatalogCommand::Albums { id, .. }) => id,
		other => panic!("expected an album request, got {other:?}"),
	};
	harness.deliver(CatalogEvent::Albums { id, albums });
}

#[test]
fn empty_listing_after_search_shows_no_albums_message() {
	let mut harness = Harness::new();
	suggest(&mut harness, "quiet", vec![Suggestion::new("q1", "Quiet Riot")]);
	list_albums(&mut harness, Vec::new());

	let view = render(&mut harness);

	assert!(view.contains("No albums found"));
	insta::assert_snapshot!("empty_listing_after_search_shows_no_albums_message", view);
}

#[test]
fn fresh_session_shows_no_message() {
	let mut harness = Harness::new();

	let view = render(&mut harness);

	assert!(!view.contains("No albums found"));
	assert!(view.contains("Type an artist name"));
}

#[test]
fn suggestions_overlay_the_album_table() {
	let mut harness = Harness::new();
	suggest(
		&mut harness,
		"da",
		vec![Suggestion::new("daft", "Daft Punk"), Suggestion::new("dave", "Dave")],
	);

	let view = render(&mut harness);

	insta::assert_snapshot!("suggestions_overlay_the_album_table", view);
}

#[test]
fn album_listing_with_selection_and_saved_count() {
	let mut harness = Harness::new();
	suggest(&mut harness, "air", vec![Suggestion::new("air", "Air")]);
	list_albums(
		&mut harness,
		vec![
			Album {
				release_date: Some("1998-01-16".to_string()),
				total_tracks: Some(10),
				..Album::new("Moon Safari", "https://i.example/moon.jpg")
			},
			Album {
				image_url: None,
				..Album::new("Premiers Symptômes", "")
			},
		],
	);
	harness.deliver(CatalogEvent::Delivered(Delivery::Saved(
		"Moon Safari.jpg".into(),
	)));

	let view = render(&mut harness);

	insta::assert_snapshot!("album_listing_with_selection_and_saved_count", view);
}

#[test]
fn loading_state_shows_the_phase() {
	let mut harness = Harness::new();
	harness.app.set_query("slow");

	let view = render(&mut harness);

	assert!(view.contains("suggesting"));
}
