use anyhow::Result;
use covers::download::Delivery;
use covers::ui::SessionOutcome;
use serde_json::json;

/// Print a plain-text summary of the session.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	if outcome.downloads.is_empty() {
		return match &outcome.artist {
			Some(artist) => format!("No covers saved (artist: '{artist}')\n"),
			None => format!("No covers saved (query: '{}')\n", outcome.query),
		};
	}

	outcome
		.downloads
		.iter()
		.map(|delivery| match delivery {
			Delivery::Saved(path) => format!("{}\n", path.display()),
			Delivery::Opened(url) => format!("opened {url}\n"),
		})
		.collect()
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let downloads: Vec<_> = outcome
		.downloads
		.iter()
		.map(|delivery| match delivery {
			Delivery::Saved(path) => json!({
				"type": "saved",
				"path": path,
			}),
			Delivery::Opened(url) => json!({
				"type": "opened",
				"url": url,
			}),
		})
		.collect();

	let payload = json!({
		"query": outcome.query,
		"artist": outcome.artist,
		"downloads": downloads,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use serde_json::Value;

	use super::*;

	fn outcome() -> SessionOutcome {
		SessionOutcome {
			query: "daft".into(),
			artist: Some("Daft Punk".into()),
			downloads: vec![
				Delivery::Saved(PathBuf::from("/covers/Discovery.jpg")),
				Delivery::Opened("https://i.example/homework.jpg".into()),
			],
		}
	}

	#[test]
	fn json_format_lists_every_download() {
		let json = format_outcome_json(&outcome()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value["artist"], "Daft Punk");
		assert_eq!(value["downloads"][0]["type"], "saved");
		assert_eq!(value["downloads"][0]["path"], "/covers/Discovery.jpg");
		assert_eq!(value["downloads"][1]["url"], "https://i.example/homework.jpg");
	}

	#[test]
	fn plain_format_prints_one_line_per_download() {
		assert_eq!(
			format_outcome_plain(&outcome()),
			"/covers/Discovery.jpg\nopened https://i.example/homework.jpg\n"
		);
	}

	#[test]
	fn plain_format_without_downloads_mentions_the_query() {
		let outcome = SessionOutcome {
			query: "nobody".into(),
			..SessionOutcome::default()
		};
		assert_eq!(
			format_outcome_plain(&outcome),
			"No covers saved (query: 'nobody')\n"
		);
	}
}
