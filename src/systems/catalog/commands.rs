use covers_catalog::{Album, ArtistId, Suggestion};

use crate::download::Delivery;
use crate::session::RequestId;

/// Commands understood by the background catalog worker.
#[derive(Debug)]
pub(crate) enum CatalogCommand {
	/// Artist autocomplete for a non-empty query.
	Suggest {
		/// Identifier that lets the UI match the response to its request.
		id: RequestId,
		query: String,
	},
	/// Album listing for the selected artist.
	Albums { id: RequestId, artist: ArtistId },
	/// Save or open the cover of an album, depending on the device class.
	Download(Album),
	/// Hand an image URL to the system opener.
	Open(String),
	/// Stop the background worker thread.
	Shutdown,
}

/// Responses emitted by the worker, in completion order.
#[derive(Debug)]
pub(crate) enum CatalogEvent {
	Suggestions {
		id: RequestId,
		suggestions: Vec<Suggestion>,
	},
	SuggestionsFailed {
		id: RequestId,
	},
	Albums {
		id: RequestId,
		albums: Vec<Album>,
	},
	AlbumsFailed {
		id: RequestId,
	},
	Delivered(Delivery),
}
