//! UI building blocks used by the renderer.

/// Album listing with a header separator and empty state.
pub mod albums;
pub mod footer;
/// Query input row with the activity indicator.
pub mod prompt;
pub mod suggestions;
pub mod text;

pub use albums::{AlbumTableContext, render_album_table};
pub use footer::render_footer;
pub use prompt::{ProgressState, PromptContext, render_prompt};
pub use suggestions::{overlay_height, render_suggestions};
