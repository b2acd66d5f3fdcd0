//! Interactive terminal UI for `covers`.
//!
//! [`SearchUi`] wires the catalog worker to an [`App`] and runs the event
//! loop. The remaining submodules hold key handling, rendering, the widgets
//! and the colour themes.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use state::{App, SessionOutcome};
