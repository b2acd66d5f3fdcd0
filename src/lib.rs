//! Core crate exports for the `covers` terminal cover browser.
//!
//! The root module re-exports the types an embedder needs to configure and run
//! the UI: the [`SearchUi`] builder, the theme helpers and the session outcome.

pub mod app_dirs;
pub mod download;
pub mod logging;
pub mod session;
mod systems;
pub mod ui;

pub use download::{Delivery, DeviceClass, DownloadMode, Downloader};
pub use session::{SearchSession, SessionOptions, StalePolicy};
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchUi, SessionOutcome, UiConfig};
