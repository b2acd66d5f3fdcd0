use std::sync::Arc;

use anyhow::{Context, Result};
use covers_catalog::{CatalogApi, Credentials};

use super::App;
use super::config::UiConfig;
use super::state::{CatalogRuntime, SessionOutcome};
use super::style::{self, Theme};
use crate::download::Downloader;
use crate::session::SessionOptions;
use crate::systems::catalog;

/// Builder for the interactive cover browser.
pub struct SearchUi {
	catalog: Arc<dyn CatalogApi>,
	credentials: Credentials,
	downloader: Downloader,
	ui_config: UiConfig,
	initial_query: String,
	theme: Option<Theme>,
	options: SessionOptions,
}

impl SearchUi {
	pub fn new(catalog: Arc<dyn CatalogApi>, credentials: Credentials, downloader: Downloader) -> Self {
		Self {
			catalog,
			credentials,
			downloader,
			ui_config: UiConfig::default(),
			initial_query: String::new(),
			theme: None,
			options: SessionOptions::default(),
		}
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = config;
		self
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.ui_config.title = title.into();
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_session_options(mut self, options: SessionOptions) -> Self {
		self.options = options;
		self
	}

	/// Start the catalog worker and run the UI until the user quits.
	pub fn run(self) -> Result<SessionOutcome> {
		let (tx, rx) = catalog::spawn(self.catalog, self.credentials, self.downloader)
			.context("failed to start the catalog worker")?;
		let mut app = App::new(self.options, CatalogRuntime::new(tx, rx));
		app.set_ui_config(self.ui_config);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if !self.initial_query.is_empty() {
			app.set_query(self.initial_query);
		}
		app.run()
	}
}
