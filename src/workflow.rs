use std::sync::Arc;

use anyhow::{Context, Result};
use covers::download::{DeviceClass, Downloader, SystemOpener};
use covers::session::SessionOptions;
use covers::{SearchUi, SessionOutcome};
use covers_catalog::{AlbumQuery, CatalogApi, CatalogClient, Credentials, Endpoints};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive cover browser.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			credentials,
			accounts_url,
			api_url,
			album_query,
			session,
			download_dir,
			download_mode,
			user_agent,
			input_title,
			initial_query,
			theme,
		} = config;

		let endpoints = Endpoints::new(&accounts_url, &api_url)
			.context("invalid catalog endpoints")?;
		let catalog = Self::catalog(endpoints, album_query)?;
		let device = DeviceClass::resolve(download_mode, user_agent.as_deref());
		info!(
			?device,
			directory = %download_dir.display(),
			"Cover delivery configured"
		);
		let downloader = Downloader::new(
			Arc::clone(&catalog),
			Arc::new(SystemOpener),
			download_dir,
			device,
		);

		let builder = Self::new(catalog, credentials, downloader)
			.with_input_title(input_title)
			.with_initial_query(initial_query)
			.with_theme(theme)
			.with_session_options(session);

		Ok(builder.finish())
	}

	fn catalog(endpoints: Endpoints, albums: AlbumQuery) -> Result<Arc<dyn CatalogApi>> {
		let client = CatalogClient::new(endpoints, albums)
			.context("failed to build the catalog HTTP client")?;
		Ok(Arc::new(client))
	}

	fn new(catalog: Arc<dyn CatalogApi>, credentials: Credentials, downloader: Downloader) -> Self {
		let search_ui = SearchUi::new(catalog, credentials, downloader);
		Self { search_ui }
	}

	fn with_input_title(mut self, title: String) -> Self {
		self.search_ui = self.search_ui.with_input_title(title);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.search_ui = self.search_ui.with_theme_name(&theme);
		}
		self
	}

	fn with_session_options(mut self, options: SessionOptions) -> Self {
		self.search_ui = self.search_ui.with_session_options(options);
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
