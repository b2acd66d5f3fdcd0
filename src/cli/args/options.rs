use clap::ValueEnum;
use covers::download::DownloadMode;

/// Cover delivery modes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DownloadModeArg {
	Auto,
	Save,
	Open,
}

impl From<DownloadModeArg> for DownloadMode {
	fn from(value: DownloadModeArg) -> Self {
		match value {
			DownloadModeArg::Auto => DownloadMode::Auto,
			DownloadModeArg::Save => DownloadMode::Save,
			DownloadModeArg::Open => DownloadMode::Open,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
