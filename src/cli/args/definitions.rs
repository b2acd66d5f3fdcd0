use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DownloadModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `covers` binary.
#[derive(Parser, Debug)]
#[command(
	name = "covers",
	version,
	long_version = long_version(),
	about = "Search an artist, browse their albums and save the cover art",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COVERS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Start with this artist query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: Artist)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'd',
		long = "download-dir",
		value_name = "DIR",
		help = "Directory saved covers are written to (default: user download folder)"
	)]
	pub(crate) download_dir: Option<PathBuf>,
	#[arg(
		short = 'm',
		long = "download-mode",
		value_enum,
		help = "Save covers to disk or open their URL (default: auto)"
	)]
	pub(crate) download_mode: Option<DownloadModeArg>,
	#[arg(
		long,
		value_name = "CODE",
		help = "Market used for album listings (default: US)"
	)]
	pub(crate) market: Option<String>,
	#[arg(
		long = "allow-stale",
		help = "Apply every catalog response in arrival order, even superseded ones (default: disabled)"
	)]
	pub(crate) allow_stale: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the session summary"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: covers.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
