use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `picfind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "picfind",
	version,
	long_version = long_version(),
	about = "Search Unsplash photos from the terminal with live suggestions",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PICFIND_CONFIG",
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
		short = 'k',
		long = "access-key",
		value_name = "KEY",
		help = "Unsplash access key (default: from configuration or PICFIND_ACCESS_KEY)"
	)]
	pub(crate) access_key: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "API root URL (default: https://api.unsplash.com)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: none)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search this query on startup (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: meadow)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "show-logs",
		help = "Open the log pane on startup (default: disabled)"
	)]
	pub(crate) show_logs: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level captured by the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
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
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
