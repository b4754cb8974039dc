use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, PresetArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `gridline` binary.
#[derive(Parser, Debug)]
#[command(
	name = "gridline",
	version,
	long_version = long_version(),
	about = "Browse JSON records in an interactive data table",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "JSON file holding an array of records (default: read stdin)"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "GRIDLINE_CONFIG",
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
		short = 'P',
		long,
		value_enum,
		help = "Column layout for a known record kind (default: generic)"
	)]
	pub(crate) preset: Option<PresetArg>,
	#[arg(
		long = "id-field",
		value_name = "FIELD",
		help = "Record field identifying each row (default: id)"
	)]
	pub(crate) id_field: Option<String>,
	#[arg(
		long = "positional-ids",
		help = "Identify rows by their position instead of a field (default: disabled)"
	)]
	pub(crate) positional_ids: bool,
	#[arg(
		long,
		value_delimiter = ',',
		value_name = "FIELD",
		help = "Comma-separated fields to show, in order (default: preset columns)"
	)]
	pub(crate) columns: Option<Vec<String>>,
	#[arg(
		long = "search-column",
		value_name = "FIELD",
		help = "Restrict the search box to one field (default: preset value)"
	)]
	pub(crate) search_column: Option<String>,
	#[arg(
		short = 's',
		long = "page-size",
		value_name = "ROWS",
		help = "Rows per page (default: 10)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "page-size-options",
		value_delimiter = ',',
		value_name = "ROWS",
		help = "Comma-separated page sizes to cycle through (default: 10,20,30,40,50)"
	)]
	pub(crate) page_size_options: Option<Vec<usize>>,
	#[arg(long, help = "Enable row selection with checkboxes (default: disabled)")]
	pub(crate) select: bool,
	#[arg(long, help = "Enable drag-and-drop row reordering (default: disabled)")]
	pub(crate) reorder: bool,
	#[arg(long = "no-pagination", help = "Show every row on one page")]
	pub(crate) no_pagination: bool,
	#[arg(long = "no-sorting", help = "Disable column sorting")]
	pub(crate) no_sorting: bool,
	#[arg(long = "no-filtering", help = "Hide the search box")]
	pub(crate) no_filtering: bool,
	#[arg(long = "no-column-menu", help = "Hide the column visibility menu")]
	pub(crate) no_column_menu: bool,
	#[arg(
		long = "empty-message",
		value_name = "TEXT",
		help = "Message shown when no rows match (default: No records found for your selection.)"
	)]
	pub(crate) empty_message: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title drawn above the table (default: preset title)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log level for gridline.log: off, error, warn, info, debug, trace (default: info)"
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
