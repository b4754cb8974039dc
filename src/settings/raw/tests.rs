use clap::Parser;
use gridline::Preset;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::IdentityMode;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"gridline",
		"--preset",
		"packages",
		"--id-field",
		"slug",
		"--columns",
		"title,price",
		"--page-size",
		"20",
		"--select",
		"--reorder",
		"--no-sorting",
		"--theme",
		"light",
		"--title",
		"Tours",
		"--log-level",
		"DEBUG",
	]);

	let mut config = RawConfig::default();
	config.table.page_size = Some(50);
	config.table.sorting = Some(true);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.table.preset, Some(Preset::Packages));
	assert_eq!(config.table.page_size, Some(20));
	assert_eq!(config.table.sorting, Some(false));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.logging.level.as_deref(), Some("DEBUG"));

	let resolved = config.resolve(&cli).expect("valid");
	assert_eq!(resolved.identity, IdentityMode::Field("slug".into()));
	assert_eq!(resolved.columns, vec!["title", "price"]);
	assert!(resolved.features.selection && resolved.features.drag_and_drop);
	assert!(!resolved.features.sorting && resolved.features.pagination);
	assert_eq!(resolved.labels.title.as_deref(), Some("Tours"));
	assert_eq!(resolved.log_level, "debug");
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["gridline"]);
	let mut config = RawConfig::default();
	config.table.filtering = Some(false);
	config.table.positional_ids = Some(true);
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("valid");
	assert!(!resolved.features.filtering);
	assert_eq!(resolved.identity, IdentityMode::Positional);
	assert_eq!(resolved.preset, Preset::Generic);
	assert_eq!(resolved.page_size, 10);
	assert_eq!(resolved.page_size_options, vec![10, 20, 30, 40, 50]);
	assert_eq!(resolved.log_level, "info");
}

#[test]
fn unknown_theme_is_reported_with_its_flag() {
	let cli = CliArgs::parse_from(["gridline", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
}
