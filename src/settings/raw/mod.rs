use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod logging;
mod table;
mod ui;

use logging::LoggingSection;
use table::TableSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	table: TableSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.table.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Fill defaults and validate, producing the configuration the viewer runs
	/// with.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.table.page_size.is_some(),
				"GRIDLINE__TABLE__PAGE_SIZE",
				"--page-size",
				"table.page_size",
			),
			page_size_options: detect_source(
				cli.page_size_options.is_some(),
				self.table.page_size_options.is_some(),
				"GRIDLINE__TABLE__PAGE_SIZE_OPTIONS",
				"--page-size-options",
				"table.page_size_options",
			),
			id_field: detect_source(
				cli.id_field.is_some(),
				self.table.id_field.is_some(),
				"GRIDLINE__TABLE__ID_FIELD",
				"--id-field",
				"table.id_field",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"GRIDLINE__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"GRIDLINE__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let table = self.table.finalize();
		let ui = self.ui.finalize();
		let config = ResolvedConfig {
			input: cli.file.clone(),
			preset: table.preset,
			identity: table.identity,
			columns: table.columns,
			search_column: table.search_column,
			features: table.features,
			page_size: table.page_size,
			page_size_options: table.page_size_options,
			empty_icon: table.empty_icon,
			empty_message: table.empty_message,
			theme_name: ui.theme,
			labels: ui.labels,
			log_level: self.logging.finalize(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
