use gridline::tui::by_name;
use log::LevelFilter;

use super::{ConfigError, ConfigSources, IdentityMode, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"table.page_size",
			config.page_size.to_string(),
			ConfigSources::source_for(&sources.page_size, "table.page_size"),
			"must be at least 1",
		));
	}

	if config.page_size_options.is_empty() || config.page_size_options.contains(&0) {
		let value = config
			.page_size_options
			.iter()
			.map(usize::to_string)
			.collect::<Vec<_>>()
			.join(",");
		return Err(ConfigError::invalid(
			"table.page_size_options",
			value,
			ConfigSources::source_for(&sources.page_size_options, "table.page_size_options"),
			"needs at least one size and every size must be at least 1",
		));
	}

	if let IdentityMode::Field(field) = &config.identity
		&& field.is_empty()
	{
		return Err(ConfigError::invalid(
			"table.id_field",
			field.clone(),
			ConfigSources::source_for(&sources.id_field, "table.id_field"),
			"must name a record field (or use positional ids)",
		));
	}

	if let Some(theme) = &config.theme_name
		&& by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			ConfigSources::source_for(&sources.theme, "ui.theme"),
			"unknown theme (see --list-themes)",
		));
	}

	if config.log_level.parse::<LevelFilter>().is_err() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			ConfigSources::source_for(&sources.log_level, "logging.level"),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}
