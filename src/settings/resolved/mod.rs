use std::path::PathBuf;

use gridline::Preset;
use gridline::engine::Features;
use gridline::tui::{Theme, UiLabels, by_name, default_theme};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// How the viewer identifies rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityMode {
	/// Read the id from this record field.
	Field(String),
	/// Use the row's position in the input.
	Positional,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Input file; `None` reads stdin.
	pub input: Option<PathBuf>,
	pub preset: Preset,
	pub identity: IdentityMode,
	/// Fields to show, in order. Empty keeps the preset's columns.
	pub columns: Vec<String>,
	pub search_column: Option<String>,
	pub features: Features,
	pub page_size: usize,
	pub page_size_options: Vec<usize>,
	pub empty_icon: Option<String>,
	pub empty_message: Option<String>,
	pub theme_name: Option<String>,
	pub labels: UiLabels,
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn theme(&self) -> Theme {
		self.theme_name
			.as_deref()
			.and_then(by_name)
			.unwrap_or_else(default_theme)
	}

	pub fn log_level(&self) -> LevelFilter {
		self.log_level.parse().unwrap_or(LevelFilter::Info)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
