use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn finalize(self) -> String {
		self.level
			.map(|level| level.trim().to_ascii_lowercase())
			.filter(|level| !level.is_empty())
			.unwrap_or_else(|| DEFAULT_LEVEL.to_string())
	}
}
