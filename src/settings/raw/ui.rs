use gridline::tui::UiLabels;
use serde::Deserialize;

use super::super::util::non_empty;
use crate::cli::CliArgs;

/// Theme and text settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) labels: Option<UiLabels>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = self.labels.unwrap_or_default();
		if let Some(title) = non_empty(self.title) {
			labels.title = Some(title);
		}
		UiResolution {
			theme: non_empty(self.theme),
			labels,
		}
	}
}
