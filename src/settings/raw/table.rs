use gridline::Preset;
use gridline::engine::{Features, TableOptions};
use serde::Deserialize;

use super::super::resolved::IdentityMode;
use super::super::util::{non_empty, normalize_page_sizes, sanitize_fields};
use crate::cli::CliArgs;

const DEFAULT_ID_FIELD: &str = "id";

/// `[table]` values prior to validation. Unset flags fall back to the
/// preset's layout or the engine defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) preset: Option<Preset>,
	pub(super) id_field: Option<String>,
	pub(super) positional_ids: Option<bool>,
	pub(super) columns: Option<Vec<String>>,
	pub(super) search_column: Option<String>,
	pub(super) page_size: Option<usize>,
	pub(super) page_size_options: Option<Vec<usize>>,
	pub(super) selection: Option<bool>,
	pub(super) drag_and_drop: Option<bool>,
	pub(super) pagination: Option<bool>,
	pub(super) sorting: Option<bool>,
	pub(super) filtering: Option<bool>,
	pub(super) column_visibility: Option<bool>,
	pub(super) empty_icon: Option<String>,
	pub(super) empty_message: Option<String>,
}

pub(super) struct TableResolution {
	pub(super) preset: Preset,
	pub(super) identity: IdentityMode,
	pub(super) columns: Vec<String>,
	pub(super) search_column: Option<String>,
	pub(super) features: Features,
	pub(super) page_size: usize,
	pub(super) page_size_options: Vec<usize>,
	pub(super) empty_icon: Option<String>,
	pub(super) empty_message: Option<String>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(preset) = cli.preset {
			self.preset = Some(preset.preset());
		}
		if let Some(field) = cli.id_field.clone() {
			self.id_field = Some(field);
		}
		if cli.positional_ids {
			self.positional_ids = Some(true);
		}
		if let Some(columns) = &cli.columns {
			self.columns = Some(columns.clone());
		}
		if let Some(column) = cli.search_column.clone() {
			self.search_column = Some(column);
		}
		if let Some(size) = cli.page_size {
			self.page_size = Some(size);
		}
		if let Some(sizes) = &cli.page_size_options {
			self.page_size_options = Some(sizes.clone());
		}
		if cli.select {
			self.selection = Some(true);
		}
		if cli.reorder {
			self.drag_and_drop = Some(true);
		}
		if cli.no_pagination {
			self.pagination = Some(false);
		}
		if cli.no_sorting {
			self.sorting = Some(false);
		}
		if cli.no_filtering {
			self.filtering = Some(false);
		}
		if cli.no_column_menu {
			self.column_visibility = Some(false);
		}
		if let Some(message) = cli.empty_message.clone() {
			self.empty_message = Some(message);
		}
	}

	pub(super) fn finalize(self) -> TableResolution {
		let defaults = Features::default();
		let features = Features {
			drag_and_drop: self.drag_and_drop.unwrap_or(defaults.drag_and_drop),
			selection: self.selection.unwrap_or(defaults.selection),
			pagination: self.pagination.unwrap_or(defaults.pagination),
			column_visibility: self.column_visibility.unwrap_or(defaults.column_visibility),
			sorting: self.sorting.unwrap_or(defaults.sorting),
			filtering: self.filtering.unwrap_or(defaults.filtering),
		};
		let identity = if self.positional_ids.unwrap_or(false) {
			IdentityMode::Positional
		} else {
			IdentityMode::Field(
				self.id_field
					.map(|field| field.trim().to_string())
					.unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
			)
		};
		let options = TableOptions::default();

		TableResolution {
			preset: self.preset.unwrap_or_default(),
			identity,
			columns: self.columns.map(sanitize_fields).unwrap_or_default(),
			search_column: non_empty(self.search_column),
			features,
			page_size: self.page_size.unwrap_or(options.page_size),
			page_size_options: self
				.page_size_options
				.map(normalize_page_sizes)
				.unwrap_or(options.page_size_options),
			empty_icon: non_empty(self.empty_icon),
			empty_message: non_empty(self.empty_message),
		}
	}
}
