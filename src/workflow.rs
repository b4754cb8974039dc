//! Load records, open them in the table and collect what the user did.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result, bail};
use gridline::engine::{ActionVariant, ColumnId, ToolbarAction};
use gridline::records::field_names;
use gridline::tui::UiLabels;
use gridline::{
	App, DataTable, JsonRecord, PresetLayout, RowId, RowIdentity, TableOptions, TableOutcome,
	TableState, read_records,
};
use serde::Serialize;

use crate::settings::{IdentityMode, ResolvedConfig};

/// What the viewer reports after the table closes.
#[derive(Debug, Serialize)]
pub(crate) struct ViewerOutcome {
	pub(crate) accepted: bool,
	/// Selected rows matching the final filters, in data order.
	pub(crate) selected: Vec<RowId>,
	/// Row under the cursor at exit.
	pub(crate) current: Option<RowId>,
	/// New row order when at least one drag landed.
	pub(crate) reordered: Option<Vec<RowId>>,
	/// Toolbar actions the user pressed, in order.
	pub(crate) triggered: Vec<String>,
	pub(crate) state: TableState,
}

impl ViewerOutcome {
	pub(crate) fn from_table(
		outcome: TableOutcome<JsonRecord>,
		identity: &RowIdentity<JsonRecord>,
	) -> Self {
		let reordered = outcome
			.reordered
			.then(|| identity.ids_for(&outcome.data));
		Self {
			accepted: outcome.accepted,
			selected: outcome.selected,
			current: outcome.current,
			reordered,
			triggered: outcome.triggered,
			state: outcome.state,
		}
	}
}

pub(crate) struct ViewerWorkflow {
	config: ResolvedConfig,
	records: Vec<JsonRecord>,
}

impl ViewerWorkflow {
	/// Read the input named by `config` (stdin when there is none).
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let records = match &config.input {
			Some(path) => {
				let file = File::open(path)
					.with_context(|| format!("failed to open {}", path.display()))?;
				read_records(BufReader::new(file))
					.with_context(|| format!("failed to read records from {}", path.display()))?
			}
			None => read_records(io::stdin().lock()).context("failed to read records from stdin")?,
		};
		log::info!("loaded {} records", records.len());
		Ok(Self { config, records })
	}

	pub(crate) fn run(self) -> Result<ViewerOutcome> {
		let theme = self.config.theme();
		let (table, identity, labels) = build_table(&self.config, self.records)?;
		let outcome = App::new(table)
			.with_labels(labels)
			.with_theme(theme)
			.run()?;
		log::info!(
			"table closed (accepted: {}, selected: {})",
			outcome.accepted,
			outcome.selected.len()
		);
		Ok(ViewerOutcome::from_table(outcome, &identity))
	}
}

/// Turn the resolved configuration and the records into a ready table, the
/// identity it uses and the labels to draw it with.
pub(crate) fn build_table(
	config: &ResolvedConfig,
	records: Vec<JsonRecord>,
) -> Result<(DataTable<JsonRecord>, RowIdentity<JsonRecord>, UiLabels)> {
	let mut layout = config.preset.layout(&field_names(&records));
	layout.restrict_columns(&config.columns);
	let search_column = search_column(config, &layout);
	let identity = identity_for(&config.identity, &records)?;

	let options = TableOptions {
		features: config.features,
		page_size: config.page_size,
		page_size_options: config.page_size_options.clone(),
		empty_state_icon: config.empty_icon.clone(),
		empty_state_message: config.empty_message.clone(),
		search_column: search_column.map(ColumnId::from),
		actions: layout.action.iter().map(|label| toolbar_action(label)).collect(),
		..TableOptions::default()
	};

	let table = DataTable::new(records, layout.column_defs(), identity.clone(), options)
		.context("invalid table configuration")?
		.on_data_change(|data| log::info!("rows reordered ({} records)", data.len()))
		.on_selection_change(|rows| log::debug!("{} rows selected", rows.len()));

	let mut labels = config.labels.clone();
	if labels.title.is_none() {
		labels.title = Some(layout.title.clone());
	}
	if labels.search_placeholder.is_none() {
		labels.search_placeholder = layout.search_placeholder.clone();
	}
	Ok((table, identity, labels))
}

/// An explicitly configured search column must exist; the preset's default is
/// dropped when the shown columns leave it out.
fn search_column(config: &ResolvedConfig, layout: &PresetLayout) -> Option<String> {
	if let Some(column) = &config.search_column {
		return Some(column.clone());
	}
	let column = layout.search_column.clone()?;
	if layout.columns.iter().any(|shown| shown.field == column) {
		Some(column)
	} else {
		log::debug!("preset search column '{column}' is not shown, searching every column");
		None
	}
}

fn identity_for(mode: &IdentityMode, records: &[JsonRecord]) -> Result<RowIdentity<JsonRecord>> {
	let field = match mode {
		IdentityMode::Positional => return Ok(RowIdentity::positional()),
		IdentityMode::Field(field) => field.clone(),
	};
	if let Some(index) = records.iter().position(|record| record.id(&field).is_none()) {
		bail!(
			"record {index} has no usable `{field}` field; \
			 choose another with --id-field or pass --positional-ids"
		);
	}
	Ok(RowIdentity::keyed(move |record: &JsonRecord| {
		record.id(&field).unwrap_or_else(|| RowId::new(""))
	}))
}

fn toolbar_action(label: &str) -> ToolbarAction {
	let name = label.to_string();
	ToolbarAction::new(label)
		.icon("+")
		.variant(ActionVariant::Default)
		.on_click(move || log::info!("'{name}' requested from the toolbar"))
}

#[cfg(test)]
mod tests {
	use gridline::engine::{Features, TableBody};
	use gridline::{Preset, parse_records};
	use serde_json::json;

	use super::*;

	fn config(preset: Preset) -> ResolvedConfig {
		ResolvedConfig {
			input: None,
			preset,
			identity: IdentityMode::Field("id".into()),
			columns: Vec::new(),
			search_column: None,
			features: Features::default(),
			page_size: 10,
			page_size_options: vec![10, 20],
			empty_icon: None,
			empty_message: None,
			theme_name: None,
			labels: UiLabels::default(),
			log_level: "info".into(),
		}
	}

	fn packages() -> Vec<JsonRecord> {
		parse_records(json!([
			{ "id": 1, "title": "Lisbon Getaway", "price": 1200, "rating": 4.5, "featured": true },
			{ "id": 2, "title": "Alps Hiking", "price": 900, "rating": 4.8, "featured": false },
			{ "id": 3, "title": "Bali Retreat", "price": 2100, "rating": 4.2, "featured": true },
		]))
		.expect("records")
	}

	#[test]
	fn preset_layout_drives_columns_search_and_labels() {
		let (mut table, _, labels) =
			build_table(&config(Preset::Packages), packages()).expect("table");
		assert_eq!(labels.title.as_deref(), Some("Packages"));
		assert_eq!(labels.search_placeholder.as_deref(), Some("Search packages..."));
		assert_eq!(table.actions()[0].caption(), "+ Add Package");

		let view = table.view();
		assert_eq!(view.headers[0].label, "Package Name ↕");
		let TableBody::Rows(rows) = view.body else {
			panic!("expected rows");
		};
		assert_eq!(rows[0].cells[4], "$1,200");
		assert_eq!(rows[0].cells[6], "Yes");

		assert!(table.set_global_filter(Some("bali".into())));
		assert_eq!(table.page_ids(), vec![RowId::from("3")]);
	}

	#[test]
	fn restricted_columns_drop_a_hidden_preset_search_column() {
		let mut config = config(Preset::Packages);
		config.columns = vec!["price".into()];
		let (table, _, _) = build_table(&config, packages()).expect("table");
		assert!(table.options().search_column.is_none());
		assert_eq!(table.view().headers.len(), 1);
	}

	#[test]
	fn explicit_search_column_must_exist() {
		let mut config = config(Preset::Generic);
		config.search_column = Some("missing".into());
		assert!(build_table(&config, packages()).is_err());
	}

	#[test]
	fn records_without_ids_need_positional_mode() {
		let records = parse_records(json!([{ "name": "a" }, { "name": "b" }])).expect("records");
		let error = build_table(&config(Preset::Generic), records.clone()).unwrap_err();
		assert!(error.to_string().contains("--positional-ids"));

		let mut config = config(Preset::Generic);
		config.identity = IdentityMode::Positional;
		let (table, identity, labels) = build_table(&config, records).expect("table");
		assert!(identity.is_positional());
		assert_eq!(table.ids(), &[RowId::from(0usize), RowId::from(1usize)]);
		assert_eq!(labels.title.as_deref(), Some("Records"));
	}

	#[test]
	fn outcome_reports_the_new_order_only_after_a_reorder() {
		let (table, identity, _) =
			build_table(&config(Preset::Generic), packages()).expect("table");
		let mut data = table.into_data();
		data.swap(0, 2);
		let outcome = TableOutcome {
			accepted: true,
			selected: vec![RowId::from("2")],
			current: Some(RowId::from("2")),
			data,
			reordered: true,
			state: TableState::default(),
			triggered: vec!["Add Package".into()],
		};
		let viewer = ViewerOutcome::from_table(outcome, &identity);
		assert_eq!(
			viewer.reordered,
			Some(vec![RowId::from("3"), RowId::from("2"), RowId::from("1")])
		);
		assert_eq!(viewer.triggered, vec!["Add Package"]);
	}
}
