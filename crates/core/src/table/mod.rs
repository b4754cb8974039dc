//! The stateful table controller.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::mem;
use std::sync::Arc;

use crate::actions::ToolbarAction;
use crate::column::assembly::ColumnAssembly;
use crate::column::{CellContext, ColumnDef, ColumnId, HeaderContext};
use crate::error::TableError;
use crate::model::{RowModel, faceted_unique_values};
use crate::options::{Features, TableOptions};
use crate::record::{RowId, RowIdentity};
use crate::reorder::{DragEvent, KeyboardDrag, ReorderOutcome, array_move};
use crate::state::{
	CheckState, PageNavigation, RowSelectionState, SortDirection, SortingState, TableState,
};
use crate::tabs::{TabDef, TabSet};
use crate::view::{
	DEFAULT_EMPTY_ICON, DEFAULT_EMPTY_MESSAGE, HeaderCell, PaginationControls, RowView,
	SKELETON_ROWS, SelectionSummary, TableBody, TableView,
};

type DataChangeHandler<T> = Box<dyn FnMut(&[T])>;
type SelectionChangeHandler<T> = Box<dyn FnMut(&[&T])>;

/// An entry of the column visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnToggle {
	pub id: ColumnId,
	pub label: String,
	pub visible: bool,
}

/// Presentation state and working data of one table over records of type `T`.
///
/// All interactions are synchronous. Calls that target a disabled feature
/// are ignored and report `false`.
pub struct DataTable<T> {
	data: Vec<T>,
	ids: Vec<RowId>,
	identity: RowIdentity<T>,
	base_columns: Arc<[ColumnDef<T>]>,
	assembly: ColumnAssembly<T>,
	columns: Arc<[ColumnDef<T>]>,
	options: TableOptions,
	state: TableState,
	tabs: Option<TabSet>,
	model: RowModel,
	on_data_change: Option<DataChangeHandler<T>>,
	on_selection_change: Option<SelectionChangeHandler<T>>,
}

impl<T> DataTable<T> {
	pub fn new(
		data: Vec<T>,
		columns: impl Into<Arc<[ColumnDef<T>]>>,
		identity: RowIdentity<T>,
		mut options: TableOptions,
	) -> Result<Self, TableError> {
		options.validate()?;
		let base_columns: Arc<[ColumnDef<T>]> = columns.into();
		if let Some(search) = &options.search_column
			&& !base_columns
				.iter()
				.any(|column| column.id() == search && column.has_accessor())
		{
			return Err(TableError::unknown_column(search));
		}

		let state = match options.initial_state.take() {
			Some(state) if state.pagination.page_size == 0 => {
				return Err(TableError::InvalidPageSize { size: 0 });
			}
			Some(state) => state,
			None => options.fresh_state(),
		};
		let tabs = if options.tabs.is_empty() {
			None
		} else {
			Some(TabSet::from_tabs(
				options.tabs.clone(),
				options.default_tab.as_deref(),
			)?)
		};

		let mut assembly = ColumnAssembly::new();
		let columns = assembly.assemble(&base_columns, options.features.structural_columns());
		let ids = derive_ids(&identity, &data);
		let mut table = Self {
			data,
			ids,
			identity,
			base_columns,
			assembly,
			columns,
			options,
			state,
			tabs,
			model: RowModel::default(),
			on_data_change: None,
			on_selection_change: None,
		};
		table.rebuild();
		Ok(table)
	}

	/// Called with the full reordered data after every committed drag.
	#[must_use]
	pub fn on_data_change(mut self, handler: impl FnMut(&[T]) + 'static) -> Self {
		self.on_data_change = Some(Box::new(handler));
		self
	}

	/// Called with the selected rows (within the current filters) after every
	/// selection change.
	#[must_use]
	pub fn on_selection_change(mut self, handler: impl FnMut(&[&T]) + 'static) -> Self {
		self.on_selection_change = Some(Box::new(handler));
		self
	}

	pub fn data(&self) -> &[T] {
		&self.data
	}

	pub fn into_data(self) -> Vec<T> {
		self.data
	}

	/// Row ids of the working copy, in order.
	pub fn ids(&self) -> &[RowId] {
		&self.ids
	}

	pub fn identity(&self) -> &RowIdentity<T> {
		&self.identity
	}

	/// Assembled columns, structural ones included.
	pub fn columns(&self) -> &Arc<[ColumnDef<T>]> {
		&self.columns
	}

	pub fn state(&self) -> &TableState {
		&self.state
	}

	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	pub fn features(&self) -> Features {
		self.options.features
	}

	pub fn model(&self) -> &RowModel {
		&self.model
	}

	pub fn actions(&self) -> &[ToolbarAction] {
		&self.options.actions
	}

	pub fn page_size_options(&self) -> &[usize] {
		&self.options.page_size_options
	}

	pub fn is_loading(&self) -> bool {
		self.options.loading
	}

	/// Replace the working copy. Row ids are derived again; state is kept.
	pub fn set_data(&mut self, data: Vec<T>) {
		self.data = data;
		self.ids = derive_ids(&self.identity, &self.data);
		self.rebuild();
	}

	pub fn set_columns(&mut self, columns: impl Into<Arc<[ColumnDef<T>]>>) {
		self.base_columns = columns.into();
		self.reassemble();
	}

	pub fn set_features(&mut self, features: Features) {
		self.options.features = features;
		self.reassemble();
	}

	pub fn set_loading(&mut self, loading: bool) {
		self.options.loading = loading;
	}

	/// Replace the whole state, e.g. with one restored from disk.
	pub fn set_state(&mut self, state: TableState) -> Result<(), TableError> {
		if state.pagination.page_size == 0 {
			return Err(TableError::InvalidPageSize { size: 0 });
		}
		self.state = state;
		self.rebuild();
		self.emit_selection();
		Ok(())
	}

	fn reassemble(&mut self) {
		self.columns = self
			.assembly
			.assemble(&self.base_columns, self.options.features.structural_columns());
		self.rebuild();
	}

	fn rebuild(&mut self) {
		let effective = self.state.effective(&self.options.features);
		self.model = RowModel::build(
			&self.data,
			&self.columns,
			&effective,
			self.options.search_column.as_ref(),
		);
	}

	fn column(&self, id: &ColumnId) -> Result<&ColumnDef<T>, TableError> {
		self.columns
			.iter()
			.find(|column| column.id() == id)
			.ok_or_else(|| TableError::unknown_column(id))
	}

	/// Columns that are currently shown, in display order.
	pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnDef<T>> {
		let effective = self.state.effective(&self.options.features);
		self.columns
			.iter()
			.filter(move |column| effective.is_visible(column.id()))
	}

	// Sorting

	/// Cycle `column` through ascending, descending and unsorted, replacing
	/// any other sort.
	pub fn toggle_sorting(&mut self, column: &ColumnId) -> Result<bool, TableError> {
		self.apply_sort_toggle(column, false)
	}

	/// Like [`Self::toggle_sorting`] but keeps the other sorted columns.
	pub fn toggle_sorting_multi(&mut self, column: &ColumnId) -> Result<bool, TableError> {
		self.apply_sort_toggle(column, true)
	}

	fn apply_sort_toggle(&mut self, column: &ColumnId, multi: bool) -> Result<bool, TableError> {
		let sortable = self.column(column)?.can_sort();
		if !self.options.features.sorting || !sortable {
			log::debug!("ignoring sort toggle on '{column}'");
			return Ok(false);
		}
		let direction = self.state.sorting.toggle(column, multi);
		log::debug!(
			"sorting '{column}' {}",
			direction.map_or("cleared", SortDirection::label)
		);
		self.rebuild();
		Ok(true)
	}

	pub fn set_sorting(&mut self, sorting: SortingState) -> bool {
		if !self.options.features.sorting {
			log::debug!("sorting is disabled");
			return false;
		}
		self.state.sorting = sorting;
		self.rebuild();
		true
	}

	pub fn sort_direction(&self, column: &ColumnId) -> Option<SortDirection> {
		if !self.options.features.sorting {
			return None;
		}
		self.state.sorting.direction_of(column)
	}

	// Filtering

	/// Set or (with a blank value) clear the filter on `column`. The page
	/// index is left alone.
	pub fn set_column_filter(
		&mut self,
		column: &ColumnId,
		value: impl Into<String>,
	) -> Result<bool, TableError> {
		let filterable = self.column(column)?.has_accessor();
		if !self.options.features.filtering || !filterable {
			log::debug!("ignoring filter on '{column}'");
			return Ok(false);
		}
		self.state.column_filters.set(column, value);
		self.rebuild();
		self.emit_selection();
		Ok(true)
	}

	pub fn clear_column_filters(&mut self) -> bool {
		if !self.options.features.filtering || self.state.column_filters.is_empty() {
			return false;
		}
		self.state.column_filters.clear();
		self.rebuild();
		self.emit_selection();
		true
	}

	/// Fuzzy search across the visible data columns, or the configured
	/// search column only.
	pub fn set_global_filter(&mut self, query: Option<String>) -> bool {
		if !self.options.features.filtering {
			log::debug!("filtering is disabled");
			return false;
		}
		let query = query.filter(|query| !query.is_empty());
		if query == self.state.global_filter {
			return false;
		}
		self.state.global_filter = query;
		self.rebuild();
		self.emit_selection();
		true
	}

	/// Distinct values of `column` and how many rows carry each, counted over
	/// the rows passing every other filter.
	pub fn faceted_unique_values(
		&self,
		column: &ColumnId,
	) -> Result<BTreeMap<String, usize>, TableError> {
		let column = self.column(column)?;
		let effective = self.state.effective(&self.options.features);
		Ok(faceted_unique_values(
			&self.data,
			&self.columns,
			&effective,
			self.options.search_column.as_ref(),
			column,
		))
	}

	// Pagination

	pub fn navigate(&mut self, navigation: PageNavigation) -> bool {
		if !self.options.features.pagination {
			log::debug!("pagination is disabled");
			return false;
		}
		let rows = self.model.filtered_count();
		if !self.state.pagination.navigate(navigation, rows) {
			return false;
		}
		self.rebuild();
		true
	}

	pub fn set_page_index(&mut self, page_index: usize) -> bool {
		if !self.options.features.pagination || page_index == self.state.pagination.page_index {
			return false;
		}
		self.state.pagination.page_index = page_index;
		self.rebuild();
		true
	}

	/// Change the page size, keeping the first row of the current page on
	/// screen. The size must be one of the page size options.
	pub fn set_page_size(&mut self, page_size: usize) -> Result<bool, TableError> {
		if page_size == 0 {
			return Err(TableError::InvalidPageSize { size: page_size });
		}
		if !self.options.page_size_options.contains(&page_size) {
			return Err(TableError::UnsupportedPageSize { size: page_size });
		}
		if !self.options.features.pagination {
			log::debug!("pagination is disabled");
			return Ok(false);
		}
		if page_size == self.state.pagination.page_size {
			return Ok(false);
		}
		self.state.pagination.set_page_size(page_size);
		self.rebuild();
		Ok(true)
	}

	// Column visibility

	/// Entries for the column menu: hideable data columns only.
	pub fn column_toggles(&self) -> Vec<ColumnToggle> {
		self.columns
			.iter()
			.filter(|column| column.has_accessor() && column.can_hide())
			.map(|column| ColumnToggle {
				id: column.id().clone(),
				label: column.display_name(),
				visible: self.state.column_visibility.is_visible(column.id()),
			})
			.collect()
	}

	pub fn toggle_column_visibility(&mut self, column: &ColumnId) -> Result<bool, TableError> {
		let visible = self.state.column_visibility.is_visible(column);
		self.set_column_visibility(column, !visible)
	}

	pub fn set_column_visibility(
		&mut self,
		column: &ColumnId,
		visible: bool,
	) -> Result<bool, TableError> {
		let hideable = self.column(column)?.can_hide();
		if !self.options.features.column_visibility || !hideable {
			log::debug!("ignoring visibility change on '{column}'");
			return Ok(false);
		}
		if self.state.column_visibility.is_visible(column) == visible {
			return Ok(false);
		}
		self.state.column_visibility.set(column, visible);
		self.rebuild();
		Ok(true)
	}

	// Selection

	pub fn is_selected(&self, id: &RowId) -> bool {
		self.options.features.selection && self.state.row_selection.is_selected(id)
	}

	pub fn toggle_row_selected(&mut self, id: &RowId, selected: bool) -> bool {
		if !self.options.features.selection {
			log::debug!("selection is disabled");
			return false;
		}
		if !self.ids.contains(id) {
			log::debug!("ignoring selection of unknown row '{id}'");
			return false;
		}
		if !self.state.row_selection.set(id, selected) {
			return false;
		}
		self.emit_selection();
		true
	}

	/// Select or deselect every row on the current page.
	pub fn toggle_all_page_rows_selected(&mut self, selected: bool) -> bool {
		if !self.options.features.selection {
			log::debug!("selection is disabled");
			return false;
		}
		let mut changed = false;
		for &index in self.model.page_rows() {
			changed |= self.state.row_selection.set(&self.ids[index], selected);
		}
		if changed {
			self.emit_selection();
		}
		changed
	}

	pub fn clear_selection(&mut self) -> bool {
		if !self.options.features.selection || !self.state.row_selection.clear() {
			return false;
		}
		self.emit_selection();
		true
	}

	/// Aggregate check state of the rows on the current page.
	pub fn page_check_state(&self) -> CheckState {
		if !self.options.features.selection {
			return CheckState::Unchecked;
		}
		let page = self.model.page_rows();
		let selected = page
			.iter()
			.filter(|&&index| self.state.row_selection.is_selected(&self.ids[index]))
			.count();
		CheckState::from_counts(selected, page.len())
	}

	/// Selected rows that pass the current filters, in working-copy order.
	pub fn selected_rows(&self) -> Vec<&T> {
		selected_in(
			&self.data,
			&self.ids,
			&self.model,
			&self.state.row_selection,
			self.options.features,
		)
	}

	pub fn selection_summary(&self) -> Option<SelectionSummary> {
		self.options.features.selection.then(|| SelectionSummary {
			selected: self.selected_rows().len(),
			filtered: self.model.filtered_count(),
		})
	}

	fn emit_selection(&mut self) {
		if !self.options.features.selection {
			return;
		}
		let Some(handler) = self.on_selection_change.as_mut() else {
			return;
		};
		let rows = selected_in(
			&self.data,
			&self.ids,
			&self.model,
			&self.state.row_selection,
			self.options.features,
		);
		handler(&rows);
	}

	// Reordering

	/// Ids of the rows on the current page, in display order.
	pub fn page_ids(&self) -> Vec<RowId> {
		self.model
			.page_rows()
			.iter()
			.map(|&index| self.ids[index].clone())
			.collect()
	}

	/// Start a keyboard drag on `id`. `None` when reordering is off or the row
	/// is not on the current page.
	pub fn start_keyboard_drag(&self, id: &RowId) -> Option<KeyboardDrag> {
		if !self.options.features.drag_and_drop {
			return None;
		}
		KeyboardDrag::pick_up(&self.page_ids(), id)
	}

	/// Commit a finished drag from any sensor.
	pub fn handle_drag_end(&mut self, event: DragEvent) -> ReorderOutcome {
		if !self.options.features.drag_and_drop {
			log::debug!("drag and drop is disabled");
			return ReorderOutcome::Unchanged;
		}
		let Some(over) = event.over.as_ref().filter(|over| **over != event.active) else {
			return ReorderOutcome::Unchanged;
		};
		let from = self.ids.iter().position(|id| *id == event.active);
		let to = self.ids.iter().position(|id| id == over);
		let (Some(from), Some(to)) = (from, to) else {
			log::debug!("drag between unknown rows '{}' and '{over}'", event.active);
			return ReorderOutcome::Unchanged;
		};

		let data = mem::take(&mut self.data);
		self.data = array_move(data, from, to);
		self.ids = derive_ids(&self.identity, &self.data);
		self.rebuild();
		log::debug!("moved row '{}' from {from} to {to} ({:?})", event.active, event.sensor);

		if let Some(handler) = self.on_data_change.as_mut() {
			handler(&self.data);
		}
		ReorderOutcome::Moved { from, to }
	}

	// Tabs

	pub fn tabs(&self) -> Option<&TabSet> {
		self.tabs.as_ref()
	}

	pub fn active_tab(&self) -> Option<&TabDef> {
		self.tabs.as_ref().map(TabSet::active)
	}

	/// Whether the table itself is on screen, as opposed to a static tab.
	pub fn shows_table(&self) -> bool {
		self.tabs.as_ref().is_none_or(TabSet::is_table_active)
	}

	/// Activate the tab registered as `value`. Each tab keeps its own state.
	pub fn switch_tab(&mut self, value: &str) -> Result<bool, TableError> {
		let Some(tabs) = self.tabs.as_mut() else {
			return Err(TableError::UnknownTab {
				value: value.to_owned(),
			});
		};
		let options = &self.options;
		if !tabs.switch(value, &mut self.state, || options.fresh_state())? {
			return Ok(false);
		}
		self.rebuild();
		self.emit_selection();
		Ok(true)
	}

	// View

	pub fn view(&self) -> TableView {
		let features = self.options.features;
		let effective = self.state.effective(&features);
		let page_check = self.page_check_state();
		let visible: Vec<&ColumnDef<T>> = self.visible_columns().collect();

		let headers = visible
			.iter()
			.map(|column| {
				let sort = effective
					.sorting
					.iter()
					.find(|sort| &sort.column == column.id())
					.map(|sort| sort.direction);
				let can_sort = features.sorting && column.can_sort();
				HeaderCell {
					column: column.id().clone(),
					kind: column.kind(),
					label: column.header_def().render(&HeaderContext {
						sort,
						can_sort,
						page_check,
					}),
					sort,
					can_sort,
					size: column.fixed_size(),
				}
			})
			.collect();

		let body = if self.options.loading {
			TableBody::Loading {
				rows: SKELETON_ROWS,
			}
		} else if self.model.page_rows().is_empty() {
			TableBody::Empty {
				icon: self
					.options
					.empty_state_icon
					.clone()
					.unwrap_or_else(|| DEFAULT_EMPTY_ICON.to_string()),
				message: self
					.options
					.empty_state_message
					.clone()
					.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
			}
		} else {
			TableBody::Rows(
				self.model
					.page_rows()
					.iter()
					.map(|&index| self.row_view(index, &visible))
					.collect(),
			)
		};

		let model = &self.model;
		let pagination = features.pagination.then(|| PaginationControls {
			page_index: model.pagination().page_index,
			page_count: model.page_count(),
			page_size: model.pagination().page_size,
			page_size_options: self.options.page_size_options.clone(),
			can_previous: model.can_previous(),
			can_next: model.can_next(),
		});

		TableView {
			headers,
			body,
			pagination,
			selection: self.selection_summary(),
			page_check,
			show_column_menu: features.column_visibility,
			global_filter: effective.global_filter.map(str::to_owned),
		}
	}

	fn row_view(&self, index: usize, columns: &[&ColumnDef<T>]) -> RowView {
		let row = &self.data[index];
		let id = &self.ids[index];
		let selected = self.is_selected(id);
		let cells = columns
			.iter()
			.map(|column| {
				column.render_cell(&CellContext {
					row,
					row_id: id,
					row_index: index,
					column: column.id(),
					value: column.value(row),
					selected,
				})
			})
			.collect();
		RowView {
			id: id.clone(),
			index,
			selected,
			cells,
		}
	}
}

impl<T> fmt::Debug for DataTable<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataTable")
			.field("rows", &self.data.len())
			.field("columns", &self.columns)
			.field("identity", &self.identity)
			.field("state", &self.state)
			.field("tabs", &self.tabs)
			.finish_non_exhaustive()
	}
}

fn derive_ids<T>(identity: &RowIdentity<T>, data: &[T]) -> Vec<RowId> {
	let ids = identity.ids_for(data);
	let mut seen = HashSet::with_capacity(ids.len());
	for id in &ids {
		if !seen.insert(id) {
			log::warn!("duplicate row id '{id}'; selection and reordering will be ambiguous");
		}
	}
	ids
}

fn selected_in<'a, T>(
	data: &'a [T],
	ids: &[RowId],
	model: &RowModel,
	selection: &RowSelectionState,
	features: Features,
) -> Vec<&'a T> {
	if !features.selection || selection.is_empty() {
		return Vec::new();
	}
	let mut indices: Vec<usize> = model
		.filtered()
		.iter()
		.copied()
		.filter(|&index| selection.is_selected(&ids[index]))
		.collect();
	indices.sort_unstable();
	indices.into_iter().map(|index| &data[index]).collect()
}
