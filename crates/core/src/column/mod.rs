//! Column definitions: identity, header/cell rendering, and behaviour flags.

pub mod assembly;

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::record::{CellValue, RowId};
use crate::state::{CheckState, SortDirection};

/// Identifier of the synthetic drag-handle column.
pub const DRAG_COLUMN_ID: &str = "drag";
/// Identifier of the synthetic row-selection column.
pub const SELECT_COLUMN_ID: &str = "select";

/// Identifier of a column, unique within a table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ColumnId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for ColumnId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ColumnId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl From<String> for ColumnId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// What a column is structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
	/// Bound to record data through an accessor.
	Data,
	/// Caller-rendered column without an accessor (row actions and the like).
	Display,
	/// Synthetic grab affordance prepended when reordering is enabled.
	DragHandle,
	/// Synthetic checkbox prepended when row selection is enabled.
	Select,
}

impl ColumnKind {
	#[must_use]
	pub fn is_structural(self) -> bool {
		matches!(self, Self::DragHandle | Self::Select)
	}
}

/// How a column header is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
	None,
	Static(String),
	/// A label followed by the current sort indicator.
	Sortable(String),
	/// Tri-state "select all rows on this page" checkbox.
	SelectAll,
}

/// Everything a header needs to render itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContext {
	pub sort: Option<SortDirection>,
	pub can_sort: bool,
	pub page_check: CheckState,
}

impl Header {
	#[must_use]
	pub fn render(&self, context: &HeaderContext) -> String {
		match self {
			Self::None => String::new(),
			Self::Static(label) => label.clone(),
			Self::Sortable(label) => {
				if !context.can_sort {
					return label.clone();
				}
				let indicator = match context.sort {
					Some(SortDirection::Asc) => "↑",
					Some(SortDirection::Desc) => "↓",
					None => "↕",
				};
				format!("{label} {indicator}")
			}
			Self::SelectAll => context.page_check.symbol().to_string(),
		}
	}

	/// Plain label without any state decoration.
	#[must_use]
	pub fn label(&self) -> Option<&str> {
		match self {
			Self::Static(label) | Self::Sortable(label) => Some(label),
			Self::None | Self::SelectAll => None,
		}
	}
}

/// Data handed to a cell renderer.
pub struct CellContext<'a, T> {
	pub row: &'a T,
	pub row_id: &'a RowId,
	pub row_index: usize,
	pub column: &'a ColumnId,
	pub value: CellValue,
	pub selected: bool,
}

pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type CellRenderer<T> = Arc<dyn Fn(&CellContext<'_, T>) -> String + Send + Sync>;

/// Header/cell rendering and behaviour contract for one logical field.
pub struct ColumnDef<T> {
	id: ColumnId,
	kind: ColumnKind,
	header: Header,
	accessor: Option<Accessor<T>>,
	cell: Option<CellRenderer<T>>,
	enable_sorting: bool,
	enable_hiding: bool,
	size: Option<u16>,
}

impl<T> ColumnDef<T> {
	/// A data-bound column reading its value through `accessor`.
	pub fn accessor<F, V>(id: impl Into<ColumnId>, accessor: F) -> Self
	where
		F: Fn(&T) -> V + Send + Sync + 'static,
		V: Into<CellValue>,
	{
		let id = id.into();
		Self {
			header: Header::Static(id.to_string()),
			id,
			kind: ColumnKind::Data,
			accessor: Some(Arc::new(move |row: &T| -> CellValue { accessor(row).into() })),
			cell: None,
			enable_sorting: true,
			enable_hiding: true,
			size: None,
		}
	}

	/// A column without an accessor whose cells are produced by [`Self::cell`].
	pub fn display(id: impl Into<ColumnId>) -> Self {
		Self {
			id: id.into(),
			kind: ColumnKind::Display,
			header: Header::None,
			accessor: None,
			cell: None,
			enable_sorting: false,
			enable_hiding: true,
			size: None,
		}
	}

	pub(crate) fn structural(
		id: &str,
		kind: ColumnKind,
		header: Header,
		cell: CellRenderer<T>,
		size: u16,
	) -> Self {
		Self {
			id: ColumnId::from(id),
			kind,
			header,
			accessor: None,
			cell: Some(cell),
			enable_sorting: false,
			enable_hiding: false,
			size: Some(size),
		}
	}

	#[must_use]
	pub fn header(mut self, label: impl Into<String>) -> Self {
		self.header = Header::Static(label.into());
		self
	}

	/// Use a header that shows the column's sort state next to `label`.
	#[must_use]
	pub fn sortable_header(mut self, label: impl Into<String>) -> Self {
		self.header = Header::Sortable(label.into());
		self
	}

	#[must_use]
	pub fn without_header(mut self) -> Self {
		self.header = Header::None;
		self
	}

	#[must_use]
	pub fn cell<F>(mut self, render: F) -> Self
	where
		F: Fn(&CellContext<'_, T>) -> String + Send + Sync + 'static,
	{
		self.cell = Some(Arc::new(render));
		self
	}

	#[must_use]
	pub fn enable_sorting(mut self, enabled: bool) -> Self {
		self.enable_sorting = enabled;
		self
	}

	#[must_use]
	pub fn enable_hiding(mut self, enabled: bool) -> Self {
		self.enable_hiding = enabled;
		self
	}

	#[must_use]
	pub fn size(mut self, width: u16) -> Self {
		self.size = Some(width);
		self
	}

	pub fn id(&self) -> &ColumnId {
		&self.id
	}

	pub fn kind(&self) -> ColumnKind {
		self.kind
	}

	pub fn header_def(&self) -> &Header {
		&self.header
	}

	pub fn fixed_size(&self) -> Option<u16> {
		self.size
	}

	pub fn has_accessor(&self) -> bool {
		self.accessor.is_some()
	}

	/// Sorting needs both the flag and something to sort by.
	pub fn can_sort(&self) -> bool {
		self.enable_sorting && self.accessor.is_some()
	}

	/// Structural columns are never hideable, whatever their flag says.
	pub fn can_hide(&self) -> bool {
		self.enable_hiding && !self.kind.is_structural()
	}

	/// Human readable name used by menus: the header label or the id.
	pub fn display_name(&self) -> String {
		self.header
			.label()
			.map(str::to_owned)
			.unwrap_or_else(|| self.id.to_string())
	}

	pub fn value(&self, row: &T) -> CellValue {
		self.accessor
			.as_ref()
			.map_or(CellValue::Empty, |accessor| accessor(row))
	}

	pub fn render_cell(&self, context: &CellContext<'_, T>) -> String {
		match &self.cell {
			Some(render) => render(context),
			None => context.value.to_string(),
		}
	}
}

impl<T> Clone for ColumnDef<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id.clone(),
			kind: self.kind,
			header: self.header.clone(),
			accessor: self.accessor.clone(),
			cell: self.cell.clone(),
			enable_sorting: self.enable_sorting,
			enable_hiding: self.enable_hiding,
			size: self.size,
		}
	}
}

impl<T> fmt::Debug for ColumnDef<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDef")
			.field("id", &self.id)
			.field("kind", &self.kind)
			.field("header", &self.header)
			.field("has_accessor", &self.accessor.is_some())
			.field("enable_sorting", &self.enable_sorting)
			.field("enable_hiding", &self.enable_hiding)
			.field("size", &self.size)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Trip {
		name: &'static str,
		nights: u32,
	}

	fn context<'a>(
		row: &'a Trip,
		id: &'a RowId,
		column: &'a ColumnId,
		value: CellValue,
	) -> CellContext<'a, Trip> {
		CellContext {
			row,
			row_id: id,
			row_index: 0,
			column,
			value,
			selected: false,
		}
	}

	#[test]
	fn accessor_columns_default_to_their_id_as_header() {
		let column = ColumnDef::accessor("name", |trip: &Trip| trip.name);
		assert_eq!(column.header_def(), &Header::Static("name".into()));
		assert!(column.can_sort());
		assert!(column.can_hide());
	}

	#[test]
	fn display_columns_cannot_sort() {
		let column = ColumnDef::<Trip>::display("actions").enable_sorting(true);
		assert!(!column.can_sort());
		assert_eq!(column.value(&Trip { name: "x", nights: 1 }), CellValue::Empty);
	}

	#[test]
	fn default_cell_renders_value_text() {
		let trip = Trip {
			name: "Lisbon",
			nights: 4,
		};
		let column = ColumnDef::accessor("nights", |trip: &Trip| trip.nights);
		let id = RowId::from("1");
		let value = column.value(&trip);
		assert_eq!(column.render_cell(&context(&trip, &id, column.id(), value)), "4");
	}

	#[test]
	fn custom_cell_renderer_wins() {
		let trip = Trip {
			name: "Lisbon",
			nights: 4,
		};
		let column = ColumnDef::accessor("nights", |trip: &Trip| trip.nights)
			.cell(|ctx| format!("{} nights in {}", ctx.value, ctx.row.name));
		let id = RowId::from("1");
		let value = column.value(&trip);
		assert_eq!(
			column.render_cell(&context(&trip, &id, column.id(), value)),
			"4 nights in Lisbon"
		);
	}

	#[test]
	fn sortable_header_shows_direction() {
		let header = Header::Sortable("Price".into());
		let mut context = HeaderContext {
			sort: None,
			can_sort: true,
			page_check: CheckState::Unchecked,
		};
		assert_eq!(header.render(&context), "Price ↕");
		context.sort = Some(SortDirection::Desc);
		assert_eq!(header.render(&context), "Price ↓");
		context.can_sort = false;
		assert_eq!(header.render(&context), "Price");
	}
}
