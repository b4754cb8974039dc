//! Headless engine behind the `gridline` data table.
//!
//! A [`DataTable`] owns the presentation state of one table (sorting,
//! filtering, pagination, row selection, column visibility and optional
//! drag-and-drop reordering) over an arbitrary record type `T`. It never
//! renders anything itself: callers read a [`TableView`] and draw it with
//! whatever front-end they like, then feed interactions back through the
//! table's setters.

pub mod actions;
pub mod column;
mod error;
pub mod model;
pub mod options;
pub mod record;
pub mod reorder;
pub mod search;
pub mod state;
mod table;
pub mod tabs;
pub mod view;

pub use actions::{ActionVariant, ToolbarAction};
pub use column::assembly::{ColumnAssembly, StructuralColumns};
pub use column::{CellContext, ColumnDef, ColumnId, ColumnKind, Header, HeaderContext};
pub use error::TableError;
pub use model::RowModel;
pub use options::{Features, TableOptions};
pub use record::{CellValue, RowId, RowIdentity};
pub use reorder::{DragEvent, DragSensor, KeyboardDrag, PointerDrag, ReorderOutcome, RowBounds};
pub use state::{
	CheckState, ColumnFilter, ColumnSort, FiltersState, PageNavigation, PaginationState,
	RowSelectionState, SortDirection, SortingState, TableState, VisibilityState,
};
pub use table::{ColumnToggle, DataTable};
pub use tabs::{TabBody, TabDef, TabSet};
pub use view::{
	HeaderCell, PaginationControls, RowView, SelectionSummary, TableBody, TableView,
};
