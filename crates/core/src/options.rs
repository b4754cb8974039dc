use serde::{Deserialize, Serialize};

use crate::actions::ToolbarAction;
use crate::column::ColumnId;
use crate::column::assembly::StructuralColumns;
use crate::error::TableError;
use crate::state::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, TableState};
use crate::tabs::TabDef;

/// Feature switches. A disabled feature freezes its state slice at the default
/// and turns its interactions into no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
	pub drag_and_drop: bool,
	pub selection: bool,
	pub pagination: bool,
	pub column_visibility: bool,
	pub sorting: bool,
	pub filtering: bool,
}

impl Default for Features {
	fn default() -> Self {
		Self {
			drag_and_drop: false,
			selection: false,
			pagination: true,
			column_visibility: true,
			sorting: true,
			filtering: true,
		}
	}
}

impl Features {
	#[must_use]
	pub fn structural_columns(&self) -> StructuralColumns {
		StructuralColumns {
			drag_handle: self.drag_and_drop,
			selection: self.selection,
		}
	}
}

/// Everything besides data, columns and identity that configures a table.
#[derive(Debug, Clone)]
pub struct TableOptions {
	pub features: Features,
	pub page_size: usize,
	pub page_size_options: Vec<usize>,
	pub loading: bool,
	pub empty_state_icon: Option<String>,
	pub empty_state_message: Option<String>,
	/// Restrict the global filter to one column instead of every visible one.
	pub search_column: Option<ColumnId>,
	pub tabs: Vec<TabDef>,
	pub default_tab: Option<String>,
	pub actions: Vec<ToolbarAction>,
	/// Previously persisted state to start from.
	pub initial_state: Option<TableState>,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			features: Features::default(),
			page_size: DEFAULT_PAGE_SIZE,
			page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
			loading: false,
			empty_state_icon: None,
			empty_state_message: None,
			search_column: None,
			tabs: Vec::new(),
			default_tab: None,
			actions: Vec::new(),
			initial_state: None,
		}
	}
}

impl TableOptions {
	pub fn validate(&self) -> Result<(), TableError> {
		if self.page_size == 0 {
			return Err(TableError::InvalidPageSize { size: 0 });
		}
		if self.page_size_options.is_empty() {
			return Err(TableError::EmptyPageSizeOptions);
		}
		if self.page_size_options.contains(&0) {
			return Err(TableError::InvalidPageSize { size: 0 });
		}
		Ok(())
	}

	/// The state a table (or a tab visited for the first time) starts from.
	pub(crate) fn fresh_state(&self) -> TableState {
		TableState::with_page_size(self.page_size)
	}
}
