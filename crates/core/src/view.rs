//! Renderer-facing snapshot of a table.

use std::fmt;

use crate::column::{ColumnId, ColumnKind};
use crate::record::RowId;
use crate::state::{CheckState, SortDirection};

/// Number of placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 5;
pub const DEFAULT_EMPTY_ICON: &str = "∅";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found for your selection.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
	pub column: ColumnId,
	pub kind: ColumnKind,
	pub label: String,
	pub sort: Option<SortDirection>,
	pub can_sort: bool,
	pub size: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
	pub id: RowId,
	/// Position in the working copy.
	pub index: usize,
	pub selected: bool,
	pub cells: Vec<String>,
}

/// What the table body shows. Loading wins over empty, empty over rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
	Loading { rows: usize },
	Empty { icon: String, message: String },
	Rows(Vec<RowView>),
}

impl TableBody {
	pub fn rows(&self) -> &[RowView] {
		match self {
			Self::Rows(rows) => rows,
			Self::Loading { .. } | Self::Empty { .. } => &[],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
	pub page_index: usize,
	pub page_count: usize,
	pub page_size: usize,
	pub page_size_options: Vec<usize>,
	pub can_previous: bool,
	pub can_next: bool,
}

impl PaginationControls {
	pub fn page_label(&self) -> String {
		format!("Page {} of {}", self.page_index.saturating_add(1), self.page_count)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
	pub selected: usize,
	pub filtered: usize,
}

impl fmt::Display for SelectionSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} of {} row(s) selected.", self.selected, self.filtered)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
	pub headers: Vec<HeaderCell>,
	pub body: TableBody,
	/// `None` when pagination is disabled.
	pub pagination: Option<PaginationControls>,
	/// `None` when row selection is disabled.
	pub selection: Option<SelectionSummary>,
	pub page_check: CheckState,
	pub show_column_menu: bool,
	pub global_filter: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_reads_naturally() {
		let summary = SelectionSummary {
			selected: 2,
			filtered: 12,
		};
		assert_eq!(summary.to_string(), "2 of 12 row(s) selected.");
	}

	#[test]
	fn page_label_is_one_based() {
		let controls = PaginationControls {
			page_index: 1,
			page_count: 2,
			page_size: 10,
			page_size_options: vec![10, 20],
			can_previous: true,
			can_next: false,
		};
		assert_eq!(controls.page_label(), "Page 2 of 2");
	}
}
