use gridline_core::{RowId, TableState};

/// Result of an interactive session, handed back when the user exits.
#[derive(Debug)]
pub struct TableOutcome<T> {
	/// `true` when the user confirmed with Enter, `false` when cancelled.
	pub accepted: bool,
	/// Ids of the selected rows matching the current filters, in data order.
	pub selected: Vec<RowId>,
	/// Row under the cursor when the session ended.
	pub current: Option<RowId>,
	/// Working copy of the data, reordered if any drag landed.
	pub data: Vec<T>,
	/// Whether at least one drag changed the row order.
	pub reordered: bool,
	/// Table state at exit, suitable for persisting.
	pub state: TableState,
	/// Labels of toolbar actions triggered during the session, in order.
	pub triggered: Vec<String>,
}

/// How the user left the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
	Accept,
	Cancel,
}
