//! Builds the final column list seen by the row model.
//!
//! Structural columns (drag handle, row selection) are prepended to the
//! caller's columns depending on the enabled features. The result is memoized
//! on the identity of the base list and the flags, so repeated calls with the
//! same inputs hand back the same `Arc`.

use std::sync::Arc;

use super::{CellContext, ColumnDef, ColumnKind, DRAG_COLUMN_ID, Header, SELECT_COLUMN_ID};
use crate::state::CheckState;

/// Width, in cells, of the drag and selection columns.
pub const STRUCTURAL_COLUMN_WIDTH: u16 = 4;
const DRAG_HANDLE_SYMBOL: &str = "⠿";

/// Which synthetic columns the assembly should prepend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StructuralColumns {
	pub drag_handle: bool,
	pub selection: bool,
}

impl StructuralColumns {
	#[must_use]
	pub fn count(self) -> usize {
		usize::from(self.drag_handle) + usize::from(self.selection)
	}
}

struct Assembled<T> {
	base: Arc<[ColumnDef<T>]>,
	flags: StructuralColumns,
	columns: Arc<[ColumnDef<T>]>,
}

/// Memoizing column assembler.
pub struct ColumnAssembly<T> {
	cached: Option<Assembled<T>>,
}

impl<T> Default for ColumnAssembly<T> {
	fn default() -> Self {
		Self { cached: None }
	}
}

impl<T> ColumnAssembly<T> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Return the assembled columns, reusing the previous result when neither
	/// the base list nor the flags changed.
	pub fn assemble(
		&mut self,
		base: &Arc<[ColumnDef<T>]>,
		flags: StructuralColumns,
	) -> Arc<[ColumnDef<T>]> {
		if let Some(cached) = &self.cached
			&& Arc::ptr_eq(&cached.base, base)
			&& cached.flags == flags
		{
			return Arc::clone(&cached.columns);
		}

		let columns = assemble_columns(base, flags);
		self.cached = Some(Assembled {
			base: Arc::clone(base),
			flags,
			columns: Arc::clone(&columns),
		});
		columns
	}
}

/// Uncached assembly; the base slice is only read.
#[must_use]
pub fn assemble_columns<T>(base: &[ColumnDef<T>], flags: StructuralColumns) -> Arc<[ColumnDef<T>]> {
	let mut columns = Vec::with_capacity(base.len() + flags.count());
	if flags.drag_handle {
		columns.push(drag_column());
	}
	if flags.selection {
		columns.push(select_column());
	}
	columns.extend(base.iter().cloned());
	columns.into()
}

/// Non-sortable, non-hideable grab affordance.
#[must_use]
pub fn drag_column<T>() -> ColumnDef<T> {
	ColumnDef::structural(
		DRAG_COLUMN_ID,
		ColumnKind::DragHandle,
		Header::None,
		Arc::new(|_: &CellContext<'_, T>| DRAG_HANDLE_SYMBOL.to_string()),
		STRUCTURAL_COLUMN_WIDTH,
	)
}

/// Non-sortable, non-hideable checkbox column. The header toggles every row
/// on the current page.
#[must_use]
pub fn select_column<T>() -> ColumnDef<T> {
	ColumnDef::structural(
		SELECT_COLUMN_ID,
		ColumnKind::Select,
		Header::SelectAll,
		Arc::new(|ctx: &CellContext<'_, T>| {
			let state = if ctx.selected {
				CheckState::Checked
			} else {
				CheckState::Unchecked
			};
			state.symbol().to_string()
		}),
		STRUCTURAL_COLUMN_WIDTH,
	)
}
