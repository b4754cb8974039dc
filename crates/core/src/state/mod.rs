//! Presentation state of a table, split into independently settable slices.

mod filtering;
mod pagination;
mod selection;
mod sorting;
mod visibility;

use serde::{Deserialize, Serialize};

pub use filtering::{ColumnFilter, FiltersState, matches_filter};
pub use pagination::{
	DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, PageNavigation, PaginationState,
};
pub use selection::{CheckState, RowSelectionState};
pub use sorting::{ColumnSort, SortDirection, SortingState};
pub use visibility::VisibilityState;

use crate::column::ColumnId;
use crate::options::Features;
use crate::record::RowId;

/// The complete, serializable state of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
	pub sorting: SortingState,
	pub column_visibility: VisibilityState,
	pub row_selection: RowSelectionState,
	pub column_filters: FiltersState,
	pub pagination: PaginationState,
	pub global_filter: Option<String>,
}

impl TableState {
	#[must_use]
	pub fn with_page_size(page_size: usize) -> Self {
		Self {
			pagination: PaginationState::with_page_size(page_size),
			..Self::default()
		}
	}

	/// The state as seen by the row model once disabled features are frozen
	/// at their defaults.
	#[must_use]
	pub fn effective(&self, features: &Features) -> EffectiveState<'_> {
		let filtering = features.filtering;
		EffectiveState {
			sorting: if features.sorting {
				self.sorting.entries()
			} else {
				&[]
			},
			column_filters: if filtering {
				self.column_filters.entries()
			} else {
				&[]
			},
			global_filter: self
				.global_filter
				.as_deref()
				.map(str::trim)
				.filter(|query| filtering && !query.is_empty()),
			column_visibility: features
				.column_visibility
				.then_some(&self.column_visibility),
			row_selection: features.selection.then_some(&self.row_selection),
			pagination: features.pagination.then_some(self.pagination),
		}
	}
}

/// Borrowed view of [`TableState`] with feature flags applied.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveState<'a> {
	pub sorting: &'a [ColumnSort],
	pub column_filters: &'a [ColumnFilter],
	pub global_filter: Option<&'a str>,
	/// `None` when the visibility feature is off and every column shows.
	pub column_visibility: Option<&'a VisibilityState>,
	/// `None` when selection is off.
	pub row_selection: Option<&'a RowSelectionState>,
	/// `None` when pagination is off.
	pub pagination: Option<PaginationState>,
}

impl EffectiveState<'_> {
	pub fn is_visible(&self, column: &ColumnId) -> bool {
		self.column_visibility
			.is_none_or(|visibility| visibility.is_visible(column))
	}

	pub fn is_selected(&self, id: &RowId) -> bool {
		self.row_selection
			.is_some_and(|selection| selection.is_selected(id))
	}

	/// Pagination to apply to `row_count` filtered rows. Without pagination a
	/// single page holds every row.
	pub fn pagination_for(&self, row_count: usize) -> PaginationState {
		self.pagination
			.unwrap_or_else(|| PaginationState::with_page_size(row_count))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn state_survives_a_json_round_trip() {
		let mut state = TableState::with_page_size(20);
		state.sorting.toggle(&ColumnId::from("price"), false);
		state.column_visibility.set(&ColumnId::from("notes"), false);
		state.row_selection.set(&RowId::from("7"), true);
		state.column_filters.set(&ColumnId::from("status"), "paid");
		state.global_filter = Some("lis".into());

		let json = serde_json::to_string(&state).expect("serialize");
		let restored: TableState = serde_json::from_str(&json).expect("deserialize");
		assert_eq!(restored, state);
	}

	#[test]
	fn partial_state_fills_in_defaults() {
		let restored: TableState =
			serde_json::from_str(r#"{"pagination":{"page_size":30}}"#).expect("deserialize");
		assert_eq!(restored.pagination.page_size, 30);
		assert_eq!(restored.pagination.page_index, 0);
		assert!(restored.sorting.is_empty());
	}

	#[test]
	fn disabled_features_freeze_their_slices() {
		let mut state = TableState::default();
		state.sorting.toggle(&ColumnId::from("price"), false);
		state.column_filters.set(&ColumnId::from("status"), "paid");
		state.global_filter = Some("x".into());
		state.pagination.page_index = 3;
		let features = Features {
			sorting: false,
			filtering: false,
			pagination: false,
			..Features::default()
		};

		let effective = state.effective(&features);
		assert!(effective.sorting.is_empty());
		assert!(effective.column_filters.is_empty());
		assert_eq!(effective.global_filter, None);
		assert_eq!(effective.pagination_for(42), PaginationState::with_page_size(42));
		assert!(!effective.is_selected(&RowId::from("1")));
	}
}
