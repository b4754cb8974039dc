//! Row model pipeline: filter, then sort, then paginate.
//!
//! The model only holds indices into the table's working copy, so it can be
//! rebuilt cheaply after every state change.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Range;

use crate::column::{ColumnDef, ColumnId};
use crate::record::CellValue;
use crate::search::matching_indices;
use crate::state::{
	ColumnFilter, ColumnSort, EffectiveState, PaginationState, SortDirection, matches_filter,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowModel {
	rows: Vec<usize>,
	page: Range<usize>,
	pagination: PaginationState,
	page_count: usize,
}

impl RowModel {
	pub fn build<T>(
		data: &[T],
		columns: &[ColumnDef<T>],
		state: &EffectiveState<'_>,
		search_column: Option<&ColumnId>,
	) -> Self {
		let mut rows = filter_rows(data, columns, state, search_column, None);
		sort_rows(&mut rows, data, columns, state.sorting);

		let pagination = state.pagination_for(rows.len());
		Self {
			page: pagination.page_range(rows.len()),
			page_count: pagination.page_count(rows.len()),
			pagination,
			rows,
		}
	}

	/// Working-copy indices of every row passing the filters, in display order.
	pub fn filtered(&self) -> &[usize] {
		&self.rows
	}

	pub fn filtered_count(&self) -> usize {
		self.rows.len()
	}

	/// Working-copy indices of the rows on the current page.
	pub fn page_rows(&self) -> &[usize] {
		&self.rows[self.page.clone()]
	}

	pub fn page_count(&self) -> usize {
		self.page_count
	}

	/// Pagination actually applied, which differs from the stored slice when
	/// pagination is disabled.
	pub fn pagination(&self) -> PaginationState {
		self.pagination
	}

	pub fn can_previous(&self) -> bool {
		self.pagination.can_previous()
	}

	pub fn can_next(&self) -> bool {
		self.pagination.can_next(self.rows.len())
	}
}

/// Indices of rows passing every column filter (except `skip`) and the global
/// filter, in working-copy order.
fn filter_rows<T>(
	data: &[T],
	columns: &[ColumnDef<T>],
	state: &EffectiveState<'_>,
	search_column: Option<&ColumnId>,
	skip: Option<&ColumnId>,
) -> Vec<usize> {
	let filters: Vec<(&ColumnDef<T>, &ColumnFilter)> = state
		.column_filters
		.iter()
		.filter(|filter| Some(&filter.column) != skip)
		.filter_map(|filter| find_column(columns, &filter.column).map(|column| (column, filter)))
		.collect();

	let candidates: Vec<usize> = (0..data.len())
		.filter(|&index| {
			filters
				.iter()
				.all(|(column, filter)| matches_filter(&column.value(&data[index]), &filter.value))
		})
		.collect();

	let Some(query) = state.global_filter else {
		return candidates;
	};
	let searched: Vec<&ColumnDef<T>> = match search_column {
		Some(id) => find_column(columns, id).into_iter().collect(),
		None => columns
			.iter()
			.filter(|column| column.has_accessor() && state.is_visible(column.id()))
			.collect(),
	};
	let haystacks: Vec<String> = candidates
		.iter()
		.map(|&index| search_text(&data[index], &searched))
		.collect();
	matching_indices(query, &haystacks)
		.into_iter()
		.map(|position| candidates[position])
		.collect()
}

fn search_text<T>(row: &T, columns: &[&ColumnDef<T>]) -> String {
	columns
		.iter()
		.map(|column| column.value(row).to_string())
		.filter(|text| !text.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Stable multi-key sort. Empty cells sort last in either direction.
fn sort_rows<T>(rows: &mut [usize], data: &[T], columns: &[ColumnDef<T>], sorting: &[ColumnSort]) {
	let keys: Vec<(&ColumnDef<T>, SortDirection)> = sorting
		.iter()
		.filter_map(|sort| {
			find_column(columns, &sort.column)
				.filter(|column| column.can_sort())
				.map(|column| (column, sort.direction))
		})
		.collect();
	if keys.is_empty() {
		return;
	}

	let mut values: BTreeMap<usize, Vec<CellValue>> = BTreeMap::new();
	for &index in rows.iter() {
		let row = &data[index];
		values.insert(index, keys.iter().map(|(column, _)| column.value(row)).collect());
	}

	rows.sort_by(|a, b| {
		let (left, right) = (&values[a], &values[b]);
		keys.iter()
			.enumerate()
			.map(|(position, (_, direction))| {
				compare_cells(&left[position], &right[position], *direction)
			})
			.find(|ordering| ordering.is_ne())
			.unwrap_or(Ordering::Equal)
	});
}

fn compare_cells(left: &CellValue, right: &CellValue, direction: SortDirection) -> Ordering {
	match (left.is_empty(), right.is_empty()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => match direction {
			SortDirection::Asc => left.compare(right),
			SortDirection::Desc => right.compare(left),
		},
	}
}

fn find_column<'a, T>(columns: &'a [ColumnDef<T>], id: &ColumnId) -> Option<&'a ColumnDef<T>> {
	columns.iter().find(|column| column.id() == id)
}

/// Distinct display values of `column` with their counts, over the rows that
/// pass every other filter.
pub fn faceted_unique_values<T>(
	data: &[T],
	columns: &[ColumnDef<T>],
	state: &EffectiveState<'_>,
	search_column: Option<&ColumnId>,
	column: &ColumnDef<T>,
) -> BTreeMap<String, usize> {
	let mut facets = BTreeMap::new();
	for index in filter_rows(data, columns, state, search_column, Some(column.id())) {
		let value = column.value(&data[index]);
		if value.is_empty() {
			continue;
		}
		*facets.entry(value.to_string()).or_insert(0) += 1;
	}
	facets
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::Features;
	use crate::state::TableState;

	#[derive(Debug)]
	struct Booking {
		customer: &'static str,
		status: &'static str,
		total: Option<u32>,
	}

	fn bookings() -> Vec<Booking> {
		vec![
			Booking { customer: "Ana", status: "paid", total: Some(300) },
			Booking { customer: "bruno", status: "pending", total: None },
			Booking { customer: "Carla", status: "paid", total: Some(120) },
			Booking { customer: "Diego", status: "cancelled", total: Some(300) },
			Booking { customer: "Eva", status: "pending", total: Some(80) },
		]
	}

	fn columns() -> Vec<ColumnDef<Booking>> {
		vec![
			ColumnDef::accessor("customer", |row: &Booking| row.customer),
			ColumnDef::accessor("status", |row: &Booking| row.status),
			ColumnDef::accessor("total", |row: &Booking| row.total),
		]
	}

	fn build(state: &TableState) -> RowModel {
		RowModel::build(&bookings(), &columns(), &state.effective(&Features::default()), None)
	}

	#[test]
	fn filtering_never_grows_the_row_set() {
		let mut state = TableState::default();
		let unfiltered = build(&state).filtered_count();
		state.column_filters.set(&ColumnId::from("status"), "PAID");
		let model = build(&state);
		assert!(model.filtered_count() <= unfiltered);
		assert_eq!(model.filtered(), &[0, 2]);
	}

	#[test]
	fn sorting_is_stable_and_puts_empty_cells_last() {
		let mut state = TableState::default();
		state.sorting.toggle(&ColumnId::from("total"), false);
		assert_eq!(build(&state).filtered(), &[4, 2, 0, 3, 1]);

		state.sorting.toggle(&ColumnId::from("total"), false);
		// ties (Ana and Diego at 300) keep working-copy order
		assert_eq!(build(&state).filtered(), &[0, 3, 2, 4, 1]);
	}

	#[test]
	fn text_sorting_ignores_case() {
		let mut state = TableState::default();
		state.sorting.toggle(&ColumnId::from("customer"), false);
		state.sorting.toggle(&ColumnId::from("customer"), false);
		assert_eq!(build(&state).filtered(), &[4, 3, 2, 1, 0]);
	}

	#[test]
	fn pipeline_filters_before_paginating() {
		let mut state = TableState::with_page_size(1);
		state.column_filters.set(&ColumnId::from("status"), "pending");
		state.pagination.page_index = 1;
		let model = build(&state);
		assert_eq!(model.page_count(), 2);
		assert_eq!(model.page_rows(), &[4]);
		assert!(model.can_previous());
		assert!(!model.can_next());
	}

	#[test]
	fn stale_page_index_yields_an_empty_page() {
		let mut state = TableState::with_page_size(2);
		state.pagination.page_index = 2;
		state.column_filters.set(&ColumnId::from("status"), "paid");
		let model = build(&state);
		assert_eq!(model.page_count(), 1);
		assert!(model.page_rows().is_empty());
	}

	#[test]
	fn global_filter_searches_visible_columns_only() {
		let mut state = TableState::default();
		state.global_filter = Some("canc".into());
		assert_eq!(build(&state).filtered(), &[3]);

		state.column_visibility.set(&ColumnId::from("status"), false);
		assert!(build(&state).filtered().is_empty());
	}

	#[test]
	fn search_column_restricts_the_global_filter() {
		let mut state = TableState::default();
		state.global_filter = Some("eva".into());
		let status = ColumnId::from("status");
		let model = RowModel::build(
			&bookings(),
			&columns(),
			&state.effective(&Features::default()),
			Some(&status),
		);
		assert!(model.filtered().is_empty());
	}

	#[test]
	fn facets_ignore_the_faceted_column_filter() {
		let mut state = TableState::default();
		state.column_filters.set(&ColumnId::from("status"), "paid");
		state.column_filters.set(&ColumnId::from("total"), "300");
		let columns = columns();
		let effective = state.effective(&Features::default());
		let facets = faceted_unique_values(&bookings(), &columns, &effective, None, &columns[1]);
		assert_eq!(
			facets.into_iter().collect::<Vec<_>>(),
			vec![("cancelled".to_string(), 1), ("paid".to_string(), 1)]
		);
	}

	#[test]
	fn disabled_pagination_shows_every_row_on_one_page() {
		let mut state = TableState::with_page_size(2);
		state.pagination.page_index = 1;
		let features = Features {
			pagination: false,
			..Features::default()
		};
		let model = RowModel::build(&bookings(), &columns(), &state.effective(&features), None);
		assert_eq!(model.page_count(), 1);
		assert_eq!(model.page_rows().len(), 5);
	}
}
