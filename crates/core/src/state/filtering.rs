use serde::{Deserialize, Serialize};

use crate::column::ColumnId;
use crate::record::CellValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
	pub column: ColumnId,
	pub value: String,
}

/// Per-column filter values. A column appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiltersState(Vec<ColumnFilter>);

impl FiltersState {
	#[must_use]
	pub fn new(entries: Vec<ColumnFilter>) -> Self {
		let mut state = Self::default();
		for entry in entries {
			state.set(&entry.column, entry.value);
		}
		state
	}

	pub fn entries(&self) -> &[ColumnFilter] {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn value_of(&self, column: &ColumnId) -> Option<&str> {
		self.0
			.iter()
			.find(|entry| &entry.column == column)
			.map(|entry| entry.value.as_str())
	}

	/// Set the filter for `column`. A blank value removes it.
	pub fn set(&mut self, column: &ColumnId, value: impl Into<String>) {
		let value = value.into();
		if value.trim().is_empty() {
			self.remove(column);
			return;
		}
		match self.0.iter_mut().find(|entry| &entry.column == column) {
			Some(entry) => entry.value = value,
			None => self.0.push(ColumnFilter {
				column: column.clone(),
				value,
			}),
		}
	}

	pub fn remove(&mut self, column: &ColumnId) -> bool {
		let before = self.0.len();
		self.0.retain(|entry| &entry.column != column);
		self.0.len() != before
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}
}

/// Case-insensitive substring match on the cell's display text.
#[must_use]
pub fn matches_filter(value: &CellValue, needle: &str) -> bool {
	let needle = needle.trim();
	if needle.is_empty() {
		return true;
	}
	value
		.to_string()
		.to_lowercase()
		.contains(&needle.to_lowercase())
}
