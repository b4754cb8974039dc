use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Asc => "ascending",
			Self::Desc => "descending",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
	pub column: ColumnId,
	pub direction: SortDirection,
}

/// Ordered list of active sorts; earlier entries take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortingState(Vec<ColumnSort>);

impl SortingState {
	#[must_use]
	pub fn new(entries: Vec<ColumnSort>) -> Self {
		Self(entries)
	}

	pub fn entries(&self) -> &[ColumnSort] {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn direction_of(&self, column: &ColumnId) -> Option<SortDirection> {
		self.0
			.iter()
			.find(|entry| &entry.column == column)
			.map(|entry| entry.direction)
	}

	/// Advance `column` through unsorted → ascending → descending → unsorted.
	///
	/// Without `multi` every other entry is dropped; with it the column is
	/// updated in place or appended. Returns the column's new direction.
	pub fn toggle(&mut self, column: &ColumnId, multi: bool) -> Option<SortDirection> {
		let next = match self.direction_of(column) {
			None => Some(SortDirection::Asc),
			Some(SortDirection::Asc) => Some(SortDirection::Desc),
			Some(SortDirection::Desc) => None,
		};
		if multi {
			self.set_entry(column, next);
		} else {
			self.set(column, next);
		}
		next
	}

	/// Sort by `column` alone, or clear sorting when `direction` is `None`.
	pub fn set(&mut self, column: &ColumnId, direction: Option<SortDirection>) {
		self.0.clear();
		if let Some(direction) = direction {
			self.0.push(ColumnSort {
				column: column.clone(),
				direction,
			});
		}
	}

	fn set_entry(&mut self, column: &ColumnId, direction: Option<SortDirection>) {
		let position = self.0.iter().position(|entry| &entry.column == column);
		match (position, direction) {
			(Some(index), Some(direction)) => self.0[index].direction = direction,
			(Some(index), None) => {
				self.0.remove(index);
			}
			(None, Some(direction)) => self.0.push(ColumnSort {
				column: column.clone(),
				direction,
			}),
			(None, None) => {}
		}
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_cycles_through_three_states() {
		let column = ColumnId::from("price");
		let mut sorting = SortingState::default();
		assert_eq!(sorting.toggle(&column, false), Some(SortDirection::Asc));
		assert_eq!(sorting.toggle(&column, false), Some(SortDirection::Desc));
		assert_eq!(sorting.toggle(&column, false), None);
		assert!(sorting.is_empty());
	}

	#[test]
	fn single_toggle_replaces_other_columns() {
		let mut sorting = SortingState::default();
		sorting.toggle(&ColumnId::from("price"), false);
		sorting.toggle(&ColumnId::from("name"), false);
		assert_eq!(sorting.entries().len(), 1);
		assert_eq!(sorting.direction_of(&ColumnId::from("price")), None);
	}

	#[test]
	fn multi_toggle_appends_and_removes_in_place() {
		let price = ColumnId::from("price");
		let name = ColumnId::from("name");
		let mut sorting = SortingState::default();
		sorting.toggle(&price, true);
		sorting.toggle(&name, true);
		sorting.toggle(&price, true);
		assert_eq!(
			sorting.entries(),
			&[
				ColumnSort {
					column: price.clone(),
					direction: SortDirection::Desc
				},
				ColumnSort {
					column: name.clone(),
					direction: SortDirection::Asc
				},
			]
		);
		sorting.toggle(&price, true);
		assert_eq!(sorting.entries().len(), 1);
		assert_eq!(sorting.direction_of(&name), Some(SortDirection::Asc));
	}
}
