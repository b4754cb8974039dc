use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// Column visibility overrides. Columns without an entry are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityState(BTreeMap<ColumnId, bool>);

impl VisibilityState {
	pub fn is_visible(&self, column: &ColumnId) -> bool {
		self.0.get(column).copied().unwrap_or(true)
	}

	pub fn set(&mut self, column: &ColumnId, visible: bool) {
		self.0.insert(column.clone(), visible);
	}

	/// Flip `column` and return its new visibility.
	pub fn toggle(&mut self, column: &ColumnId) -> bool {
		let visible = !self.is_visible(column);
		self.set(column, visible);
		visible
	}

	pub fn hidden(&self) -> impl Iterator<Item = &ColumnId> {
		self.0
			.iter()
			.filter(|(_, visible)| !**visible)
			.map(|(id, _)| id)
	}

	pub fn reset(&mut self) {
		self.0.clear();
	}
}
