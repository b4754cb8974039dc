use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::RowId;

/// Selected row ids. Only `true` entries are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowSelectionState(BTreeMap<RowId, bool>);

impl RowSelectionState {
	pub fn is_selected(&self, id: &RowId) -> bool {
		self.0.get(id).copied().unwrap_or(false)
	}

	/// Returns whether the stored flag changed.
	pub fn set(&mut self, id: &RowId, selected: bool) -> bool {
		if selected {
			self.0.insert(id.clone(), true).is_none()
		} else {
			self.0.remove(id).is_some()
		}
	}

	pub fn len(&self) -> usize {
		self.0.values().filter(|selected| **selected).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn ids(&self) -> impl Iterator<Item = &RowId> {
		self.0
			.iter()
			.filter(|(_, selected)| **selected)
			.map(|(id, _)| id)
	}

	pub fn clear(&mut self) -> bool {
		let changed = !self.0.is_empty();
		self.0.clear();
		changed
	}
}

impl FromIterator<RowId> for RowSelectionState {
	fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
		Self(iter.into_iter().map(|id| (id, true)).collect())
	}
}

/// Aggregate checkbox state for a group of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
	Checked,
	Indeterminate,
	#[default]
	Unchecked,
}

impl CheckState {
	#[must_use]
	pub fn from_counts(selected: usize, total: usize) -> Self {
		if total == 0 || selected == 0 {
			Self::Unchecked
		} else if selected >= total {
			Self::Checked
		} else {
			Self::Indeterminate
		}
	}

	#[must_use]
	pub fn symbol(self) -> &'static str {
		match self {
			Self::Checked => "[x]",
			Self::Indeterminate => "[-]",
			Self::Unchecked => "[ ]",
		}
	}

	#[must_use]
	pub fn is_checked(self) -> bool {
		matches!(self, Self::Checked)
	}
}
