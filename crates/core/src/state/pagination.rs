use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Page navigation requests from the footer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNavigation {
	First,
	Previous,
	Next,
	Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationState {
	pub page_index: usize,
	pub page_size: usize,
}

impl Default for PaginationState {
	fn default() -> Self {
		Self {
			page_index: 0,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl PaginationState {
	#[must_use]
	pub fn with_page_size(page_size: usize) -> Self {
		Self {
			page_index: 0,
			page_size,
		}
	}

	/// Number of pages needed for `row_count` rows; zero when there are none.
	#[must_use]
	pub fn page_count(&self, row_count: usize) -> usize {
		if self.page_size == 0 {
			return 0;
		}
		row_count.div_ceil(self.page_size)
	}

	#[must_use]
	pub fn can_previous(&self) -> bool {
		self.page_index > 0
	}

	#[must_use]
	pub fn can_next(&self, row_count: usize) -> bool {
		self.page_index.saturating_add(1) < self.page_count(row_count)
	}

	/// Apply a navigation request. Requests past either boundary are ignored.
	pub fn navigate(&mut self, navigation: PageNavigation, row_count: usize) -> bool {
		let target = match navigation {
			PageNavigation::First => 0,
			PageNavigation::Previous if self.can_previous() => self.page_index - 1,
			PageNavigation::Next if self.can_next(row_count) => self.page_index + 1,
			PageNavigation::Last => self.page_count(row_count).saturating_sub(1),
			PageNavigation::Previous | PageNavigation::Next => return false,
		};
		let changed = target != self.page_index;
		self.page_index = target;
		changed
	}

	/// Change the page size while keeping the first row of the current page
	/// on screen. Callers must reject a zero size beforehand.
	pub fn set_page_size(&mut self, page_size: usize) {
		let first_row = self.page_index.saturating_mul(self.page_size);
		self.page_size = page_size;
		self.page_index = first_row.checked_div(page_size).unwrap_or(0);
	}

	/// Slice of the filtered rows shown on the current page.
	#[must_use]
	pub fn page_range(&self, row_count: usize) -> Range<usize> {
		let start = self.page_index.saturating_mul(self.page_size).min(row_count);
		let end = start.saturating_add(self.page_size).min(row_count);
		start..end
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_count_rounds_up_and_is_zero_without_rows() {
		let state = PaginationState::default();
		assert_eq!(state.page_count(12), 2);
		assert_eq!(state.page_count(10), 1);
		assert_eq!(state.page_count(0), 0);
		assert_eq!(PaginationState::with_page_size(0).page_count(5), 0);
	}

	#[test]
	fn navigation_stops_at_the_boundaries() {
		let mut state = PaginationState::default();
		assert!(!state.can_previous());
		assert!(!state.navigate(PageNavigation::Previous, 25));
		assert!(state.navigate(PageNavigation::Last, 25));
		assert_eq!(state.page_index, 2);
		assert!(!state.can_next(25));
		assert!(!state.navigate(PageNavigation::Next, 25));
		assert!(state.navigate(PageNavigation::First, 25));
		assert_eq!(state.page_index, 0);
	}

	#[test]
	fn resizing_keeps_the_first_visible_row() {
		let mut state = PaginationState {
			page_index: 3,
			page_size: 10,
		};
		state.set_page_size(20);
		assert_eq!(state.page_index, 1);
		assert!(state.page_range(100).contains(&30));
	}

	#[test]
	fn page_range_clamps_to_the_row_count() {
		let state = PaginationState {
			page_index: 1,
			page_size: 10,
		};
		assert_eq!(state.page_range(12), 10..12);
		assert_eq!(state.page_range(4), 4..4);
	}

	#[test]
	fn huge_page_index_saturates() {
		let mut state = PaginationState {
			page_index: usize::MAX,
			page_size: 10,
		};
		assert!(!state.can_next(25));
		assert_eq!(state.page_range(25), 25..25);
		state.set_page_size(20);
		assert_eq!(state.page_index, usize::MAX / 20);
	}
}
