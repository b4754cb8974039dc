//! Drag-and-drop row reordering.
//!
//! Sensors only work out which row the dragged row is over; every sensor ends
//! in a [`DragEvent`] that the table commits the same way.

use crate::record::RowId;

/// Move the element at `from` to `to`, shifting the rest. Out-of-range
/// indices leave the vector untouched.
#[must_use]
pub fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
	if from >= items.len() || to >= items.len() || from == to {
		return items;
	}
	let item = items.remove(from);
	items.insert(to, item);
	items
}

/// Input method a drag started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSensor {
	Pointer,
	Touch,
	Keyboard,
}

impl DragSensor {
	/// Rows the pointer must travel before a drag becomes active.
	#[must_use]
	pub fn activation_distance(self) -> u16 {
		match self {
			Self::Pointer => 1,
			Self::Touch => 2,
			Self::Keyboard => 0,
		}
	}
}

/// A finished drag: the dragged row and the row it was released over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
	pub active: RowId,
	pub over: Option<RowId>,
	pub sensor: DragSensor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
	Moved { from: usize, to: usize },
	Unchanged,
}

/// On-screen vertical extent of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
	pub top: i32,
	pub height: u16,
}

impl RowBounds {
	/// Twice the vertical center, which keeps the arithmetic integral.
	fn doubled_center(self) -> i64 {
		2 * i64::from(self.top) + i64::from(self.height)
	}
}

/// Index of the row whose center is nearest the dragged row's center after
/// moving it by `delta_y`. Only the vertical axis counts; ties go to the
/// upper row.
#[must_use]
pub fn closest_center(rows: &[RowBounds], active: usize, delta_y: i32) -> Option<usize> {
	let dragged = rows.get(active)?.doubled_center() + 2 * i64::from(delta_y);
	rows.iter()
		.enumerate()
		.min_by_key(|(_, bounds)| (bounds.doubled_center() - dragged).abs())
		.map(|(index, _)| index)
}

/// Pick-up / move / drop session driven from the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardDrag {
	active: RowId,
	over: usize,
	len: usize,
}

impl KeyboardDrag {
	/// Pick up `active` from the ordered `ids` of the rows on screen.
	#[must_use]
	pub fn pick_up(ids: &[RowId], active: &RowId) -> Option<Self> {
		let over = ids.iter().position(|id| id == active)?;
		Some(Self {
			active: active.clone(),
			over,
			len: ids.len(),
		})
	}

	pub fn active(&self) -> &RowId {
		&self.active
	}

	pub fn over_index(&self) -> usize {
		self.over
	}

	/// Walk the drop target `step` rows, stopping at either end.
	pub fn move_by(&mut self, step: isize) {
		let last = self.len.saturating_sub(1);
		self.over = self.over.saturating_add_signed(step).min(last);
	}

	#[must_use]
	pub fn drop(self, ids: &[RowId]) -> DragEvent {
		DragEvent {
			over: ids.get(self.over).cloned(),
			active: self.active,
			sensor: DragSensor::Keyboard,
		}
	}

	#[must_use]
	pub fn cancel(self) -> DragEvent {
		DragEvent {
			active: self.active,
			over: None,
			sensor: DragSensor::Keyboard,
		}
	}
}

/// Drag session driven by a mouse or touch pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDrag {
	active: RowId,
	active_index: usize,
	sensor: DragSensor,
	over: Option<usize>,
}

impl PointerDrag {
	#[must_use]
	pub fn new(active: RowId, active_index: usize, sensor: DragSensor) -> Self {
		Self {
			active,
			active_index,
			sensor,
			over: None,
		}
	}

	pub fn active(&self) -> &RowId {
		&self.active
	}

	pub fn sensor(&self) -> DragSensor {
		self.sensor
	}

	/// Row currently under the dragged row, once the drag is active.
	pub fn over_index(&self) -> Option<usize> {
		self.over
	}

	/// Track the pointer `delta_y` rows away from where the drag started.
	pub fn move_to(&mut self, delta_y: i32, rows: &[RowBounds]) {
		if delta_y.unsigned_abs() < u32::from(self.sensor.activation_distance())
			&& self.over.is_none()
		{
			return;
		}
		self.over = closest_center(rows, self.active_index, delta_y);
	}

	#[must_use]
	pub fn finish(self, ids: &[RowId]) -> DragEvent {
		DragEvent {
			over: self.over.and_then(|index| ids.get(index).cloned()),
			active: self.active,
			sensor: self.sensor,
		}
	}
}
