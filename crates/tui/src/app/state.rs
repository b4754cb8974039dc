//! State container for the interactive table screen.

use gridline_core::{
	DataTable, DragSensor, KeyboardDrag, PageNavigation, PointerDrag, RowBounds, RowId,
};
use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};
use throbber_widgets_tui::ThrobberState;

use super::outcome::{Exit, TableOutcome};
use crate::components::{FooterButton, TabStripAreas, ToolbarButton};
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Table,
	Search,
	ColumnMenu,
}

/// A pointer drag in flight, with the geometry captured when it started.
#[derive(Debug, Clone)]
pub(crate) struct PointerGesture {
	pub drag: PointerDrag,
	pub origin_y: u16,
	pub rows: Vec<RowBounds>,
}

/// Screen regions recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
	pub search: Option<Rect>,
	pub tabs: TabStripAreas,
	pub toolbar: Vec<(Rect, ToolbarButton)>,
	/// One region per visible header, in header order.
	pub headers: Vec<Rect>,
	/// Page rows currently on screen as `(page position, region)`.
	pub rows: Vec<(usize, Rect)>,
	pub footer: Vec<(Rect, FooterButton)>,
	pub menu: Vec<(Rect, gridline_core::ColumnId)>,
	/// First page position drawn at the top of the body.
	pub row_offset: usize,
	pub body: Option<Rect>,
}

/// Interactive front-end for one [`DataTable`].
pub struct App<T> {
	pub table: DataTable<T>,
	pub style: StyleConfig,
	pub(crate) labels: UiLabels,
	pub(crate) search_input: QueryInput<'static>,
	pub(crate) focus: Focus,
	/// Cursor position within the current page.
	pub(crate) cursor: usize,
	/// Keyboard-focused header position.
	pub(crate) focused_column: usize,
	pub(crate) menu_cursor: usize,
	pub(crate) keyboard_drag: Option<KeyboardDrag>,
	pub(crate) pointer: Option<PointerGesture>,
	pub(crate) pointer_sensor: DragSensor,
	pub(crate) reordered: bool,
	pub(crate) triggered: Vec<String>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) tick: usize,
	pub(crate) table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) hits: HitMap,
}

impl<T> App<T> {
	pub fn new(table: DataTable<T>) -> Self {
		let query = table.state().global_filter.clone().unwrap_or_default();
		Self {
			table,
			style: StyleConfig::default(),
			labels: UiLabels::default(),
			search_input: QueryInput::new(&query),
			focus: Focus::Table,
			cursor: 0,
			focused_column: 0,
			menu_cursor: 0,
			keyboard_drag: None,
			pointer: None,
			pointer_sensor: DragSensor::Pointer,
			reordered: false,
			triggered: Vec::new(),
			throbber_state: ThrobberState::default(),
			tick: 0,
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			hits: HitMap::default(),
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.style.theme = theme;
		self
	}

	/// Sensor reported for mouse drags. Touch-style sensors need a longer
	/// travel before the drag activates.
	#[must_use]
	pub fn with_pointer_sensor(mut self, sensor: DragSensor) -> Self {
		self.pointer_sensor = sensor;
		self
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Id of the row under the cursor.
	pub fn current_row(&self) -> Option<RowId> {
		self.table.page_ids().get(self.cursor).cloned()
	}

	pub(crate) fn page_len(&self) -> usize {
		self.table.model().page_rows().len()
	}

	pub(crate) fn header_count(&self) -> usize {
		self.table.visible_columns().count()
	}

	/// Keep the cursor and column focus inside the current page and headers.
	pub(crate) fn clamp_cursor(&mut self) {
		self.cursor = self.cursor.min(self.page_len().saturating_sub(1));
		self.focused_column = self
			.focused_column
			.min(self.header_count().saturating_sub(1));
		let toggles = self.table.column_toggles().len();
		self.menu_cursor = self.menu_cursor.min(toggles.saturating_sub(1));
	}

	pub(crate) fn move_cursor(&mut self, step: isize) {
		let last = self.page_len().saturating_sub(1);
		self.cursor = self.cursor.saturating_add_signed(step).min(last);
	}

	pub(crate) fn navigate(&mut self, navigation: PageNavigation) {
		if self.table.navigate(navigation) {
			self.cursor = 0;
		}
	}

	/// Step to the next page size option, wrapping around.
	pub(crate) fn cycle_page_size(&mut self) {
		let options = self.table.page_size_options().to_vec();
		let current = self.table.model().pagination().page_size;
		let next = options
			.iter()
			.position(|&size| size == current)
			.map_or(0, |position| (position + 1) % options.len());
		let Some(&size) = options.get(next) else {
			return;
		};
		if let Err(error) = self.table.set_page_size(size) {
			log::warn!("could not change the page size: {error}");
		}
		self.clamp_cursor();
	}

	/// Activate the tab `step` positions away from the current one.
	pub(crate) fn step_tab(&mut self, step: isize) {
		let Some(target) = self.table.tabs().map(|tabs| tabs.neighbor(step).to_owned()) else {
			return;
		};
		self.switch_tab(&target);
	}

	pub(crate) fn switch_tab(&mut self, value: &str) {
		match self.table.switch_tab(value) {
			Ok(true) => {
				let query = self.table.state().global_filter.clone().unwrap_or_default();
				self.search_input = QueryInput::new(&query);
				self.keyboard_drag = None;
				self.pointer = None;
				self.cursor = 0;
				self.clamp_cursor();
			}
			Ok(false) => {}
			Err(error) => log::warn!("could not switch tabs: {error}"),
		}
	}

	/// Run the toolbar action at `index` and remember that it fired.
	pub(crate) fn trigger_action(&mut self, index: usize) {
		let Some(action) = self.table.actions().get(index) else {
			return;
		};
		action.trigger();
		log::debug!("toolbar action '{}' triggered", action.label);
		self.triggered.push(action.label.clone());
	}

	pub(crate) fn apply_query(&mut self) {
		let query = self.search_input.text().to_string();
		if self.table.set_global_filter(Some(query)) {
			self.clamp_cursor();
		}
	}

	pub(crate) fn into_outcome(self, exit: Exit) -> TableOutcome<T> {
		let current = self.current_row();
		let ids = self.table.ids();
		let mut filtered = self.table.model().filtered().to_vec();
		filtered.sort_unstable();
		let selected = filtered
			.into_iter()
			.map(|index| &ids[index])
			.filter(|id| self.table.is_selected(id))
			.cloned()
			.collect();
		let state = self.table.state().clone();
		TableOutcome {
			accepted: exit == Exit::Accept,
			selected,
			current,
			reordered: self.reordered,
			state,
			triggered: self.triggered,
			data: self.table.into_data(),
		}
	}
}
