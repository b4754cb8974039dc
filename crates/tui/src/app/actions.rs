use anyhow::Result;
use gridline_core::{ColumnKind, DragSensor, PageNavigation, PointerDrag, ReorderOutcome, RowBounds};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::outcome::Exit;
use super::state::{Focus, PointerGesture};
use crate::components::{FooterButton, ToolbarButton, point_in_rect};

impl<T> App<T> {
	/// Process a keyboard event. Returns how the user left, if they did.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Exit>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(Exit::Cancel));
		}
		match self.focus {
			Focus::Search => self.handle_search_key(key),
			Focus::ColumnMenu => self.handle_menu_key(key),
			Focus::Table if self.keyboard_drag.is_some() => self.handle_drag_key(key),
			Focus::Table => return Ok(self.handle_table_key(key)),
		}
		Ok(None)
	}

	fn handle_table_key(&mut self, key: KeyEvent) -> Option<Exit> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(Exit::Cancel),
			KeyCode::Enter => return Some(Exit::Accept),
			KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
			KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
			KeyCode::Left | KeyCode::Char('h') => {
				self.focused_column = self.focused_column.saturating_sub(1);
			}
			KeyCode::Right | KeyCode::Char('l') => {
				self.focused_column += 1;
				self.clamp_cursor();
			}
			KeyCode::Char('s') => self.sort_focused_column(false),
			KeyCode::Char('S') => self.sort_focused_column(true),
			KeyCode::Char(' ') => self.toggle_current_row(),
			KeyCode::Char('a') => self.toggle_page_selection(),
			KeyCode::Char('x') => {
				self.table.clear_selection();
			}
			KeyCode::PageDown | KeyCode::Char('n') => self.navigate(PageNavigation::Next),
			KeyCode::PageUp | KeyCode::Char('p') => self.navigate(PageNavigation::Previous),
			KeyCode::Home | KeyCode::Char('g') => self.navigate(PageNavigation::First),
			KeyCode::End | KeyCode::Char('G') => self.navigate(PageNavigation::Last),
			KeyCode::Char('z') => self.cycle_page_size(),
			KeyCode::Char('/') if self.table.features().filtering && self.table.shows_table() => {
				self.focus = Focus::Search;
			}
			KeyCode::Char('c') => self.toggle_column_menu(),
			KeyCode::Tab => self.step_tab(1),
			KeyCode::BackTab => self.step_tab(-1),
			KeyCode::Char('m') => self.pick_up_current_row(),
			KeyCode::F(number) if number >= 1 => self.trigger_action(usize::from(number - 1)),
			_ => {}
		}
		None
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.focus = Focus::Table,
			_ => {
				if self.search_input.input(key) {
					self.apply_query();
				}
			}
		}
	}

	fn handle_menu_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => self.focus = Focus::Table,
			KeyCode::Up | KeyCode::Char('k') => {
				self.menu_cursor = self.menu_cursor.saturating_sub(1);
			}
			KeyCode::Down | KeyCode::Char('j') => {
				self.menu_cursor += 1;
				self.clamp_cursor();
			}
			KeyCode::Enter | KeyCode::Char(' ') => {
				let toggles = self.table.column_toggles();
				if let Some(toggle) = toggles.get(self.menu_cursor) {
					self.toggle_column(&toggle.id);
				}
			}
			_ => {}
		}
	}

	fn handle_drag_key(&mut self, key: KeyEvent) {
		let Some(drag) = self.keyboard_drag.as_mut() else {
			return;
		};
		match key.code {
			KeyCode::Up | KeyCode::Char('k') => drag.move_by(-1),
			KeyCode::Down | KeyCode::Char('j') => drag.move_by(1),
			KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => {
				if let Some(drag) = self.keyboard_drag.take() {
					let target = drag.over_index();
					let event = drag.drop(&self.table.page_ids());
					self.commit_drag(event, target);
				}
			}
			KeyCode::Esc => {
				if let Some(drag) = self.keyboard_drag.take() {
					let event = drag.cancel();
					self.commit_drag(event, self.cursor);
				}
			}
			_ => {}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(column, row),
			MouseEventKind::Drag(MouseButton::Left) => {
				if let Some(gesture) = self.pointer.as_mut() {
					let delta = i32::from(row) - i32::from(gesture.origin_y);
					gesture.drag.move_to(delta, &gesture.rows);
				}
			}
			MouseEventKind::Up(MouseButton::Left) => {
				if let Some(gesture) = self.pointer.take() {
					let target = gesture.drag.over_index().unwrap_or(self.cursor);
					let event = gesture.drag.finish(&self.table.page_ids());
					self.commit_drag(event, target);
				}
			}
			MouseEventKind::ScrollUp if self.focus != Focus::ColumnMenu => self.move_cursor(-1),
			MouseEventKind::ScrollDown if self.focus != Focus::ColumnMenu => self.move_cursor(1),
			_ => {}
		}
	}

	fn click(&mut self, column: u16, row: u16) {
		if self.focus == Focus::ColumnMenu {
			let hit = self
				.hits
				.menu
				.iter()
				.find(|(rect, _)| point_in_rect(column, row, *rect))
				.map(|(_, id)| id.clone());
			match hit {
				Some(id) => self.toggle_column(&id),
				None => self.focus = Focus::Table,
			}
			return;
		}

		if let Some(rect) = self.hits.search
			&& point_in_rect(column, row, rect)
		{
			self.focus = Focus::Search;
			return;
		}
		if self.focus == Focus::Search {
			self.focus = Focus::Table;
		}

		if let Some(value) = self
			.hits
			.tabs
			.tabs
			.iter()
			.find(|(rect, _)| point_in_rect(column, row, *rect))
			.map(|(_, value)| value.clone())
		{
			self.switch_tab(&value);
			return;
		}
		if self.hits.tabs.previous.is_some_and(|rect| point_in_rect(column, row, rect)) {
			self.step_tab(-1);
			return;
		}
		if self.hits.tabs.next.is_some_and(|rect| point_in_rect(column, row, rect)) {
			self.step_tab(1);
			return;
		}

		if let Some(button) = hit(&self.hits.toolbar, column, row) {
			match button {
				ToolbarButton::Columns => self.toggle_column_menu(),
				ToolbarButton::Action(index) => self.trigger_action(index),
			}
			return;
		}
		if let Some(button) = hit(&self.hits.footer, column, row) {
			match button {
				FooterButton::PageSize => self.cycle_page_size(),
				FooterButton::Navigate(navigation) => self.navigate(navigation),
			}
			return;
		}

		let header_position = self
			.hits
			.headers
			.iter()
			.position(|rect| rect.x <= column && column < rect.right());
		if let Some(position) = header_position
			&& self.hits.headers[position].y == row
		{
			self.click_header(position);
			return;
		}

		if let Some(&(page_position, rect)) = self
			.hits
			.rows
			.iter()
			.find(|(_, rect)| point_in_rect(column, row, *rect))
		{
			self.cursor = page_position;
			let kind = header_position.and_then(|position| self.header_kind(position));
			match kind {
				Some(ColumnKind::DragHandle) => self.start_pointer_drag(page_position, rect.y),
				Some(ColumnKind::Select) => self.toggle_current_row(),
				_ => {}
			}
		}
	}

	fn click_header(&mut self, position: usize) {
		self.focused_column = position;
		match self.header_kind(position) {
			Some(ColumnKind::Select) => self.toggle_page_selection(),
			Some(ColumnKind::DragHandle) | None => {}
			Some(ColumnKind::Data | ColumnKind::Display) => self.sort_focused_column(false),
		}
	}

	fn header_kind(&self, position: usize) -> Option<ColumnKind> {
		self.table.visible_columns().nth(position).map(|column| column.kind())
	}

	fn sort_focused_column(&mut self, multi: bool) {
		let Some(id) = self
			.table
			.visible_columns()
			.nth(self.focused_column)
			.map(|column| column.id().clone())
		else {
			return;
		};
		let result = if multi {
			self.table.toggle_sorting_multi(&id)
		} else {
			self.table.toggle_sorting(&id)
		};
		if let Err(error) = result {
			log::warn!("could not sort by '{id}': {error}");
		}
	}

	fn toggle_current_row(&mut self) {
		if let Some(id) = self.current_row() {
			let selected = self.table.is_selected(&id);
			self.table.toggle_row_selected(&id, !selected);
		}
	}

	fn toggle_page_selection(&mut self) {
		let checked = self.table.page_check_state().is_checked();
		self.table.toggle_all_page_rows_selected(!checked);
	}

	fn toggle_column_menu(&mut self) {
		self.focus = match self.focus {
			Focus::ColumnMenu => Focus::Table,
			_ if self.table.features().column_visibility && self.table.shows_table() => {
				Focus::ColumnMenu
			}
			other => other,
		};
	}

	fn toggle_column(&mut self, id: &gridline_core::ColumnId) {
		if let Err(error) = self.table.toggle_column_visibility(id) {
			log::warn!("could not toggle column '{id}': {error}");
		}
		self.clamp_cursor();
	}

	fn pick_up_current_row(&mut self) {
		let Some(id) = self.current_row() else {
			return;
		};
		self.keyboard_drag = self.table.start_keyboard_drag(&id);
	}

	fn start_pointer_drag(&mut self, page_position: usize, origin_y: u16) {
		if !self.table.features().drag_and_drop {
			return;
		}
		let Some(id) = self.table.page_ids().get(page_position).cloned() else {
			return;
		};
		let Some(body) = self.hits.body else {
			return;
		};
		let top = i32::from(body.y) - self.hits.row_offset as i32;
		let rows = (0..self.page_len())
			.map(|position| RowBounds {
				top: top + position as i32,
				height: 1,
			})
			.collect();
		self.pointer = Some(PointerGesture {
			drag: PointerDrag::new(id, page_position, self.pointer_sensor),
			origin_y,
			rows,
		});
	}

	fn commit_drag(&mut self, event: gridline_core::DragEvent, target: usize) {
		let sensor: DragSensor = event.sensor;
		match self.table.handle_drag_end(event) {
			ReorderOutcome::Moved { from, to } => {
				log::debug!("row moved from {from} to {to} with {sensor:?}");
				self.reordered = true;
				self.cursor = target;
				self.clamp_cursor();
			}
			ReorderOutcome::Unchanged => {}
		}
	}
}

fn hit<B: Copy>(regions: &[(ratatui::layout::Rect, B)], column: u16, row: u16) -> Option<B> {
	regions
		.iter()
		.find(|(rect, _)| point_in_rect(column, row, *rect))
		.map(|(_, button)| *button)
}
