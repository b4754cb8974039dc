use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gridline_core::{
	ColumnDef, ColumnId, DataTable, Features, RowId, RowIdentity, TabDef, TableOptions,
	ToolbarAction,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
	MouseEventKind,
};

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Package {
	id: u64,
	name: String,
	price: u32,
}

fn packages(count: u64) -> Vec<Package> {
	(1..=count)
		.map(|id| Package {
			id,
			name: format!("Package {id:02}"),
			price: 100 * id as u32,
		})
		.collect()
}

fn columns() -> Vec<ColumnDef<Package>> {
	vec![
		ColumnDef::accessor("name", |row: &Package| row.name.clone()).sortable_header("Name"),
		ColumnDef::accessor("price", |row: &Package| row.price).sortable_header("Price"),
	]
}

fn app_with(options: TableOptions) -> App<Package> {
	let table = DataTable::new(
		packages(12),
		columns(),
		RowIdentity::keyed(|row: &Package| row.id),
		options,
	)
	.expect("valid table");
	App::new(table)
}

fn app(features: Features) -> App<Package> {
	app_with(TableOptions {
		features,
		..TableOptions::default()
	})
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent {
		code,
		modifiers: KeyModifiers::NONE,
		kind: KeyEventKind::Press,
		state: KeyEventState::NONE,
	}
}

fn press(app: &mut App<Package>, codes: &[KeyCode]) -> Option<Exit> {
	codes
		.iter()
		.find_map(|&code| app.handle_key(key(code)).expect("key handled"))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn draw(app: &mut App<Package>) {
	let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
}

fn ids(app: &App<Package>) -> Vec<u64> {
	app.table.data().iter().map(|row| row.id).collect()
}

fn selection() -> Features {
	Features {
		selection: true,
		..Features::default()
	}
}

fn reorder() -> Features {
	Features {
		drag_and_drop: true,
		..Features::default()
	}
}

#[test]
fn enter_accepts_with_the_selected_rows() {
	let mut app = app(selection());
	assert_eq!(press(&mut app, &[KeyCode::Down, KeyCode::Char(' ')]), None);
	assert_eq!(press(&mut app, &[KeyCode::Enter]), Some(Exit::Accept));

	let outcome = app.into_outcome(Exit::Accept);
	assert!(outcome.accepted);
	assert_eq!(outcome.selected, vec![RowId::from(2u64)]);
	assert_eq!(outcome.current, Some(RowId::from(2u64)));
	assert!(!outcome.reordered);
}

#[test]
fn escape_and_ctrl_c_cancel() {
	let mut app = app(Features::default());
	assert_eq!(press(&mut app, &[KeyCode::Esc]), Some(Exit::Cancel));
	let ctrl_c = KeyEvent {
		modifiers: KeyModifiers::CONTROL,
		..key(KeyCode::Char('c'))
	};
	assert_eq!(app.handle_key(ctrl_c).expect("key handled"), Some(Exit::Cancel));
}

#[test]
fn select_all_toggles_the_current_page() {
	let mut app = app(selection());
	press(&mut app, &[KeyCode::Char('a')]);
	assert_eq!(app.table.selection_summary().map(|s| s.selected), Some(10));
	press(&mut app, &[KeyCode::Char('a')]);
	assert_eq!(app.table.selection_summary().map(|s| s.selected), Some(0));
}

#[test]
fn keyboard_drag_moves_the_picked_row() {
	let mut app = app(reorder());
	press(
		&mut app,
		&[KeyCode::Char('m'), KeyCode::Down, KeyCode::Down, KeyCode::Enter],
	);
	assert_eq!(&ids(&app)[..4], &[2, 3, 1, 4]);
	assert_eq!(app.cursor, 2);
	let outcome = app.into_outcome(Exit::Accept);
	assert!(outcome.reordered);
	assert_eq!(outcome.data[2].id, 1);
}

#[test]
fn cancelled_keyboard_drag_keeps_the_order() {
	let mut app = app(reorder());
	press(&mut app, &[KeyCode::Char('m'), KeyCode::Down, KeyCode::Esc]);
	assert_eq!(&ids(&app)[..3], &[1, 2, 3]);
	assert!(app.keyboard_drag.is_none());
}

#[test]
fn keyboard_drag_is_inert_without_reordering() {
	let mut app = app(Features::default());
	press(&mut app, &[KeyCode::Char('m')]);
	assert!(app.keyboard_drag.is_none());
}

#[test]
fn search_box_filters_rows() {
	let mut app = app(Features::default());
	press(
		&mut app,
		&[KeyCode::Char('/'), KeyCode::Char('1'), KeyCode::Char('2')],
	);
	assert_eq!(app.focus(), Focus::Search);
	assert_eq!(app.table.model().filtered_count(), 1);

	press(&mut app, &[KeyCode::Esc]);
	assert_eq!(app.focus(), Focus::Table);
	assert_eq!(app.query(), "12");
	assert_eq!(app.current_row(), Some(RowId::from(12u64)));
}

#[test]
fn page_keys_walk_the_pages() {
	let mut app = app(Features::default());
	press(&mut app, &[KeyCode::Down, KeyCode::Char('n')]);
	assert_eq!(app.table.state().pagination.page_index, 1);
	assert_eq!(app.cursor, 0);
	press(&mut app, &[KeyCode::Char('n')]);
	assert_eq!(app.table.state().pagination.page_index, 1);
	press(&mut app, &[KeyCode::Char('g')]);
	assert_eq!(app.table.state().pagination.page_index, 0);

	press(&mut app, &[KeyCode::Char('z')]);
	assert_eq!(app.table.state().pagination.page_size, 20);
	assert_eq!(app.table.model().page_count(), 1);
}

#[test]
fn sort_key_cycles_the_focused_column() {
	let mut app = app(Features::default());
	let price = ColumnId::from("price");
	press(&mut app, &[KeyCode::Right, KeyCode::Char('s'), KeyCode::Char('s')]);
	assert_eq!(
		app.table.sort_direction(&price),
		Some(gridline_core::SortDirection::Desc)
	);
	assert_eq!(app.current_row(), Some(RowId::from(12u64)));
}

#[test]
fn column_menu_hides_columns() {
	let mut app = app(Features::default());
	press(&mut app, &[KeyCode::Char('c')]);
	assert_eq!(app.focus(), Focus::ColumnMenu);
	press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Esc]);
	assert_eq!(app.focus(), Focus::Table);
	let visible: Vec<&str> = app
		.table
		.visible_columns()
		.map(|column| column.id().as_str())
		.collect();
	assert_eq!(visible, vec!["name"]);
}

#[test]
fn clicking_a_header_sorts_it() {
	let mut app = app(Features::default());
	draw(&mut app);
	let price = app.hits.headers[1];
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), price.x, price.y));
	assert_eq!(
		app.table.sort_direction(&ColumnId::from("price")),
		Some(gridline_core::SortDirection::Asc)
	);
	assert_eq!(app.focused_column, 1);
}

#[test]
fn dragging_the_handle_reorders_rows() {
	let mut app = app(reorder());
	draw(&mut app);
	let handle = app.hits.headers[0];
	let (_, first) = app.hits.rows[0];

	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), handle.x, first.y));
	app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), handle.x, first.y + 2));
	assert_eq!(
		app.pointer.as_ref().and_then(|gesture| gesture.drag.over_index()),
		Some(2)
	);
	app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), handle.x, first.y + 2));

	assert_eq!(&ids(&app)[..4], &[2, 3, 1, 4]);
	assert!(app.reordered);
}

#[test]
fn releasing_without_moving_keeps_the_order() {
	let mut app = app(reorder());
	draw(&mut app);
	let handle = app.hits.headers[0];
	let (_, first) = app.hits.rows[0];
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), handle.x, first.y));
	app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), handle.x, first.y));
	assert_eq!(&ids(&app)[..3], &[1, 2, 3]);
	assert!(!app.reordered);
}

#[test]
fn clicking_the_select_cell_toggles_the_row() {
	let mut app = app(selection());
	draw(&mut app);
	let select = app.hits.headers[0];
	let (_, third) = app.hits.rows[2];
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), select.x, third.y));
	assert!(app.table.is_selected(&RowId::from(3u64)));
	assert_eq!(app.cursor, 2);
}

#[test]
fn footer_buttons_navigate() {
	let mut app = app(Features::default());
	draw(&mut app);
	let next = app
		.hits
		.footer
		.iter()
		.find(|(_, button)| {
			*button
				== crate::components::FooterButton::Navigate(gridline_core::PageNavigation::Next)
		})
		.map(|(rect, _)| *rect)
		.expect("next button");
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y));
	assert_eq!(app.table.state().pagination.page_index, 1);
}

#[test]
fn tab_key_switches_tabs_and_keeps_their_state() {
	let mut app = app_with(TableOptions {
		tabs: vec![TabDef::table("all", "All"), TabDef::table("archive", "Archive")],
		..TableOptions::default()
	});
	press(&mut app, &[KeyCode::Char('n'), KeyCode::Tab]);
	assert_eq!(app.table.active_tab().map(|tab| tab.value.as_str()), Some("archive"));
	assert_eq!(app.table.state().pagination.page_index, 0);

	press(&mut app, &[KeyCode::BackTab]);
	assert_eq!(app.table.state().pagination.page_index, 1);
}

#[test]
fn toolbar_actions_fire_from_keys_and_clicks() {
	let clicks = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&clicks);
	let mut app = app_with(TableOptions {
		actions: vec![ToolbarAction::new("Add Package").icon("+").on_click(move || {
			counter.fetch_add(1, Ordering::SeqCst);
		})],
		..TableOptions::default()
	});
	press(&mut app, &[KeyCode::F(1), KeyCode::F(2)]);
	assert_eq!(clicks.load(Ordering::SeqCst), 1);

	draw(&mut app);
	let (rect, _) = app.hits.toolbar[0];
	app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y));
	assert_eq!(clicks.load(Ordering::SeqCst), 2);
	assert_eq!(app.into_outcome(Exit::Cancel).triggered, vec!["Add Package", "Add Package"]);
}
