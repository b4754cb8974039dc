pub(crate) mod layout;

use gridline_core::{TabBody, TableBody, TableView};
use layout::{column_constraints, column_spans};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::App;
use super::state::{Focus, HitMap};
use crate::components::rows::{data_rows, empty_line, header_cells, skeleton_rows};
use crate::components::tables::{body_area, render_body_message};
use crate::components::tabs::static_content_style;
use crate::components::{
	ButtonSpec, DragMarks, FooterContext, InputContext, TableSpec, ToolbarButton,
	render_column_menu, render_footer, render_input, render_tab_strip, render_table,
	render_toolbar,
};

impl<T> App<T> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let narrow = self.style.is_narrow(frame.area().width);
		let shows_table = self.table.shows_table();
		let show_search = shows_table && self.table.features().filtering;

		let [bar_area, search_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(u16::from(show_search)),
			Constraint::Min(3),
			Constraint::Length(u16::from(shows_table)),
		])
		.areas(area);

		self.hits = HitMap::default();
		self.clamp_cursor();
		self.render_bar(frame, bar_area, narrow);

		if !shows_table {
			self.render_static_tab(frame, body_area);
			return;
		}

		let view = self.table.view();
		if show_search {
			self.render_search(frame, search_area);
		}
		self.render_body(frame, body_area, &view);
		self.render_footer(frame, footer_area, &view);
		if self.focus == Focus::ColumnMenu {
			let toggles = self.table.column_toggles();
			let menu_area = self.hits.body.unwrap_or(body_area);
			self.hits.menu = render_column_menu(
				frame,
				menu_area,
				self.labels.columns_caption(narrow),
				&toggles,
				self.menu_cursor,
				&self.style.theme,
			);
		}
	}

	fn render_bar(&mut self, frame: &mut Frame, area: Rect, narrow: bool) {
		let theme = &self.style.theme;
		let mut buttons: Vec<ButtonSpec> = self
			.table
			.actions()
			.iter()
			.enumerate()
			.map(|(index, action)| ButtonSpec {
				button: ToolbarButton::Action(index),
				caption: if narrow && action.icon.is_some() {
					action.icon.clone().unwrap_or_default()
				} else {
					action.caption()
				},
				variant: action.variant,
			})
			.collect();
		if self.table.features().column_visibility && self.table.shows_table() {
			buttons.push(ButtonSpec {
				button: ToolbarButton::Columns,
				caption: self.labels.columns_caption(narrow).to_string(),
				variant: gridline_core::ActionVariant::Outline,
			});
		}
		self.hits.toolbar = render_toolbar(frame, area, &buttons, theme);

		let toolbar_left = self
			.hits
			.toolbar
			.first()
			.map_or(area.right(), |(rect, _)| rect.x);
		let tabs_area = Rect {
			width: toolbar_left.saturating_sub(area.x).saturating_sub(1),
			..area
		};
		if let Some(tabs) = self.table.tabs() {
			self.hits.tabs = render_tab_strip(frame, tabs_area, tabs, theme, narrow);
		} else if let Some(title) = &self.labels.title {
			frame.render_widget(
				Paragraph::new(title.as_str()).style(theme.border_style()),
				tabs_area,
			);
		}
	}

	fn render_static_tab(&mut self, frame: &mut Frame, area: Rect) {
		let Some(tab) = self.table.active_tab() else {
			return;
		};
		let TabBody::Static(content) = &tab.body else {
			return;
		};
		let theme = &self.style.theme;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(border::ROUNDED)
			.border_style(theme.border_style())
			.title(tab.label.clone());
		let paragraph = Paragraph::new(content.as_str())
			.style(static_content_style(theme))
			.wrap(Wrap { trim: false })
			.block(block);
		frame.render_widget(paragraph, area);
	}

	fn render_search(&mut self, frame: &mut Frame, area: Rect) {
		let search_column = self
			.table
			.options()
			.search_column
			.as_ref()
			.map(|column| column.as_str().to_owned());
		let placeholder = self.labels.placeholder_for(search_column.as_deref());
		let model = self.table.model();
		let status = format!("{} of {} rows", model.filtered_count(), self.table.data().len());
		render_input(
			frame,
			InputContext {
				input: &mut self.search_input,
				placeholder: &placeholder,
				status: &status,
				focused: self.focus == Focus::Search,
				area,
				theme: &self.style.theme,
			},
		);
		self.hits.search = Some(area);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect, view: &TableView) {
		let theme = self.style.theme;
		let widths = column_constraints(&view.headers);
		let focused = (self.focus == Focus::Table).then_some(self.focused_column);

		let inner = Block::default().borders(Borders::ALL).inner(area);
		let spans = column_spans(inner, &widths, true);

		let marks = match (&self.keyboard_drag, &self.pointer) {
			(Some(drag), _) => DragMarks {
				dragged: Some(self.cursor),
				target: Some(drag.over_index()),
			},
			(None, Some(gesture)) => DragMarks {
				dragged: Some(self.cursor),
				target: gesture.drag.over_index(),
			},
			(None, None) => DragMarks::default(),
		};

		let rows = match &view.body {
			TableBody::Loading { rows } => {
				let column_widths: Vec<u16> = spans.iter().map(|(_, width)| *width).collect();
				skeleton_rows(*rows, &view.headers, &column_widths, self.tick / 8, &theme)
			}
			TableBody::Empty { .. } => Vec::new(),
			TableBody::Rows(rows) => data_rows(rows, &theme, marks),
		};
		let has_rows = matches!(view.body, TableBody::Rows(_));
		self.table_state.select(has_rows.then_some(self.cursor));
		if !has_rows {
			*self.table_state.offset_mut() = 0;
		}

		let spec = TableSpec {
			headers: header_cells(&view.headers, focused),
			widths: widths.clone(),
			rows,
			title: self.labels.title.clone().filter(|_| self.table.tabs().is_some()),
		};
		let areas = render_table(
			frame,
			area,
			&mut self.table_state,
			&mut self.scrollbar_state,
			spec,
			&theme,
		);

		if let TableBody::Empty { icon, message } = &view.body {
			render_body_message(frame, areas.body, empty_line(icon, message, &theme));
		}

		let spans = column_spans(areas.inner, &widths, true);
		self.hits.headers = spans
			.iter()
			.map(|&(x, width)| Rect::new(x, areas.inner.y, width, 1))
			.collect();
		self.hits.body = Some(body_area(areas.inner));
		if has_rows {
			let offset = self.table_state.offset();
			let body = areas.body;
			self.hits.row_offset = offset;
			self.hits.rows = (offset..self.page_len())
				.take(usize::from(body.height))
				.map(|position| {
					let y = body.y + (position - offset) as u16;
					(position, Rect::new(body.x, y, body.width, 1))
				})
				.collect();
		}
	}

	fn render_footer(&mut self, frame: &mut Frame, area: Rect, view: &TableView) {
		let loading = self.table.is_loading().then_some(self.labels.loading.as_str());
		self.hits.footer = render_footer(
			frame,
			area,
			FooterContext {
				pagination: view.pagination.as_ref(),
				selection: view.selection,
				loading,
				rows_per_page: &self.labels.rows_per_page,
				throbber_state: &self.throbber_state,
				theme: &self.style.theme,
			},
		);
	}
}
