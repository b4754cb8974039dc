use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Always reserve the cursor gutter so columns do not shift while loading.
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::Always;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<Cell<'a>>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
}

/// Where the pieces of a rendered table ended up on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableAreas {
	/// Inside of the border, scrollbar excluded.
	pub inner: Rect,
	/// Rows below the header separator.
	pub body: Rect,
	pub scrollbar: Option<Rect>,
}

/// Render a bordered table with a header separator and, when the rows
/// overflow, a scrollbar.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut ratatui::widgets::TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) -> TableAreas {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let available_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let total_rows = spec.rows.len();
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;
	let table_area = table_area(inner, needs_scrollbar);

	let header = Row::new(spec.headers)
		.style(theme.border_style())
		.height(1)
		.bottom_margin(1);
	let widths = if spec.widths.is_empty() {
		vec![Constraint::Fill(1)]
	} else {
		spec.widths
	};
	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	let scrollbar = needs_scrollbar.then(|| {
		*scrollbar_state = scrollbar_state
			.content_length(total_rows)
			.position(table_state.selected().unwrap_or(0));
		render_scrollbar(frame, inner, scrollbar_state, theme)
	});

	render_header_separator(frame, table_area, theme);

	TableAreas {
		inner: table_area,
		body: body_area(table_area),
		scrollbar,
	}
}

pub(crate) fn table_area(inner: Rect, needs_scrollbar: bool) -> Rect {
	if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	}
}

pub(crate) fn body_area(table_area: Rect) -> Rect {
	let offset = TABLE_HEADER_ROWS.min(table_area.height);
	Rect {
		y: table_area.y + offset,
		height: table_area.height - offset,
		..table_area
	}
}

/// Centered message over the body of an already drawn table.
pub fn render_body_message(frame: &mut Frame, body: Rect, line: Line<'_>) {
	if body.height == 0 || body.width == 0 {
		return;
	}
	let message_area = Rect {
		y: body.y + body.height.saturating_sub(1) / 2,
		height: 1,
		..body
	};
	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), message_area);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let sep_rect = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let width = usize::from(area.width);
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled("─".repeat(width - 2), theme.border_style()),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), sep_rect);
}
