//! Header, data, skeleton and empty-state rows.

use gridline_core::{ColumnKind, HeaderCell, RowView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::style::Theme;

const SHIMMER_LIGHT: char = '░';
const SHIMMER_DARK: char = '▒';

/// Page positions of the row being dragged and the row it would land on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragMarks {
	pub dragged: Option<usize>,
	pub target: Option<usize>,
}

/// Header cells, with the keyboard-focused column underlined.
pub fn header_cells<'a>(headers: &'a [HeaderCell], focused: Option<usize>) -> Vec<Cell<'a>> {
	headers
		.iter()
		.enumerate()
		.map(|(position, header)| {
			let style = if Some(position) == focused && !header.kind.is_structural() {
				Style::new().add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
			} else {
				Style::new()
			};
			Cell::from(header.label.as_str()).style(style)
		})
		.collect()
}

#[must_use]
pub fn data_rows<'a>(rows: &'a [RowView], theme: &Theme, marks: DragMarks) -> Vec<Row<'a>> {
	rows.iter()
		.enumerate()
		.map(|(position, row)| {
			let style = if marks.dragged == Some(position) {
				theme.dragged_row_style()
			} else if marks.target == Some(position) && marks.dragged.is_some() {
				theme.drop_target_style()
			} else if row.selected {
				theme.selected_row_style()
			} else {
				Style::new()
			};
			Row::new(row.cells.iter().map(|cell| Cell::from(cell.as_str()))).style(style)
		})
		.collect()
}

/// Placeholder rows drawn while loading. The shimmer shifts with `tick`.
#[must_use]
pub fn skeleton_rows(
	count: usize,
	headers: &[HeaderCell],
	widths: &[u16],
	tick: usize,
	theme: &Theme,
) -> Vec<Row<'static>> {
	(0..count)
		.map(|row| {
			let fill = if (row + tick) % 3 == 0 {
				SHIMMER_DARK
			} else {
				SHIMMER_LIGHT
			};
			let cells = headers.iter().enumerate().map(|(position, header)| {
				let width = usize::from(widths.get(position).copied().unwrap_or(1));
				let bar = match header.kind {
					ColumnKind::DragHandle | ColumnKind::Select => width.min(3),
					ColumnKind::Data | ColumnKind::Display => (width * 2 / 3).max(1),
				};
				Cell::from(fill.to_string().repeat(bar))
			});
			Row::new(cells).style(theme.empty_style())
		})
		.collect()
}

/// The single full-width line shown when no rows match.
#[must_use]
pub fn empty_line<'a>(icon: &'a str, message: &'a str, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(icon, theme.empty_style().add_modifier(Modifier::BOLD)),
		Span::raw("  "),
		Span::styled(message, theme.empty_style()),
	])
}
