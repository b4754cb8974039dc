use gridline_core::HeaderCell;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::HighlightSpacing;
use unicode_width::UnicodeWidthStr;

use crate::components::tables::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, TABLE_HIGHLIGHT_SPACING};

/// Width constraints for the visible headers: fixed sizes where given, the
/// rest share the remaining space.
pub(crate) fn column_constraints(headers: &[HeaderCell]) -> Vec<Constraint> {
	headers
		.iter()
		.map(|header| match header.size {
			Some(size) => Constraint::Length(size),
			None => Constraint::Fill(1),
		})
		.collect()
}

/// Horizontal `(x, width)` of every column the way the table widget lays
/// them out inside `table_area`.
pub(crate) fn column_spans(
	table_area: Rect,
	widths: &[Constraint],
	has_selection: bool,
) -> Vec<(u16, u16)> {
	if widths.is_empty() || table_area.width == 0 {
		return Vec::new();
	}

	let highlight_width = match TABLE_HIGHLIGHT_SPACING {
		HighlightSpacing::Always => HIGHLIGHT_SYMBOL.width() as u16,
		HighlightSpacing::WhenSelected if has_selection => HIGHLIGHT_SYMBOL.width() as u16,
		HighlightSpacing::WhenSelected | HighlightSpacing::Never => 0,
	};

	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_area.width, 1));

	Layout::horizontal(widths.to_vec())
		.flex(Flex::Start)
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| (table_area.x + rect.x, rect.width))
		.collect()
}
