//! Popup listing the hideable columns with their visibility checkboxes.

use gridline_core::{CheckState, ColumnId, ColumnToggle};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Render the menu in the top-right corner of `area`. Returns the region of
/// each listed column.
pub fn render_column_menu(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	toggles: &[ColumnToggle],
	cursor: usize,
	theme: &Theme,
) -> Vec<(Rect, ColumnId)> {
	let widest = toggles
		.iter()
		.map(|toggle| toggle.label.width())
		.chain(std::iter::once(title.width()))
		.max()
		.unwrap_or(0) as u16;
	let width = (widest + 8).min(area.width);
	let height = (toggles.len() as u16 + 2).min(area.height);
	if width < 3 || height < 3 {
		return Vec::new();
	}
	let popup = Rect::new(area.right() - width, area.y, width, height);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.border_style())
		.title(title.to_string());
	let inner = block.inner(popup);
	frame.render_widget(Clear, popup);
	frame.render_widget(block, popup);

	let lines: Vec<Line> = toggles
		.iter()
		.enumerate()
		.map(|(index, toggle)| {
			let check = if toggle.visible {
				CheckState::Checked
			} else {
				CheckState::Unchecked
			};
			let style = if index == cursor {
				theme.row_highlight
			} else {
				theme.prompt
			};
			Line::from(vec![
				Span::styled(format!("{} ", check.symbol()), style),
				Span::styled(toggle.label.clone(), style),
			])
		})
		.collect();
	frame.render_widget(Paragraph::new(lines), inner);

	toggles
		.iter()
		.enumerate()
		.take(usize::from(inner.height))
		.map(|(index, toggle)| {
			(
				Rect::new(inner.x, inner.y + index as u16, inner.width, 1),
				toggle.id.clone(),
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_lines;

	#[test]
	fn menu_lists_toggles_with_their_state() {
		let toggles = vec![
			ColumnToggle {
				id: ColumnId::from("name"),
				label: "Name".into(),
				visible: true,
			},
			ColumnToggle {
				id: ColumnId::from("price"),
				label: "Price".into(),
				visible: false,
			},
		];
		let mut terminal = Terminal::new(TestBackend::new(30, 6)).expect("terminal");
		let mut regions = Vec::new();
		terminal
			.draw(|frame| {
				regions = render_column_menu(
					frame,
					frame.area(),
					"Columns",
					&toggles,
					0,
					&Theme::default(),
				);
			})
			.expect("draw");

		let lines = buffer_lines(terminal.backend().buffer());
		assert_eq!(lines[0], "               ╭Columns──────╮");
		assert_eq!(lines[1], "               │[x] Name     │");
		assert_eq!(lines[2], "               │[ ] Price    │");
		assert_eq!(lines[3], "               ╰─────────────╯");
		assert_eq!(regions[1], (Rect::new(16, 2, 13, 1), ColumnId::from("price")));
	}
}
