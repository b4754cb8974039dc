//! Search row: the query input, its placeholder and a right-aligned status.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the search row.
pub struct InputContext<'a, 'b> {
	pub input: &'a mut QueryInput<'b>,
	/// Shown while the query is empty.
	pub placeholder: &'a str,
	/// Right-aligned status, e.g. the number of matching rows.
	pub status: &'a str,
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

pub fn render_input(frame: &mut Frame, context: InputContext<'_, '_>) {
	let InputContext {
		input,
		placeholder,
		status,
		focused,
		area,
		theme,
	} = context;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prefix = Span::styled("/ ", theme.prompt);
	frame.buffer_mut().set_span(area.x, area.y, &prefix, area.width);
	let input_area = Rect {
		x: area.x + 2,
		width: area.width.saturating_sub(2),
		height: 1,
		..area
	};
	input.render(frame, input_area, theme, focused);
	if input.text().is_empty() && !focused {
		render_placeholder(frame, input_area, placeholder, theme);
	}
	render_status(frame, input_area, status, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(usize::from(area.width)).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}

fn render_status(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || text.is_empty() {
		return;
	}
	let line = Line::from(Span::styled(text.to_string(), theme.empty_style()));
	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, area.top()))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x.saturating_add(line_width) > area.right() {
		return;
	}
	buffer.set_line(start_x, area.top(), &line, line_width);
}
