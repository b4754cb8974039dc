//! Right-aligned toolbar: caller actions and the column menu button.

use gridline_core::ActionVariant;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
	/// Opens the column visibility menu.
	Columns,
	/// Caller action at this index.
	Action(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
	pub button: ToolbarButton,
	pub caption: String,
	pub variant: ActionVariant,
}

fn variant_style(variant: ActionVariant, theme: &Theme) -> Style {
	match variant {
		ActionVariant::Default => theme.header.add_modifier(Modifier::BOLD),
		ActionVariant::Destructive => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
		ActionVariant::Outline => theme.prompt,
		ActionVariant::Secondary => theme.tab_inactive_style(),
		ActionVariant::Ghost => theme.empty_style(),
	}
}

fn decorate(caption: &str, variant: ActionVariant) -> String {
	match variant {
		ActionVariant::Ghost => format!(" {caption} "),
		_ => format!("[ {caption} ]"),
	}
}

/// Draw `buttons` right-aligned in `area`, dropping those that do not fit
/// from the left. Returns the region of every drawn button.
pub fn render_toolbar(
	frame: &mut Frame,
	area: Rect,
	buttons: &[ButtonSpec],
	theme: &Theme,
) -> Vec<(Rect, ToolbarButton)> {
	let mut regions = Vec::new();
	let mut right = area.right();
	for spec in buttons.iter().rev() {
		let text = decorate(&spec.caption, spec.variant);
		let width = text.width() as u16;
		if width == 0 || width > right.saturating_sub(area.x) {
			break;
		}
		let x = right - width;
		let rect = Rect::new(x, area.y, width, 1);
		frame
			.buffer_mut()
			.set_span(x, area.y, &Span::styled(text, variant_style(spec.variant, theme)), width);
		regions.push((rect, spec.button));
		right = x.saturating_sub(1);
	}
	regions.reverse();
	regions
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_lines;

	fn buttons() -> Vec<ButtonSpec> {
		vec![
			ButtonSpec {
				button: ToolbarButton::Action(0),
				caption: "+ Add".into(),
				variant: ActionVariant::Default,
			},
			ButtonSpec {
				button: ToolbarButton::Columns,
				caption: "Columns".into(),
				variant: ActionVariant::Outline,
			},
		]
	}

	#[test]
	fn buttons_are_right_aligned_in_order() {
		let mut terminal = Terminal::new(TestBackend::new(30, 1)).expect("terminal");
		let mut regions = Vec::new();
		terminal
			.draw(|frame| {
				regions = render_toolbar(frame, frame.area(), &buttons(), &Theme::default());
			})
			.expect("draw");
		assert_eq!(
			regions,
			vec![
				(Rect::new(9, 0, 9, 1), ToolbarButton::Action(0)),
				(Rect::new(19, 0, 11, 1), ToolbarButton::Columns),
			]
		);
		assert_eq!(buffer_lines(terminal.backend().buffer())[0], "         [ + Add ] [ Columns ]");
	}

	#[test]
	fn buttons_that_do_not_fit_are_dropped_from_the_left() {
		let mut terminal = Terminal::new(TestBackend::new(14, 1)).expect("terminal");
		let mut regions = Vec::new();
		terminal
			.draw(|frame| {
				regions = render_toolbar(frame, frame.area(), &buttons(), &Theme::default());
			})
			.expect("draw");
		assert_eq!(regions, vec![(Rect::new(3, 0, 11, 1), ToolbarButton::Columns)]);
	}
}
