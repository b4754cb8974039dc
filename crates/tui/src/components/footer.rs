//! Footer with the selection summary, page size and page navigation.

use gridline_core::{PageNavigation, PaginationControls, SelectionSummary};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterButton {
	/// Cycles through the page size options.
	PageSize,
	Navigate(PageNavigation),
}

pub struct FooterContext<'a> {
	pub pagination: Option<&'a PaginationControls>,
	pub selection: Option<SelectionSummary>,
	/// `Some(label)` while loading.
	pub loading: Option<&'a str>,
	pub rows_per_page: &'a str,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

const NAVIGATION: [(PageNavigation, &str); 4] = [
	(PageNavigation::First, "«"),
	(PageNavigation::Previous, "‹"),
	(PageNavigation::Next, "›"),
	(PageNavigation::Last, "»"),
];

/// Render the footer and return the regions of its enabled buttons.
pub fn render_footer(
	frame: &mut Frame,
	area: Rect,
	context: FooterContext<'_>,
) -> Vec<(Rect, FooterButton)> {
	if area.width == 0 || area.height == 0 {
		return Vec::new();
	}
	let theme = context.theme;
	let muted = theme.empty_style();

	let mut left = Line::default();
	if let Some(label) = context.loading {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		left.spans.push(spinner.to_symbol_span(context.throbber_state));
		left.spans.push(Span::styled(label.to_string(), muted));
	} else if let Some(summary) = context.selection {
		left.spans.push(Span::styled(summary.to_string(), muted));
	}
	frame.buffer_mut().set_line(area.x, area.y, &left, area.width);

	let Some(controls) = context.pagination else {
		return Vec::new();
	};

	let mut pieces: Vec<(String, Style, Option<FooterButton>)> = vec![
		(format!("{} ", context.rows_per_page), muted, None),
		(format!("[{}]", controls.page_size), theme.prompt, Some(FooterButton::PageSize)),
		(format!("  {}  ", controls.page_label()), Style::new(), None),
	];
	for (navigation, symbol) in NAVIGATION {
		let enabled = match navigation {
			PageNavigation::First | PageNavigation::Previous => controls.can_previous,
			PageNavigation::Next | PageNavigation::Last => controls.can_next,
		};
		let (style, button) = if enabled {
			(theme.prompt, Some(FooterButton::Navigate(navigation)))
		} else {
			(muted, None)
		};
		pieces.push((format!(" {symbol} "), style, button));
	}

	let total: u16 = pieces.iter().map(|(text, ..)| text.width() as u16).sum();
	let left_width = left.width() as u16;
	let start = area
		.right()
		.saturating_sub(total)
		.max(area.x.saturating_add(left_width).saturating_add(1));

	let mut regions = Vec::new();
	let mut x = start;
	for (text, style, button) in pieces {
		let width = text.width() as u16;
		if x.saturating_add(width) > area.right() {
			break;
		}
		frame.buffer_mut().set_span(x, area.y, &Span::styled(text, style), width);
		if let Some(button) = button {
			regions.push((Rect::new(x, area.y, width, 1), button));
		}
		x += width;
	}
	regions
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_support::buffer_lines;

	fn controls(page_index: usize) -> PaginationControls {
		PaginationControls {
			page_index,
			page_count: 2,
			page_size: 10,
			page_size_options: vec![10, 20],
			can_previous: page_index > 0,
			can_next: page_index + 1 < 2,
		}
	}

	#[test]
	fn first_page_disables_backward_navigation() {
		let controls = controls(0);
		let throbber = ThrobberState::default();
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(72, 1)).expect("terminal");
		let mut regions = Vec::new();
		terminal
			.draw(|frame| {
				regions = render_footer(
					frame,
					frame.area(),
					FooterContext {
						pagination: Some(&controls),
						selection: Some(SelectionSummary {
							selected: 1,
							filtered: 12,
						}),
						loading: None,
						rows_per_page: "Rows per page",
						throbber_state: &throbber,
						theme: &theme,
					},
				);
			})
			.expect("draw");

		let line = &buffer_lines(terminal.backend().buffer())[0];
		assert!(line.starts_with("1 of 12 row(s) selected."));
		assert!(line.ends_with("Rows per page [10]  Page 1 of 2   «  ‹  ›  » "));
		let buttons: Vec<FooterButton> = regions.into_iter().map(|(_, button)| button).collect();
		assert_eq!(
			buttons,
			vec![
				FooterButton::PageSize,
				FooterButton::Navigate(PageNavigation::Next),
				FooterButton::Navigate(PageNavigation::Last),
			]
		);
	}

	#[test]
	fn disabled_pagination_leaves_only_the_summary() {
		let throbber = ThrobberState::default();
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).expect("terminal");
		let mut regions = vec![(Rect::default(), FooterButton::PageSize)];
		terminal
			.draw(|frame| {
				regions = render_footer(
					frame,
					frame.area(),
					FooterContext {
						pagination: None,
						selection: None,
						loading: Some("Loading"),
						rows_per_page: "Rows per page",
						throbber_state: &throbber,
						theme: &theme,
					},
				);
			})
			.expect("draw");
		assert!(regions.is_empty());
		assert!(buffer_lines(terminal.backend().buffer())[0].contains("Loading"));
	}
}
