//! Tab strip, collapsing to a `◂ label ▸` selector on narrow terminals.

use gridline_core::TabSet;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Clickable regions of a rendered tab strip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStripAreas {
	/// One region per tab value in the wide layout.
	pub tabs: Vec<(Rect, String)>,
	/// Arrows of the narrow selector.
	pub previous: Option<Rect>,
	pub next: Option<Rect>,
}

pub fn render_tab_strip(
	frame: &mut Frame,
	area: Rect,
	tabs: &TabSet,
	theme: &Theme,
	narrow: bool,
) -> TabStripAreas {
	if area.width == 0 || area.height == 0 {
		return TabStripAreas::default();
	}
	if narrow {
		render_selector(frame, area, tabs, theme)
	} else {
		render_strip(frame, area, tabs, theme)
	}
}

fn render_strip(frame: &mut Frame, area: Rect, tabs: &TabSet, theme: &Theme) -> TabStripAreas {
	let mut spans = Vec::new();
	let mut regions = Vec::new();
	let mut x = area.x;
	for (index, tab) in tabs.tabs().iter().enumerate() {
		let active = index == tabs.active_index();
		let style = if active {
			theme.tab_highlight_style()
		} else {
			theme.tab_inactive_style()
		};
		let start = x;
		let label = format!(" {} ", tab.label);
		x = x.saturating_add(label.width() as u16);
		spans.push(Span::styled(label, style));
		if let Some(badge) = &tab.badge {
			let badge = format!("{badge} ");
			x = x.saturating_add(badge.width() as u16);
			spans.push(Span::styled(badge, style.patch(theme.highlight)));
		}
		regions.push((
			Rect::new(start, area.y, x.saturating_sub(start), 1).intersection(area),
			tab.value.clone(),
		));
		spans.push(Span::raw(" "));
		x = x.saturating_add(1);
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
	TabStripAreas {
		tabs: regions,
		..TabStripAreas::default()
	}
}

fn render_selector(frame: &mut Frame, area: Rect, tabs: &TabSet, theme: &Theme) -> TabStripAreas {
	let active = tabs.active();
	let mut label = active.label.clone();
	if let Some(badge) = &active.badge {
		label = format!("{label} ({badge})");
	}
	let line = Line::from(vec![
		Span::styled("◂", theme.prompt),
		Span::styled(format!(" {label} "), theme.tab_highlight_style()),
		Span::styled("▸", theme.prompt),
	]);
	let next_x = area.x.saturating_add(label.width() as u16 + 3);
	frame.render_widget(Paragraph::new(line), area);
	TabStripAreas {
		tabs: Vec::new(),
		previous: Some(Rect::new(area.x, area.y, 1, 1).intersection(area)),
		next: Some(Rect::new(next_x, area.y, 1, 1).intersection(area)),
	}
}

/// Title style for static (non-table) tab content.
pub(crate) fn static_content_style(theme: &Theme) -> ratatui::style::Style {
	theme.empty_style().remove_modifier(Modifier::BOLD)
}
