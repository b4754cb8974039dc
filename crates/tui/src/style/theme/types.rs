use ratatui::style::{Color, Modifier, Style};

/// Styles for every part of the table chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Header row, borders and the active tab.
	pub header: Style,
	/// Row under the cursor.
	pub row_highlight: Style,
	/// Search prompt and toolbar buttons.
	pub prompt: Style,
	/// Muted text: placeholders, skeleton rows, the empty state.
	pub empty: Style,
	/// Selected rows, badges and the drop target while dragging.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header_fg())
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	/// Style of a selected (checked) row that is not under the cursor.
	#[must_use]
	pub fn selected_row_style(&self) -> Style {
		Style::new().fg(self.highlight.fg.unwrap_or(Color::Reset))
	}

	/// Style of the row a dragged row would land on.
	#[must_use]
	pub fn drop_target_style(&self) -> Style {
		self.highlight.add_modifier(Modifier::UNDERLINED)
	}

	/// Style of the row being dragged.
	#[must_use]
	pub fn dragged_row_style(&self) -> Style {
		self.empty.add_modifier(Modifier::ITALIC)
	}
}

/// A named theme bundled with the renderer.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	/// Other names accepted by [`by_name`](super::by_name).
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, normalized: &str) -> bool {
		normalize_name(self.name) == normalized
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == normalized)
	}
}

pub(super) fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

pub(super) fn find<'a>(
	definitions: &'a [ThemeDefinition],
	name: &str,
) -> Option<&'a ThemeDefinition> {
	let normalized = normalize_name(name);
	definitions
		.iter()
		.find(|definition| definition.answers_to(&normalized))
}
