//! Visual styling for the table renderer.
//!
//! Themes carry the color scheme; [`StyleConfig`] bundles the active theme
//! with the few layout knobs that are not colors.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};

/// Terminal width below which the tab strip collapses into a selector.
pub const NARROW_WIDTH: u16 = 60;

#[derive(Clone, Debug)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
	/// Width threshold for the collapsed tab selector.
	pub narrow_width: u16,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self::with_theme(Theme::default())
	}
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self {
			theme,
			narrow_width: NARROW_WIDTH,
		}
	}

	pub fn is_narrow(&self, width: u16) -> bool {
		width < self.narrow_width
	}
}
