mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeDefinition};

/// Themes bundled with the renderer, sorted by name.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	builtins::BUILT_IN_DEFINITIONS
}

/// Look up a theme by name or alias, ignoring case and `-`/`_`/space.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	types::find(builtin_themes(), name).map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	builtin_themes()
		.iter()
		.map(|definition| definition.name.to_string())
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
