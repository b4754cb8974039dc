mod light;
mod slate;
mod solarized;

use super::types::{Theme, ThemeDefinition};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[light::DEFINITION, slate::DEFINITION, solarized::DEFINITION];

/// The theme used when none is configured.
pub fn default_theme() -> Theme {
	slate::SLATE
}
