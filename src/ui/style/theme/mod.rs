mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::DEFINITIONS;

#[must_use]
pub fn default_theme() -> Theme {
	DEFINITIONS[0].theme
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	DEFINITIONS.iter().map(|definition| definition.name).collect()
}

#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	&DEFINITIONS
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_and_aliases_resolve_case_insensitively() {
		assert_eq!(by_name("Solarized"), Some(SOLARIZED));
		assert_eq!(by_name(" dark "), Some(SLATE));
		assert_eq!(by_name("LIGHT"), Some(LIGHT));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn default_theme_is_listed_first() {
		assert_eq!(names(), vec!["slate", "solarized", "light"]);
		assert_eq!(Theme::default(), SLATE);
	}
}
