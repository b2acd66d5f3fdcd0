use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Trim a value and drop it when nothing is left.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Normalize and deduplicate a comma separated list of release groups.
pub(super) fn sanitize_include_groups(value: &str) -> String {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for group in value.split(',') {
		let normalized = group.trim().to_ascii_lowercase();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned.join(",")
}

/// Render a path relative to `$HOME` when it lives inside it.
pub(super) fn display_path(path: &Path) -> String {
	if let Some(home_os) = env::var_os("HOME") {
		let home = PathBuf::from(home_os);
		if let Ok(rel) = path.strip_prefix(&home) {
			if rel.components().next().is_none() {
				return "~".to_string();
			}
			let sep = std::path::MAIN_SEPARATOR;
			return format!("~{}{}", sep, rel.display());
		}
	}
	path.display().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn include_groups_are_cleaned_and_deduplicated() {
		let cleaned = sanitize_include_groups(" Album, single,,album ,COMPILATION");
		assert_eq!(cleaned, "album,single,compilation");
	}

	#[test]
	fn blank_values_are_dropped() {
		assert_eq!(non_empty(Some("  ".into())), None);
		assert_eq!(non_empty(Some(" GB ".into())), Some("GB".into()));
		assert_eq!(non_empty(None), None);
	}

	#[test]
	fn display_path_prefers_home_relative_paths() {
		let dir = tempdir().unwrap();
		let home = dir.path();
		let old_home = env::var_os("HOME");
		// SAFETY: Adjusting the HOME environment variable for the duration of this test.
		unsafe {
			env::set_var("HOME", home.as_os_str());
		}

		let shown = display_path(&home.join("Pictures/covers"));

		assert!(shown.starts_with('~'));
		assert!(shown.ends_with("covers"));

		if let Some(value) = old_home {
			// SAFETY: Restoring previous HOME value captured at the start of the test.
			unsafe {
				env::set_var("HOME", value);
			}
		} else {
			unsafe {
				env::remove_var("HOME");
			}
		}
	}
}
