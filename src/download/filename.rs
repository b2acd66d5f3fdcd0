use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "cover";
/// Names are limited to 255 bytes on common filesystems; the rest is left
/// for ` (n).jpg`.
const MAX_STEM_BYTES: usize = 200;

/// Turn an album title into something every common filesystem accepts.
#[must_use]
pub fn sanitize_file_stem(name: &str) -> String {
	let mut replaced = String::with_capacity(name.len().min(MAX_STEM_BYTES));
	for ch in name.chars() {
		let ch = match ch {
			'/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
			ch if ch.is_control() => '_',
			ch => ch,
		};
		if replaced.len() + ch.len_utf8() > MAX_STEM_BYTES {
			break;
		}
		replaced.push(ch);
	}
	let trimmed = replaced.trim().trim_end_matches('.').trim_end();
	if trimmed.is_empty() || trimmed.chars().all(|ch| ch == '.') {
		FALLBACK_STEM.to_string()
	} else {
		trimmed.to_string()
	}
}

/// First `<stem>.<ext>`, `<stem> (1).<ext>`, ... that does not exist yet.
#[must_use]
pub fn unused_path(directory: &Path, stem: &str, extension: &str) -> PathBuf {
	let first = directory.join(format!("{stem}.{extension}"));
	if !first.exists() {
		return first;
	}
	(1..)
		.map(|n| directory.join(format!("{stem} ({n}).{extension}")))
		.find(|candidate| !candidate.exists())
		.unwrap_or(first)
}
