use std::sync::OnceLock;

use regex::Regex;

fn zip_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("ZIP pattern compiles"))
}

/// `12345` or `12345-6789`, ignoring surrounding whitespace.
pub fn is_valid(zip_code: &str) -> bool {
	zip_pattern().is_match(zip_code.trim())
}

/// Trimmed 5-digit prefix; a ZIP+4 code searches its base ZIP.
pub fn normalize(zip_code: &str) -> &str {
	let zip_code = zip_code.trim();
	match zip_code.split_once('-') {
		Some((base, _)) => base,
		None => zip_code,
	}
}
