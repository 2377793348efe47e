//! Label sanitization and per-run name uniqueness.

use std::collections::HashSet;

/// Spelled-out forms for small leading numbers: a label of "2 Columns"
/// names its accessor `twoColumns`, not `2Columns`.
const NUMBER_WORDS: [&str; 11] = [
	"zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Maximum length of display text used for captions and dedup.
const TEXT_CAP: usize = 50;

/// Collapse whitespace, trim, and cap display text at 50 characters.
pub fn clean_text(text: &str) -> String {
	let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
	collapsed.chars().take(TEXT_CAP).collect()
}

/// Convert a raw label into an identifier-safe camelCase name.
///
/// Non-alphanumeric characters become token boundaries. The first token is
/// lower-cased entirely; each later token keeps its spelling with the first
/// character upper-cased. A leading numeric token is spelled out (`zero`
/// through `ten`, `num42` beyond that), with ordinal suffixes dropped so
/// "2nd Option" becomes `twoOption`. An empty label names as `element`.
pub fn sanitize(label: &str) -> String {
	let cleaned: String = label
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
		.collect();
	let mut tokens = cleaned.split_whitespace();

	let Some(first) = tokens.next() else {
		return "element".to_string();
	};

	let mut name = match leading_number(first) {
		Some(word) => word,
		None => first.to_lowercase(),
	};
	for token in tokens {
		name.push_str(&capitalize_first(token));
	}
	name
}

/// Upper-case the first character of a token, leaving the rest unchanged.
pub fn capitalize_first(token: &str) -> String {
	let mut chars = token.chars();
	match chars.next() {
		Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Spell out a numeric leading token, tolerating an ordinal suffix.
///
/// Returns `None` when the token does not start with a digit run that
/// makes up the whole token (ignoring `st`/`nd`/`rd`/`th`).
fn leading_number(token: &str) -> Option<String> {
	let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
	if digits.is_empty() {
		return None;
	}
	let rest = &token[digits.len()..];
	if !rest.is_empty() && !matches!(rest.to_lowercase().as_str(), "st" | "nd" | "rd" | "th") {
		return None;
	}
	match digits.parse::<usize>() {
		Ok(n) if n < NUMBER_WORDS.len() => Some(NUMBER_WORDS[n].to_string()),
		_ => Some(format!("num{digits}")),
	}
}

/// Uniqueness state for one generation run, shared across all categories.
///
/// Owned by the assembly pass and dropped with it; never process-global.
#[derive(Debug, Default)]
pub struct NamePool {
	used_names: HashSet<String>,
	seen_texts: HashSet<String>,
}

impl NamePool {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reserve a unique accessor name derived from `base`.
	///
	/// On collision an increasing integer suffix is appended (`submit`,
	/// `submit2`, `submit3`, ...) until the name is free.
	pub fn claim(&mut self, base: &str) -> String {
		let mut name = base.to_string();
		let mut counter = 2;
		while self.used_names.contains(&name) {
			name = format!("{base}{counter}");
			counter += 1;
		}
		self.used_names.insert(name.clone());
		name
	}

	/// Record display text for content-level dedup.
	///
	/// Returns `false` when the text was already seen this run, in which
	/// case the caller skips the element entirely.
	pub fn note_text(&mut self, text: &str) -> bool {
		self.seen_texts.insert(text.to_string())
	}
}
