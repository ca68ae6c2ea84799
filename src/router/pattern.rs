//! URL path pattern compilation and matching.
//!
//! Patterns use `{name}` placeholders for positional parameters:
//!
//! - `/music-list` — exact match
//! - `/music/{id}` — captures one path segment as `id`
//! - `/static/{path:*}` — captures the rest of the path, slashes included
//!
//! A wildcard capture (`{name:*}`) matches across `/`. Callers that feed a
//! captured wildcard into anything filesystem-shaped must validate it
//! themselves.

use std::collections::HashMap;

/// Upper bound on a pattern string, in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Upper bound on the number of `/`-separated segments in a pattern.
const MAX_PATTERN_SEGMENTS: usize = 32;

/// Upper bound on the compiled regex size, in bytes.
const MAX_COMPILED_SIZE: usize = 1 << 20;

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The pattern string as declared.
	source: String,
	/// Anchored regex with one named capture group per parameter.
	regex: regex::Regex,
	/// Parameter names in declaration order.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns a message if the pattern exceeds the length or segment
	/// limits, or if the compiled regex is rejected.
	pub fn new(pattern: &str) -> Result<Self, String> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(format!(
				"pattern is {} bytes, limit is {}",
				pattern.len(),
				MAX_PATTERN_LENGTH
			));
		}
		let segments = pattern.split('/').count();
		if segments > MAX_PATTERN_SEGMENTS {
			return Err(format!(
				"pattern has {} segments, limit is {}",
				segments, MAX_PATTERN_SEGMENTS
			));
		}

		let (regex_source, param_names) = compile(pattern);
		let regex = regex::RegexBuilder::new(&regex_source)
			.size_limit(MAX_COMPILED_SIZE)
			.build()
			.map_err(|e| format!("pattern does not compile: {}", e))?;

		Ok(Self {
			source: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Returns the pattern string as declared.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Returns the parameter names in declaration order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether the pattern has no parameters.
	pub fn is_exact(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Returns whether the pattern matches the path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Matches a path, extracting parameters.
	///
	/// On a match, returns the named parameter map together with the
	/// values in declaration order. The ordered list is what typed
	/// extraction indexes into.
	pub fn matches(&self, path: &str) -> Option<(HashMap<String, String>, Vec<String>)> {
		let caps = self.regex.captures(path)?;
		let mut params = HashMap::with_capacity(self.param_names.len());
		let mut values = Vec::with_capacity(self.param_names.len());
		for name in &self.param_names {
			if let Some(m) = caps.name(name) {
				params.insert(name.clone(), m.as_str().to_string());
				values.push(m.as_str().to_string());
			}
		}
		Some((params, values))
	}

	/// Generates a concrete path by substituting parameters.
	///
	/// Returns `None` when a parameter named by the pattern is missing
	/// from `params`.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut path = self.source.clone();
		for name in &self.param_names {
			let value = params.get(name)?;
			let plain = format!("{{{}}}", name);
			let wildcard = format!("{{{}:*}}", name);
			if path.contains(&plain) {
				path = path.replace(&plain, value);
			} else if path.contains(&wildcard) {
				path = path.replace(&wildcard, value);
			} else {
				return None;
			}
		}
		Some(path)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.source)
	}
}

/// Translates a pattern into an anchored regex source plus the parameter
/// names encountered, in order.
fn compile(pattern: &str) -> (String, Vec<String>) {
	let mut regex_source = String::from("^");
	let mut param_names = Vec::new();
	let mut rest = pattern;

	while let Some(open) = rest.find('{') {
		let (literal, tail) = rest.split_at(open);
		push_escaped(&mut regex_source, literal);

		let close = match tail.find('}') {
			Some(idx) => idx,
			// Unterminated brace: treat the remainder as literal text.
			None => {
				push_escaped(&mut regex_source, tail);
				rest = "";
				break;
			}
		};

		let body = &tail[1..close];
		let (name, is_wildcard) = match body.strip_suffix(":*") {
			Some(name) => (name, true),
			None => (body, false),
		};
		param_names.push(name.to_string());
		if is_wildcard {
			// Matches across path separators.
			regex_source.push_str(&format!("(?P<{}>.*)", name));
		} else {
			// One path segment.
			regex_source.push_str(&format!("(?P<{}>[^/]+)", name));
		}

		rest = &tail[close + 1..];
	}
	push_escaped(&mut regex_source, rest);

	regex_source.push('$');
	(regex_source, param_names)
}

/// Appends literal pattern text with regex metacharacters escaped.
fn push_escaped(out: &mut String, literal: &str) {
	for c in literal.chars() {
		if matches!(
			c,
			'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
				| '\\'
		) {
			out.push('\\');
		}
		out.push(c);
	}
}
