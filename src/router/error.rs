//! Error types for routing and navigation.

/// Error type for typed path-parameter extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
	/// A captured value did not parse as the requested type.
	ParseError {
		/// Position of the parameter in the pattern.
		param_index: usize,
		/// Requested type name.
		param_type: &'static str,
		/// The raw captured value.
		raw_value: String,
		/// Message from the failed parse.
		source: String,
	},
	/// The handler asked for more parameters than the pattern captured.
	CountMismatch {
		/// Number of parameters the handler expects.
		expected: usize,
		/// Number of parameters the pattern captured.
		actual: usize,
	},
}

impl std::fmt::Display for PathError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::ParseError {
				param_index,
				param_type,
				raw_value,
				source,
			} => write!(
				f,
				"failed to parse parameter[{}] '{}' as {}: {}",
				param_index, raw_value, param_type, source
			),
			Self::CountMismatch { expected, actual } => write!(
				f,
				"parameter count mismatch: expected {}, got {}",
				expected, actual
			),
		}
	}
}

impl std::error::Error for PathError {}

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
	/// No route matched the path.
	NotFound(String),
	/// No route is registered under the name.
	UnknownRouteName(String),
	/// Reverse URL generation was missing a parameter.
	MissingParameter(String),
	/// The browser history write failed.
	NavigationFailed(String),
	/// Typed path-parameter extraction failed.
	PathExtraction(PathError),
	/// Guards kept redirecting past the redirect bound.
	RedirectLoop(String),
}

impl std::fmt::Display for RouterError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotFound(path) => write!(f, "route not found: {}", path),
			Self::UnknownRouteName(name) => write!(f, "unknown route name: {}", name),
			Self::MissingParameter(param) => write!(f, "missing parameter: {}", param),
			Self::NavigationFailed(msg) => write!(f, "navigation failed: {}", msg),
			Self::PathExtraction(err) => write!(f, "path extraction failed: {}", err),
			Self::RedirectLoop(path) => write!(f, "redirect loop while navigating to: {}", path),
		}
	}
}

impl std::error::Error for RouterError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::PathExtraction(err) => Some(err),
			_ => None,
		}
	}
}

impl From<PathError> for RouterError {
	fn from(err: PathError) -> Self {
		Self::PathExtraction(err)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_path_error_display() {
		let err = PathError::ParseError {
			param_index: 0,
			param_type: "i64",
			raw_value: "abc".to_string(),
			source: "invalid digit found in string".to_string(),
		};
		let rendered = err.to_string();
		assert!(rendered.contains("parameter[0]"));
		assert!(rendered.contains("abc"));
		assert!(rendered.contains("i64"));
	}

	#[rstest]
	fn test_count_mismatch_display() {
		let err = PathError::CountMismatch {
			expected: 1,
			actual: 0,
		};
		assert!(err.to_string().contains("expected 1"));
		assert!(err.to_string().contains("got 0"));
	}

	#[rstest]
	#[case(RouterError::NotFound("/nope".into()), "route not found: /nope")]
	#[case(
		RouterError::UnknownRouteName("Nope".into()),
		"unknown route name: Nope"
	)]
	#[case(
		RouterError::RedirectLoop("/login".into()),
		"redirect loop while navigating to: /login"
	)]
	fn test_router_error_display(#[case] err: RouterError, #[case] expected: &str) {
		assert_eq!(err.to_string(), expected);
	}

	#[rstest]
	fn test_path_error_converts() {
		let err: RouterError = PathError::CountMismatch {
			expected: 2,
			actual: 1,
		}
		.into();
		assert!(matches!(err, RouterError::PathExtraction(_)));
	}
}
