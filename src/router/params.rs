//! Typed extraction of path parameters.
//!
//! A matched route exposes its captured values through a [`ParamContext`];
//! handlers declare `Path<T>` arguments and the extraction parses the
//! captured text into `T`.

use std::collections::HashMap;
use std::ops::Deref;

use super::error::PathError;

/// Captured parameters for one matched route.
#[derive(Debug, Clone)]
pub struct ParamContext {
	/// Parameters by name.
	params: HashMap<String, String>,
	/// Values in the order the pattern declares them.
	values: Vec<String>,
}

impl ParamContext {
	/// Creates a context from a pattern match.
	pub fn new(params: HashMap<String, String>, values: Vec<String>) -> Self {
		Self { params, values }
	}

	/// Looks up a parameter by name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Returns the number of captured parameters.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns whether nothing was captured.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns the captured value at `index`, in pattern order.
	pub(crate) fn value_at(&self, index: usize) -> Option<&str> {
		self.values.get(index).map(String::as_str)
	}
}

/// Extractor wrapper for one typed path parameter.
///
/// ```ignore
/// fn music_detail_page(Path(id): Path<i64>) -> Page { ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
	/// Unwraps the inner value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> Deref for Path<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> AsRef<T> for Path<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

/// Parses one captured value at a pattern position.
///
/// Blanket-implemented for every `FromStr` type, which covers the id types
/// the route table uses.
pub trait FromPathValue: Sized {
	/// Extracts the value at `index` from the context.
	///
	/// # Errors
	///
	/// [`PathError::CountMismatch`] when the pattern captured fewer values,
	/// [`PathError::ParseError`] when the text does not parse.
	fn from_value_at(ctx: &ParamContext, index: usize) -> Result<Self, PathError>;
}

impl<T> FromPathValue for T
where
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	fn from_value_at(ctx: &ParamContext, index: usize) -> Result<Self, PathError> {
		let raw = ctx.value_at(index).ok_or(PathError::CountMismatch {
			expected: index + 1,
			actual: ctx.len(),
		})?;
		raw.parse::<T>().map_err(|e| PathError::ParseError {
			param_index: index,
			param_type: std::any::type_name::<T>(),
			raw_value: raw.to_string(),
			source: e.to_string(),
		})
	}
}
