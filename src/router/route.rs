//! Route descriptors and match results.

use std::collections::HashMap;
use std::sync::Arc;

use crate::page::Page;

use super::handler::{RouteHandler, component_handler};
use super::pattern::PathPattern;

/// Per-route metadata flags consulted during navigation.
///
/// `requires_admin` is declared on the table but only `requires_auth` is
/// enforced client-side; admin checks belong to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
	/// Navigation requires an authenticated session user.
	pub requires_auth: bool,
	/// Navigation additionally requires an elevated user.
	pub requires_admin: bool,
}

impl RouteMeta {
	/// No flags set.
	pub const fn new() -> Self {
		Self {
			requires_auth: false,
			requires_admin: false,
		}
	}

	/// Requires an authenticated user.
	pub const fn auth_required() -> Self {
		Self {
			requires_auth: true,
			requires_admin: false,
		}
	}

	/// Requires an authenticated, elevated user.
	pub const fn admin_required() -> Self {
		Self {
			requires_auth: true,
			requires_admin: true,
		}
	}
}

/// One entry of the route table.
pub struct Route {
	pattern: PathPattern,
	name: Option<String>,
	handler: Arc<dyn RouteHandler>,
	meta: RouteMeta,
}

impl Clone for Route {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern.clone(),
			name: self.name.clone(),
			handler: Arc::clone(&self.handler),
			meta: self.meta,
		}
	}
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.field("meta", &self.meta)
			.finish()
	}
}

impl Route {
	/// Creates an unnamed route.
	///
	/// # Panics
	///
	/// Panics if the pattern does not compile. Use [`PathPattern::new`]
	/// directly for fallible construction.
	pub fn new<F>(pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		Self::from_parts(pattern, None, component_handler(component), RouteMeta::new())
	}

	/// Creates a named route.
	///
	/// # Panics
	///
	/// Panics if the pattern does not compile.
	pub fn named<F>(name: impl Into<String>, pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		Self::from_parts(
			pattern,
			Some(name.into()),
			component_handler(component),
			RouteMeta::new(),
		)
	}

	pub(crate) fn from_parts(
		pattern: &str,
		name: Option<String>,
		handler: Arc<dyn RouteHandler>,
		meta: RouteMeta,
	) -> Self {
		Self {
			pattern: PathPattern::new(pattern)
				.unwrap_or_else(|e| panic!("invalid route pattern '{}': {}", pattern, e)),
			name,
			handler,
			meta,
		}
	}

	/// Replaces the metadata flags.
	pub fn with_meta(mut self, meta: RouteMeta) -> Self {
		self.meta = meta;
		self
	}

	/// Returns the route name, if named.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the compiled pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns the metadata flags.
	pub fn meta(&self) -> RouteMeta {
		self.meta
	}

	pub(crate) fn handler(&self) -> &Arc<dyn RouteHandler> {
		&self.handler
	}
}

/// A route that matched a concrete path, with its captured parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route descriptor.
	pub route: Route,
	/// Captured parameters by name.
	pub params: HashMap<String, String>,
	/// Captured values in pattern declaration order.
	pub(crate) param_values: Vec<String>,
}

impl RouteMatch {
	/// Returns the matched route's name, if named.
	pub fn route_name(&self) -> Option<&str> {
		self.route.name()
	}

	/// Returns the matched route's metadata flags.
	pub fn meta(&self) -> RouteMeta {
		self.route.meta()
	}
}
