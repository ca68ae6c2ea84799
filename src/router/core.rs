//! The client-side router.
//!
//! Owns the route table, resolves paths in declaration order, and runs the
//! registered navigation guards before committing a navigation to browser
//! history. A redirect returned by a guard starts a fresh navigation
//! attempt that is evaluated like any other.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::guard::{GuardDecision, NavigationGuard};
use crate::page::Page;

use super::error::RouterError;
use super::handler::path_handler;
use super::history::{self, HistoryState, NavigationType};
use super::params::{FromPathValue, ParamContext, Path};
use super::route::{Route, RouteMatch, RouteMeta};

/// Redirect chains longer than this indicate a guard redirecting to a
/// route that is itself rejected, so the attempt is abandoned instead of
/// recursing forever.
const MAX_REDIRECTS: usize = 8;

/// The router: an ordered route table plus navigation state.
pub struct Router {
	routes: Vec<Route>,
	named_routes: HashMap<String, usize>,
	guards: Vec<Arc<dyn NavigationGuard>>,
	current_path: Rc<RefCell<String>>,
	current: Rc<RefCell<Option<RouteMatch>>>,
	not_found: Option<Arc<dyn Fn() -> Page + Send + Sync>>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.routes.len())
			.field("guards", &self.guards.len())
			.field("current_path", &self.current_path.borrow())
			.finish()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates an empty router positioned at the browser's current path,
	/// or `/` outside a browser.
	pub fn new() -> Self {
		let initial_path = history::current_path().unwrap_or_else(|_| "/".to_string());
		Self {
			routes: Vec::new(),
			named_routes: HashMap::new(),
			guards: Vec::new(),
			current_path: Rc::new(RefCell::new(initial_path)),
			current: Rc::new(RefCell::new(None)),
			not_found: None,
		}
	}

	/// Registers a route.
	///
	/// Named routes become addressable through [`Router::reverse`] and
	/// [`Router::push_named`]; a re-used name takes over the entry.
	pub fn register(mut self, route: Route) -> Self {
		let index = self.routes.len();
		if let Some(name) = route.name() {
			self.named_routes.insert(name.to_string(), index);
		}
		self.routes.push(route);
		self
	}

	/// Adds an unnamed route.
	pub fn route<F>(self, pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.register(Route::new(pattern, component))
	}

	/// Adds a named route.
	pub fn named_route<F>(self, name: &str, pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.register(Route::named(name, pattern, component))
	}

	/// Adds a named route with metadata flags.
	pub fn named_route_with_meta<F>(
		self,
		name: &str,
		pattern: &str,
		meta: RouteMeta,
		component: F,
	) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.register(Route::named(name, pattern, component).with_meta(meta))
	}

	/// Adds an unnamed route whose component takes one typed path
	/// parameter.
	pub fn route_path<F, T>(self, pattern: &str, component: F) -> Self
	where
		F: Fn(Path<T>) -> Page + Send + Sync + 'static,
		T: FromPathValue + Send + Sync + 'static,
	{
		self.register(Route::from_parts(
			pattern,
			None,
			path_handler(component),
			RouteMeta::new(),
		))
	}

	/// Adds a named route whose component takes one typed path parameter.
	pub fn named_route_path<F, T>(self, name: &str, pattern: &str, component: F) -> Self
	where
		F: Fn(Path<T>) -> Page + Send + Sync + 'static,
		T: FromPathValue + Send + Sync + 'static,
	{
		self.register(Route::from_parts(
			pattern,
			Some(name.to_string()),
			path_handler(component),
			RouteMeta::new(),
		))
	}

	/// Adds a named single-parameter route with metadata flags.
	pub fn named_route_path_with_meta<F, T>(
		self,
		name: &str,
		pattern: &str,
		meta: RouteMeta,
		component: F,
	) -> Self
	where
		F: Fn(Path<T>) -> Page + Send + Sync + 'static,
		T: FromPathValue + Send + Sync + 'static,
	{
		self.register(Route::from_parts(
			pattern,
			Some(name.to_string()),
			path_handler(component),
			meta,
		))
	}

	/// Registers a navigation guard.
	///
	/// Guards run in registration order on every attempt whose target
	/// matched a route; the first non-proceed decision wins.
	pub fn before_each<G>(mut self, guard: G) -> Self
	where
		G: NavigationGuard + 'static,
	{
		self.guards.push(Arc::new(guard));
		self
	}

	/// Registers a closure as a navigation guard.
	pub fn before_each_fn<F>(self, guard: F) -> Self
	where
		F: Fn(&RouteMatch, Option<&RouteMatch>) -> GuardDecision + Send + Sync + 'static,
	{
		self.before_each(crate::guard::guard_fn(guard))
	}

	/// Sets the component rendered when no route matches.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(component));
		self
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether a route name is registered.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Looks up a route descriptor by name.
	pub fn route_by_name(&self, name: &str) -> Option<&Route> {
		self.named_routes.get(name).map(|&index| &self.routes[index])
	}

	/// Resolves a path against the table, first match in declaration
	/// order.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		match_in(&self.routes, path)
	}

	/// Returns the path the router is currently at.
	pub fn current_path(&self) -> String {
		self.current_path.borrow().clone()
	}

	/// Returns the name of the current route, when the last committed
	/// navigation matched a named route.
	pub fn current_route_name(&self) -> Option<String> {
		self.current
			.borrow()
			.as_ref()
			.and_then(|m| m.route_name().map(str::to_string))
	}

	/// Navigates to a path, appending a history entry.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Push, 0)
	}

	/// Navigates to a path, replacing the current history entry.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Replace, 0)
	}

	/// Navigates to a named route.
	pub fn push_named(&self, name: &str, params: &[(&str, &str)]) -> Result<(), RouterError> {
		let path = self.reverse(name, params)?;
		self.push(&path)
	}

	/// Generates a path from a route name and parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let route = self
			.route_by_name(name)
			.ok_or_else(|| RouterError::UnknownRouteName(name.to_string()))?;
		let params: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		route.pattern().reverse(&params).ok_or_else(|| {
			let missing = route
				.pattern()
				.param_names()
				.iter()
				.find(|n| !params.contains_key(*n))
				.cloned()
				.unwrap_or_else(|| "unknown".to_string());
			RouterError::MissingParameter(missing)
		})
	}

	/// Renders the component for the current path, falling back to the
	/// not-found component when nothing matches or the handler fails.
	pub fn render_current(&self) -> Option<Page> {
		let path = self.current_path();
		match self.match_path(&path) {
			Some(route_match) => {
				let ctx = ParamContext::new(
					route_match.params.clone(),
					route_match.param_values.clone(),
				);
				match route_match.route.handler().handle(&ctx) {
					Ok(page) => Some(page),
					Err(_) => self.not_found.as_ref().map(|f| f()),
				}
			}
			None => self.not_found.as_ref().map(|f| f()),
		}
	}

	/// One navigation attempt; a guard redirect recurses as a new attempt.
	fn navigate(
		&self,
		path: &str,
		nav_type: NavigationType,
		redirects: usize,
	) -> Result<(), RouterError> {
		if redirects > MAX_REDIRECTS {
			return Err(RouterError::RedirectLoop(path.to_string()));
		}

		let target = self.match_path(path);
		if let Some(ref to) = target {
			let from = self.current.borrow().clone();
			for guard in &self.guards {
				match guard.before_navigation(to, from.as_ref()) {
					GuardDecision::Proceed => {}
					GuardDecision::RedirectNamed(name) => {
						let redirect = self.reverse(&name, &[])?;
						return self.navigate(&redirect, nav_type, redirects + 1);
					}
					GuardDecision::RedirectPath(redirect) => {
						return self.navigate(&redirect, nav_type, redirects + 1);
					}
				}
			}
		}

		self.commit(path, target, nav_type)
	}

	fn commit(
		&self,
		path: &str,
		target: Option<RouteMatch>,
		nav_type: NavigationType,
	) -> Result<(), RouterError> {
		let state = HistoryState::new(path)
			.with_params(
				target
					.as_ref()
					.map(|m| m.params.clone())
					.unwrap_or_default(),
			)
			.with_route_name(target.as_ref().and_then(|m| m.route_name()));

		match nav_type {
			NavigationType::Push => history::push_state(&state),
			NavigationType::Replace => history::replace_state(&state),
			NavigationType::Pop => Ok(()),
		}
		.map_err(RouterError::NavigationFailed)?;

		*self.current_path.borrow_mut() = path.to_string();
		*self.current.borrow_mut() = target;
		Ok(())
	}

	/// Listens for browser back/forward navigation and restores the
	/// router's position from the popped entry.
	///
	/// The listener closure is leaked intentionally; it lives for the
	/// page's lifetime.
	#[cfg(target_arch = "wasm32")]
	pub fn setup_history_listener(&self) {
		let routes = self.routes.clone();
		let current_path = Rc::clone(&self.current_path);
		let current = Rc::clone(&self.current);

		let closure = history::setup_popstate_listener(move |path, _state| {
			*current.borrow_mut() = match_in(&routes, &path);
			*current_path.borrow_mut() = path;
		});

		if let Ok(closure) = closure {
			closure.forget();
		}
	}

	/// No browser history outside wasm32.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn setup_history_listener(&self) {}
}

/// Resolves a path against a route slice, first match wins.
fn match_in(routes: &[Route], path: &str) -> Option<RouteMatch> {
	routes.iter().find_map(|route| {
		route.pattern().matches(path).map(|(params, param_values)| {
			RouteMatch {
				route: route.clone(),
				params,
				param_values,
			}
		})
	})
}
