//! Navigation guards.
//!
//! A guard inspects every navigation attempt before it commits and picks
//! exactly one continuation: let it proceed, redirect to a named route, or
//! send it to a different path. [`AuthGuard`] is the authentication gate
//! in front of routes flagged `requires_auth`.

use std::sync::Arc;

use crate::router::RouteMatch;
use crate::session::{SESSION_USER_KEY, SessionStore, SessionUser};

/// The continuation a guard picks for a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
	/// Commit the navigation unmodified.
	Proceed,
	/// Abandon the attempt and navigate to the named route instead.
	RedirectNamed(String),
	/// Abandon the attempt and navigate to the path instead.
	RedirectPath(String),
}

/// Hook consulted before every navigation commits.
///
/// `to` is the matched target; `from` is the route the application is
/// leaving, absent on the very first navigation. Returning the decision is
/// what makes "call the continuation exactly once" hold by construction.
pub trait NavigationGuard: Send + Sync {
	/// Decides the navigation attempt.
	fn before_navigation(&self, to: &RouteMatch, from: Option<&RouteMatch>) -> GuardDecision;
}

/// Adapts a closure into a [`NavigationGuard`].
pub struct FnGuard<F>(F);

/// Wraps a `(to, from) -> GuardDecision` closure as a guard.
pub fn guard_fn<F>(f: F) -> FnGuard<F>
where
	F: Fn(&RouteMatch, Option<&RouteMatch>) -> GuardDecision + Send + Sync,
{
	FnGuard(f)
}

impl<F> NavigationGuard for FnGuard<F>
where
	F: Fn(&RouteMatch, Option<&RouteMatch>) -> GuardDecision + Send + Sync,
{
	fn before_navigation(&self, to: &RouteMatch, from: Option<&RouteMatch>) -> GuardDecision {
		(self.0)(to, from)
	}
}

/// Authentication gate over the session-stored user record.
///
/// Reads the record through the injected [`SessionStore`], so the decision
/// is a function of (target, source, store) and nothing ambient. A record
/// that fails the typed decode is logged and treated as no session at all;
/// the user is redirected to login exactly as if they had never signed in.
pub struct AuthGuard {
	store: Arc<dyn SessionStore + Send + Sync>,
	session_key: String,
	login_route: String,
}

impl AuthGuard {
	/// Creates the guard with the default session key and login route.
	pub fn new(store: Arc<dyn SessionStore + Send + Sync>) -> Self {
		Self {
			store,
			session_key: SESSION_USER_KEY.to_string(),
			login_route: "Login".to_string(),
		}
	}

	/// Overrides the session-storage key the record is read from.
	pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
		self.session_key = key.into();
		self
	}

	/// Overrides the name of the route unauthenticated users are sent to.
	pub fn with_login_route(mut self, name: impl Into<String>) -> Self {
		self.login_route = name.into();
		self
	}

	/// Reads and decodes the session user, mapping malformed data to
	/// "no user" with a diagnostic.
	fn current_user(&self) -> Option<SessionUser> {
		let raw = self.store.get_item(&self.session_key)?;
		match SessionUser::decode(&raw) {
			Ok(user) => Some(user),
			Err(err) => {
				tracing::error!(
					key = %self.session_key,
					error = %err,
					"failed to decode session user record"
				);
				None
			}
		}
	}

	fn is_logged_in(&self) -> bool {
		self.current_user()
			.map(|user| user.is_authenticated())
			.unwrap_or(false)
	}
}

impl NavigationGuard for AuthGuard {
	fn before_navigation(&self, to: &RouteMatch, _from: Option<&RouteMatch>) -> GuardDecision {
		if to.meta().requires_auth && !self.is_logged_in() {
			return GuardDecision::RedirectNamed(self.login_route.clone());
		}
		GuardDecision::Proceed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::Page;
	use crate::router::{Route, RouteMeta};
	use crate::session::MemoryStore;
	use rstest::rstest;
	use std::collections::HashMap;

	fn match_for(meta: RouteMeta) -> RouteMatch {
		RouteMatch {
			route: Route::named("Home", "/", || Page::Empty).with_meta(meta),
			params: HashMap::new(),
			param_values: Vec::new(),
		}
	}

	fn guard_with(store: &MemoryStore) -> AuthGuard {
		AuthGuard::new(Arc::new(store.clone()))
	}

	#[test]
	fn test_public_route_proceeds_without_session() {
		let store = MemoryStore::new();
		let guard = guard_with(&store);
		let to = match_for(RouteMeta::new());

		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::Proceed
		);
	}

	#[test]
	fn test_protected_route_redirects_without_session() {
		let store = MemoryStore::new();
		let guard = guard_with(&store);
		let to = match_for(RouteMeta::auth_required());

		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::RedirectNamed("Login".to_string())
		);
	}

	#[test]
	fn test_protected_route_proceeds_with_user() {
		let store = MemoryStore::new();
		store.set_item("user", r#"{"userid":1,"username":"a"}"#);
		let guard = guard_with(&store);
		let to = match_for(RouteMeta::auth_required());

		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::Proceed
		);
	}

	#[rstest]
	#[case("{not json")]
	#[case(r#"{"userid":0,"username":""}"#)]
	#[case(r#"{"userid":1,"username":""}"#)]
	fn test_unusable_records_redirect(#[case] raw: &str) {
		let store = MemoryStore::new();
		store.set_item("user", raw);
		let guard = guard_with(&store);
		let to = match_for(RouteMeta::auth_required());

		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::RedirectNamed("Login".to_string())
		);
	}

	#[test]
	fn test_admin_flag_alone_is_not_gated_here() {
		// requires_admin without requires_auth: the auth guard only reads
		// the auth flag, so this passes through.
		let store = MemoryStore::new();
		let guard = guard_with(&store);
		let to = match_for(RouteMeta {
			requires_auth: false,
			requires_admin: true,
		});

		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::Proceed
		);
	}

	#[test]
	fn test_custom_key_and_login_route() {
		let store = MemoryStore::new();
		store.set_item("account", r#"{"userid":9,"username":"z"}"#);
		let guard = guard_with(&store)
			.with_session_key("account")
			.with_login_route("SignIn");
		let to = match_for(RouteMeta::auth_required());

		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::Proceed
		);

		store.remove_item("account");
		assert_eq!(
			guard.before_navigation(&to, None),
			GuardDecision::RedirectNamed("SignIn".to_string())
		);
	}

	#[test]
	fn test_closure_guards_adapt() {
		let always_block = guard_fn(|_: &RouteMatch, _: Option<&RouteMatch>| {
			GuardDecision::RedirectPath("/".to_string())
		});
		let to = match_for(RouteMeta::new());
		assert_eq!(
			always_block.before_navigation(&to, None),
			GuardDecision::RedirectPath("/".to_string())
		);
	}
}
