//! Integration tests for the authentication navigation guard
//!
//! This test file verifies the integration between:
//! - The application route table and its metadata flags
//! - The auth guard's session read and typed decode
//! - Redirect handling in the router core
//!
//! ## Testing Strategy
//! Tests drive the real `build_router` table with an injected in-memory
//! session store, asserting on the committed route after each navigation
//! attempt.

use std::sync::Arc;

use encore::session::MemoryStore;
use encore::{RouterError, build_router};
use rstest::rstest;

const USER_KEY: &str = "user";

fn router_with_store() -> (encore::Router, MemoryStore) {
	let store = MemoryStore::new();
	let router = build_router(Arc::new(store.clone()));
	(router, store)
}

// ============================================================
// Public routes
// ============================================================

/// Test Intent: Verify routes without requires_auth ignore session state
/// Integration Point: route table metadata + guard dispatch
#[rstest]
#[case("/login", "Login")]
#[case("/register", "RegisterPage")]
#[case("/music-list", "MusicList")]
#[case("/music/42", "MusicDetail")]
#[case("/my-playlists", "MyPlaylists")]
#[case("/playlist/3", "PlaylistDetail")]
#[case("/my", "MyPage")]
#[case("/search", "Search")]
fn test_public_routes_proceed_without_session(#[case] path: &str, #[case] expected: &str) {
	let (router, _store) = router_with_store();

	router.push(path).expect("navigation should commit");

	assert_eq!(router.current_path(), path);
	assert_eq!(router.current_route_name().as_deref(), Some(expected));
}

/// Test Intent: Verify public routes also proceed when a session exists
/// Integration Point: guard decision for unprotected targets
#[test]
fn test_public_route_proceeds_with_session() {
	let (router, store) = router_with_store();
	store.set_item(USER_KEY, r#"{"userid":1,"username":"a"}"#);

	router.push("/music-list").unwrap();

	assert_eq!(router.current_route_name().as_deref(), Some("MusicList"));
}

// ============================================================
// Protected routes
// ============================================================

/// Test Intent: Verify a protected route redirects to Login with no session
/// Integration Point: requires_auth flag + RedirectNamed resolution
#[test]
fn test_protected_route_redirects_without_session() {
	let (router, _store) = router_with_store();

	router.push("/").expect("redirect should commit");

	assert_eq!(router.current_path(), "/login");
	assert_eq!(router.current_route_name().as_deref(), Some("Login"));
}

/// Test Intent: Verify a protected route proceeds for a logged-in user
/// Integration Point: session decode + truthy field check
#[test]
fn test_protected_route_proceeds_with_session() {
	let (router, store) = router_with_store();
	store.set_item(USER_KEY, r#"{"userid":1,"username":"a"}"#);

	router.push("/").unwrap();

	assert_eq!(router.current_path(), "/");
	assert_eq!(router.current_route_name().as_deref(), Some("Home"));
}

/// Test Intent: Verify UUID-string userids authenticate
/// Integration Point: untagged UserId decode
#[test]
fn test_string_userid_authenticates() {
	let (router, store) = router_with_store();
	store.set_item(
		USER_KEY,
		r#"{"userid":"7d0f3dd0-9c2b-4e60-9e3c-2f8c1f6f8b1a","username":"kaoru"}"#,
	);

	router.push("/").unwrap();

	assert_eq!(router.current_route_name().as_deref(), Some("Home"));
}

/// Test Intent: Verify falsy fields are treated as not logged in
/// Integration Point: is_authenticated over decoded records
#[rstest]
#[case(r#"{"userid":0,"username":""}"#)]
#[case(r#"{"userid":0,"username":"a"}"#)]
#[case(r#"{"userid":1,"username":""}"#)]
#[case(r#"{"userid":"","username":"a"}"#)]
#[case("{}")]
fn test_falsy_session_fields_redirect(#[case] record: &str) {
	let (router, store) = router_with_store();
	store.set_item(USER_KEY, record);

	router.push("/").unwrap();

	assert_eq!(router.current_route_name().as_deref(), Some("Login"));
}

/// Test Intent: Verify malformed session data behaves exactly like no session
/// Integration Point: typed decode failure mapped to "not logged in"
#[rstest]
#[case("{not json")]
#[case("")]
#[case("[1,2,3]")]
#[case(r#""just a string""#)]
fn test_malformed_session_redirects_without_error(#[case] record: &str) {
	let (router, store) = router_with_store();
	store.set_item(USER_KEY, record);

	// The decode failure stays inside the guard.
	let result = router.push("/");

	assert!(result.is_ok(), "guard must not surface decode errors");
	assert_eq!(router.current_route_name().as_deref(), Some("Login"));
}

/// Test Intent: Verify the session is re-read on every attempt
/// Integration Point: guard statelessness across navigations
#[test]
fn test_login_between_attempts_changes_outcome() {
	let (router, store) = router_with_store();

	router.push("/").unwrap();
	assert_eq!(router.current_route_name().as_deref(), Some("Login"));

	store.set_item(USER_KEY, r#"{"userid":1,"username":"a"}"#);
	router.push("/").unwrap();
	assert_eq!(router.current_route_name().as_deref(), Some("Home"));

	store.remove_item(USER_KEY);
	router.push("/").unwrap();
	assert_eq!(router.current_route_name().as_deref(), Some("Login"));
}

// ============================================================
// Admin flag
// ============================================================

/// Test Intent: Verify the admin flag is declared but only auth is enforced
/// Integration Point: route metadata + guard scope
#[test]
fn test_music_edit_enforces_auth_only() {
	let (router, store) = router_with_store();

	// Unauthenticated: blocked by requires_auth.
	router.push("/music/5/edit").unwrap();
	assert_eq!(router.current_route_name().as_deref(), Some("Login"));

	// Any authenticated user passes; requires_admin stays declarative.
	store.set_item(USER_KEY, r#"{"userid":2,"username":"b"}"#);
	router.push("/music/5/edit").unwrap();
	assert_eq!(router.current_route_name().as_deref(), Some("MusicEdit"));

	let edit = router.route_by_name("MusicEdit").unwrap();
	assert!(edit.meta().requires_admin);
}

// ============================================================
// Error paths
// ============================================================

/// Test Intent: Verify redirect chains cannot recurse forever
/// Integration Point: redirect bound in the router core
#[test]
fn test_guard_redirect_loop_is_cut_off() {
	use encore::{GuardDecision, RouteMatch};

	let store = MemoryStore::new();
	let router = build_router(Arc::new(store)).before_each_fn(
		|to: &RouteMatch, _from: Option<&RouteMatch>| {
			// A misconfigured guard that bounces everything to Home,
			// including Home's own login redirect target.
			if to.route_name() == Some("Login") {
				GuardDecision::RedirectNamed("Home".to_string())
			} else {
				GuardDecision::Proceed
			}
		},
	);

	let result = router.push("/");
	assert!(matches!(result, Err(RouterError::RedirectLoop(_))));
}
