//! Encore's single-page front-end routing core.
//!
//! The crate wires URL paths to page components and gates protected routes
//! on the session-stored user record:
//!
//! - [`router`] — path patterns, the route table, typed path parameters,
//!   browser-history integration, and the router core.
//! - [`guard`] — navigation guards; [`AuthGuard`] is the authentication
//!   gate.
//! - [`session`] — the injected session-storage capability and the typed
//!   user record.
//! - [`page`] / [`pages`] — the renderable page tree and the application's
//!   page components.
//! - [`routes`] — the application route table, assembled by
//!   [`build_router`].
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let router = encore::build_router(Arc::new(encore::session::BrowserSession::new()));
//! router.setup_history_listener();
//! router.push("/")?;
//! ```

pub mod guard;
pub mod page;
pub mod pages;
pub mod router;
pub mod routes;
pub mod session;

pub use guard::{AuthGuard, GuardDecision, NavigationGuard};
pub use page::{Page, PageElement};
pub use router::{
	Path, PathPattern, Route, RouteMatch, RouteMeta, Router, RouterError,
};
pub use routes::build_router;
pub use session::{MemoryStore, SESSION_USER_KEY, SessionStore, SessionUser};
