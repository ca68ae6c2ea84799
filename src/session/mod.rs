//! Session state as the routing core sees it.
//!
//! The browser owns the session; this module only reads it. [`store`]
//! holds the injected storage capability, [`user`] the typed user record
//! and its decode.

pub mod store;
pub mod user;

#[cfg(target_arch = "wasm32")]
pub use store::BrowserSession;
pub use store::{MemoryStore, SessionStore};
pub use user::{SESSION_USER_KEY, SessionError, SessionUser, UserId};
