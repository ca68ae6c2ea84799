//! Session storage access.
//!
//! The guard never touches `sessionStorage` directly; it reads through the
//! [`SessionStore`] capability so the decision logic is testable without a
//! browser. The wasm32 adapter binds the capability to the real
//! session-scoped store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Read capability over session-scoped key-value text storage.
pub trait SessionStore {
	/// Returns the stored value for `key`, if any.
	fn get_item(&self, key: &str) -> Option<String>;
}

/// In-memory store for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store seeded with entries.
	pub fn with_data(data: HashMap<String, String>) -> Self {
		Self {
			data: Arc::new(RwLock::new(data)),
		}
	}

	/// Stores a value under `key`.
	pub fn set_item(&self, key: &str, value: &str) {
		self.data
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(key.to_string(), value.to_string());
	}

	/// Removes the value under `key`.
	pub fn remove_item(&self, key: &str) {
		self.data
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.remove(key);
	}

	/// Removes every entry.
	pub fn clear(&self) {
		self.data.write().unwrap_or_else(|e| e.into_inner()).clear();
	}

	/// Returns the number of stored entries.
	pub fn len(&self) -> usize {
		self.data.read().unwrap_or_else(|e| e.into_inner()).len()
	}

	/// Returns whether the store is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl SessionStore for MemoryStore {
	fn get_item(&self, key: &str) -> Option<String> {
		self.data
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(key)
			.cloned()
	}
}

/// Browser `window.sessionStorage` adapter.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
	/// Creates the adapter.
	pub fn new() -> Self {
		Self
	}
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
	fn get_item(&self, key: &str) -> Option<String> {
		let storage = web_sys::window()?.session_storage().ok().flatten()?;
		storage.get_item(key).ok().flatten()
	}
}
