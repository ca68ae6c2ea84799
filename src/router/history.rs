//! Browser history integration.
//!
//! On wasm32 this drives the History API (`pushState`/`replaceState`) and
//! the `popstate` event. On native targets the same functions exist as
//! inert stand-ins so the router core stays testable with `cargo test`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a navigation reaches the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// Appends a new history entry.
	Push,
	/// Replaces the current history entry.
	Replace,
	/// Entry reached via browser back/forward; the stack is not written.
	Pop,
}

/// The state record attached to a history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// The committed path.
	pub path: String,
	/// Parameters captured by the matched route.
	#[serde(default)]
	pub params: HashMap<String, String>,
	/// Name of the matched route, if it was named.
	#[serde(default)]
	pub route_name: Option<String>,
}

impl HistoryState {
	/// Creates a state record for a path.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			params: HashMap::new(),
			route_name: None,
		}
	}

	/// Attaches captured parameters.
	pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
		self.params = params;
		self
	}

	/// Attaches the matched route name.
	pub fn with_route_name(mut self, name: Option<&str>) -> Self {
		self.route_name = name.map(str::to_string);
		self
	}
}

#[cfg(target_arch = "wasm32")]
mod web {
	use super::HistoryState;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::closure::Closure;
	use wasm_bindgen::prelude::JsValue;

	fn window() -> Result<web_sys::Window, String> {
		web_sys::window().ok_or_else(|| "window is not available".to_string())
	}

	/// Reads the current location path.
	pub fn current_path() -> Result<String, String> {
		window()?
			.location()
			.pathname()
			.map_err(|_| "location.pathname is not available".to_string())
	}

	fn write_state(state: &HistoryState, replace: bool) -> Result<(), String> {
		let history = window()?
			.history()
			.map_err(|_| "history is not available".to_string())?;
		let serialized = serde_json::to_string(state).map_err(|e| e.to_string())?;
		let js_state = JsValue::from_str(&serialized);
		let result = if replace {
			history.replace_state_with_url(&js_state, "", Some(&state.path))
		} else {
			history.push_state_with_url(&js_state, "", Some(&state.path))
		};
		result.map_err(|_| "history write was rejected".to_string())
	}

	/// Appends a history entry for the state.
	pub fn push_state(state: &HistoryState) -> Result<(), String> {
		write_state(state, false)
	}

	/// Replaces the current history entry with the state.
	pub fn replace_state(state: &HistoryState) -> Result<(), String> {
		write_state(state, true)
	}

	/// Registers a `popstate` listener.
	///
	/// The callback receives the restored path and, when the entry carries
	/// one, the deserialized [`HistoryState`]. The returned closure must be
	/// kept alive (or `forget()`-ten) for the listener to stay registered.
	pub fn setup_popstate_listener<F>(
		mut callback: F,
	) -> Result<Closure<dyn FnMut(web_sys::PopStateEvent)>, String>
	where
		F: FnMut(String, Option<HistoryState>) + 'static,
	{
		let closure = Closure::wrap(Box::new(move |event: web_sys::PopStateEvent| {
			let state = event
				.state()
				.as_string()
				.and_then(|raw| serde_json::from_str::<HistoryState>(&raw).ok());
			let path = current_path().unwrap_or_else(|_| "/".to_string());
			callback(path, state);
		}) as Box<dyn FnMut(web_sys::PopStateEvent)>);

		window()?
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
			.map_err(|_| "could not register popstate listener".to_string())?;

		Ok(closure)
	}
}

#[cfg(target_arch = "wasm32")]
pub use web::{current_path, push_state, replace_state, setup_popstate_listener};

#[cfg(not(target_arch = "wasm32"))]
mod native {
	use super::HistoryState;

	/// No browser environment; the router falls back to `/`.
	pub fn current_path() -> Result<String, String> {
		Err("no browser environment".to_string())
	}

	/// Accepted without effect outside a browser.
	pub fn push_state(_state: &HistoryState) -> Result<(), String> {
		Ok(())
	}

	/// Accepted without effect outside a browser.
	pub fn replace_state(_state: &HistoryState) -> Result<(), String> {
		Ok(())
	}
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{current_path, push_state, replace_state};
