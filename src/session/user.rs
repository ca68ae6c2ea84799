//! The session-stored user record.
//!
//! Login writes a JSON object under a fixed key; the guard decodes it here.
//! Decoding is typed: a record that is not valid JSON is a distinct
//! [`SessionError::Malformed`] outcome, which callers map to "not logged
//! in" instead of letting it escape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed session-storage key the user record is written under at login.
pub const SESSION_USER_KEY: &str = "user";

/// Error decoding a stored user record.
#[derive(Debug, Error)]
pub enum SessionError {
	/// The stored text is not a valid user record.
	#[error("malformed session user record: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// A user id as the backend issues it.
///
/// Production ids are UUID strings; fixtures and older records carry
/// numeric ids. Zero and the empty string are the absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
	/// Numeric id.
	Number(i64),
	/// String id.
	Text(String),
}

impl UserId {
	/// Returns whether the id identifies an actual user.
	pub fn is_present(&self) -> bool {
		match self {
			UserId::Number(n) => *n != 0,
			UserId::Text(s) => !s.is_empty(),
		}
	}
}

impl Default for UserId {
	fn default() -> Self {
		UserId::Number(0)
	}
}

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UserId::Number(n) => write!(f, "{}", n),
			UserId::Text(s) => write!(f, "{}", s),
		}
	}
}

/// The identity record persisted at login.
///
/// Unknown fields are ignored; the record carries more than the routing
/// core reads. Missing fields decode to their absent values rather than
/// failing the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionUser {
	/// The user's id.
	#[serde(default)]
	pub userid: UserId,
	/// The user's display name.
	#[serde(default)]
	pub username: String,
}

impl SessionUser {
	/// Decodes a stored record.
	///
	/// # Errors
	///
	/// Returns [`SessionError::Malformed`] when the text is not valid
	/// JSON for the record shape.
	pub fn decode(raw: &str) -> Result<Self, SessionError> {
		Ok(serde_json::from_str(raw)?)
	}

	/// Returns whether the record identifies a logged-in user.
	///
	/// Both the id and the username must be present; a zeroed or blank
	/// record left behind by a broken logout does not count.
	pub fn is_authenticated(&self) -> bool {
		self.userid.is_present() && !self.username.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_decode_numeric_id() {
		let user = SessionUser::decode(r#"{"userid":1,"username":"a"}"#).unwrap();
		assert_eq!(user.userid, UserId::Number(1));
		assert!(user.is_authenticated());
	}

	#[test]
	fn test_decode_uuid_id() {
		let user = SessionUser::decode(
			r#"{"userid":"7d0f3dd0-9c2b-4e60-9e3c-2f8c1f6f8b1a","username":"kaoru"}"#,
		)
		.unwrap();
		assert!(user.is_authenticated());
	}

	#[test]
	fn test_extra_fields_are_ignored() {
		let user = SessionUser::decode(
			r#"{"userid":3,"username":"mei","avatar":"/img/mei.png","theme":"dark"}"#,
		)
		.unwrap();
		assert!(user.is_authenticated());
		assert_eq!(user.username, "mei");
	}

	#[rstest]
	#[case(r#"{"userid":0,"username":""}"#)]
	#[case(r#"{"userid":0,"username":"a"}"#)]
	#[case(r#"{"userid":1,"username":""}"#)]
	#[case(r#"{"userid":"","username":"a"}"#)]
	#[case(r#"{}"#)]
	fn test_falsy_fields_are_not_authenticated(#[case] raw: &str) {
		let user = SessionUser::decode(raw).unwrap();
		assert!(!user.is_authenticated());
	}

	#[rstest]
	#[case("{not json")]
	#[case("")]
	#[case("null,")]
	#[case(r#"{"userid":1.5,"username":"a"}"#)]
	fn test_malformed_records_fail_decode(#[case] raw: &str) {
		assert!(matches!(
			SessionUser::decode(raw),
			Err(SessionError::Malformed(_))
		));
	}

	#[test]
	fn test_user_id_display() {
		assert_eq!(UserId::Number(7).to_string(), "7");
		assert_eq!(UserId::Text("u-7".to_string()).to_string(), "u-7");
	}
}
