//! Login and registration pages.

use crate::page::{Page, PageElement};

/// The login form. Unauthenticated navigation to protected routes lands
/// here.
pub fn login_page() -> Page {
	PageElement::new("section")
		.attr("class", "login-page")
		.child(PageElement::new("h1").child("Sign in").into_page())
		.child(
			PageElement::new("form")
				.attr("id", "login-form")
				.child(
					PageElement::new("input")
						.attr("name", "login_id")
						.attr("placeholder", "Login id")
						.into_page(),
				)
				.child(
					PageElement::new("input")
						.attr("name", "password")
						.attr("type", "password")
						.into_page(),
				)
				.child(
					PageElement::new("button")
						.attr("type", "submit")
						.child("Sign in")
						.into_page(),
				)
				.into_page(),
		)
		.into_page()
}

/// The account registration form.
pub fn register_page() -> Page {
	PageElement::new("section")
		.attr("class", "register-page")
		.child(PageElement::new("h1").child("Create account").into_page())
		.child(
			PageElement::new("form")
				.attr("id", "register-form")
				.child(
					PageElement::new("input")
						.attr("name", "login_id")
						.attr("placeholder", "Login id")
						.into_page(),
				)
				.child(
					PageElement::new("input")
						.attr("name", "username")
						.attr("placeholder", "Display name")
						.into_page(),
				)
				.child(
					PageElement::new("input")
						.attr("name", "password")
						.attr("type", "password")
						.into_page(),
				)
				.child(
					PageElement::new("button")
						.attr("type", "submit")
						.child("Register")
						.into_page(),
				)
				.into_page(),
		)
		.into_page()
}
