//! The account page.

use crate::page::{Page, PageElement};

/// Profile and account settings for the current user.
pub fn my_page() -> Page {
	PageElement::new("section")
		.attr("class", "my-page")
		.child(PageElement::new("h1").child("My page").into_page())
		.child(
			PageElement::new("div")
				.attr("id", "profile")
				.into_page(),
		)
		.child(
			PageElement::new("div")
				.attr("id", "play-history")
				.into_page(),
		)
		.into_page()
}
