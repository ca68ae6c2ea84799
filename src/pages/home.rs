//! The landing page and the not-found fallback.

use crate::page::{Page, PageElement};

/// The signed-in landing page.
pub fn home_page() -> Page {
	PageElement::new("section")
		.attr("class", "home-page")
		.child(PageElement::new("h1").child("Encore").into_page())
		.child(
			PageElement::new("nav")
				.attr("class", "home-nav")
				.child(
					PageElement::new("a")
						.attr("href", "/music-list")
						.child("Browse music")
						.into_page(),
				)
				.child(
					PageElement::new("a")
						.attr("href", "/my-playlists")
						.child("My playlists")
						.into_page(),
				)
				.child(
					PageElement::new("a")
						.attr("href", "/search")
						.child("Search")
						.into_page(),
				)
				.into_page(),
		)
		.into_page()
}

/// Rendered when no route matches the current path.
pub fn not_found_page() -> Page {
	PageElement::new("section")
		.attr("class", "not-found-page")
		.child(PageElement::new("h1").child("Page not found").into_page())
		.child(
			PageElement::new("a")
				.attr("href", "/")
				.child("Back to home")
				.into_page(),
		)
		.into_page()
}
