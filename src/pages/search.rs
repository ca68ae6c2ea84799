//! Search results.

use crate::page::{Page, PageElement};

/// Results for the query carried in the location's query string.
pub fn search_results_page() -> Page {
	PageElement::new("section")
		.attr("class", "search-results-page")
		.child(PageElement::new("h1").child("Search").into_page())
		.child(
			PageElement::new("ul")
				.attr("id", "search-results")
				.into_page(),
		)
		.into_page()
}
