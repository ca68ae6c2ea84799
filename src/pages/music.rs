//! Music catalog pages.

use crate::page::{Page, PageElement};
use crate::router::Path;

/// The full catalog listing.
pub fn music_list_page() -> Page {
	PageElement::new("section")
		.attr("class", "music-list-page")
		.child(PageElement::new("h1").child("Music").into_page())
		.child(
			PageElement::new("ul")
				.attr("id", "music-list")
				.into_page(),
		)
		.into_page()
}

/// One track: cover, metadata, comments, ratings.
pub fn music_detail_page(Path(id): Path<i64>) -> Page {
	PageElement::new("section")
		.attr("class", "music-detail-page")
		.attr("data-music-id", id.to_string())
		.child(PageElement::new("h1").child("Track").into_page())
		.child(
			PageElement::new("div")
				.attr("id", "music-detail")
				.into_page(),
		)
		.child(
			PageElement::new("div")
				.attr("id", "music-comments")
				.into_page(),
		)
		.into_page()
}

/// The catalog edit form for one track. Admin-gated in the route table.
pub fn music_edit_page(Path(id): Path<i64>) -> Page {
	PageElement::new("section")
		.attr("class", "music-edit-page")
		.attr("data-music-id", id.to_string())
		.child(PageElement::new("h1").child("Edit track").into_page())
		.child(
			PageElement::new("form")
				.attr("id", "music-edit-form")
				.child(
					PageElement::new("input")
						.attr("name", "title")
						.into_page(),
				)
				.child(
					PageElement::new("input")
						.attr("name", "artist_name")
						.into_page(),
				)
				.child(
					PageElement::new("input")
						.attr("name", "genre")
						.into_page(),
				)
				.child(
					PageElement::new("button")
						.attr("type", "submit")
						.child("Save")
						.into_page(),
				)
				.into_page(),
		)
		.into_page()
}
