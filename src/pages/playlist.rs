//! Playlist pages.

use crate::page::{Page, PageElement};
use crate::router::Path;

/// The current user's playlists.
pub fn my_playlists_page() -> Page {
	PageElement::new("section")
		.attr("class", "my-playlists-page")
		.child(PageElement::new("h1").child("My playlists").into_page())
		.child(
			PageElement::new("ul")
				.attr("id", "playlist-list")
				.into_page(),
		)
		.into_page()
}

/// One playlist with its tracks.
pub fn playlist_detail_page(Path(id): Path<i64>) -> Page {
	PageElement::new("section")
		.attr("class", "playlist-detail-page")
		.attr("data-playlist-id", id.to_string())
		.child(PageElement::new("h1").child("Playlist").into_page())
		.child(
			PageElement::new("ul")
				.attr("id", "playlist-songs")
				.into_page(),
		)
		.into_page()
}
