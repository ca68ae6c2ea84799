//! The application route table.
//!
//! Declaration order is match order. The table is read-only once built;
//! the auth guard in front of it reads the session through the injected
//! store.

use std::sync::Arc;

use crate::guard::AuthGuard;
use crate::pages;
use crate::router::{RouteMeta, Router};
use crate::session::SessionStore;

/// Builds the router with the full route table and the auth guard.
pub fn build_router(session: Arc<dyn SessionStore + Send + Sync>) -> Router {
	Router::new()
		.named_route("Login", "/login", pages::login_page)
		.named_route("RegisterPage", "/register", pages::register_page)
		.named_route_with_meta("Home", "/", RouteMeta::auth_required(), pages::home_page)
		.named_route("MusicList", "/music-list", pages::music_list_page)
		.named_route_path("MusicDetail", "/music/{id}", pages::music_detail_page)
		.named_route("MyPlaylists", "/my-playlists", pages::my_playlists_page)
		.named_route_path("PlaylistDetail", "/playlist/{id}", pages::playlist_detail_page)
		// requires_admin is declared for the backend's benefit; the guard
		// below only enforces requires_auth.
		.named_route_path_with_meta(
			"MusicEdit",
			"/music/{id}/edit",
			RouteMeta::admin_required(),
			pages::music_edit_page,
		)
		.named_route("MyPage", "/my", pages::my_page)
		.named_route("Search", "/search", pages::search_results_page)
		.not_found(pages::not_found_page)
		.before_each(AuthGuard::new(session))
}
