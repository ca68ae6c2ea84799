//! Page components bound to the route table.
//!
//! These are the renderable units behind each route. Data loading and
//! interactivity belong to the host shell; the components here produce the
//! static page skeletons.

pub mod account;
pub mod auth;
pub mod home;
pub mod music;
pub mod playlist;
pub mod search;

pub use account::my_page;
pub use auth::{login_page, register_page};
pub use home::{home_page, not_found_page};
pub use music::{music_detail_page, music_edit_page, music_list_page};
pub use playlist::{my_playlists_page, playlist_detail_page};
pub use search::search_results_page;
