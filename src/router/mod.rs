//! Client-side routing: patterns, the route table, typed parameters,
//! browser history, and the router core.

pub mod core;
pub mod error;
pub mod handler;
pub mod history;
pub mod params;
pub mod pattern;
pub mod route;

pub use self::core::Router;
pub use error::{PathError, RouterError};
pub use handler::RouteHandler;
pub use history::{HistoryState, NavigationType};
pub use params::{FromPathValue, ParamContext, Path};
pub use pattern::PathPattern;
pub use route::{Route, RouteMatch, RouteMeta};
