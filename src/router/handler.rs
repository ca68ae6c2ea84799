//! Handler abstraction over route component signatures.
//!
//! Routes store an `Arc<dyn RouteHandler>`; the concrete wrappers adapt the
//! two component shapes the route table uses — `Fn() -> Page` and
//! `Fn(Path<T>) -> Page`.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::page::Page;

use super::error::RouterError;
use super::params::{FromPathValue, ParamContext, Path};

/// A route component invocation.
pub trait RouteHandler: Send + Sync {
	/// Renders the component for a matched route.
	///
	/// # Errors
	///
	/// Returns [`RouterError::PathExtraction`] when a typed parameter does
	/// not extract from the captured values.
	fn handle(&self, ctx: &ParamContext) -> Result<Page, RouterError>;
}

/// Wraps a `Fn() -> Page` component.
pub(crate) struct ComponentHandler<F> {
	component: F,
}

impl<F> ComponentHandler<F> {
	pub(crate) fn new(component: F) -> Self {
		Self { component }
	}
}

impl<F> RouteHandler for ComponentHandler<F>
where
	F: Fn() -> Page + Send + Sync,
{
	fn handle(&self, _ctx: &ParamContext) -> Result<Page, RouterError> {
		Ok((self.component)())
	}
}

/// Wraps a `Fn(Path<T>) -> Page` component taking one typed parameter.
pub(crate) struct PathHandler<F, T> {
	component: F,
	_param: PhantomData<fn() -> T>,
}

impl<F, T> PathHandler<F, T> {
	pub(crate) fn new(component: F) -> Self {
		Self {
			component,
			_param: PhantomData,
		}
	}
}

impl<F, T> RouteHandler for PathHandler<F, T>
where
	F: Fn(Path<T>) -> Page + Send + Sync,
	T: FromPathValue + Send + Sync,
{
	fn handle(&self, ctx: &ParamContext) -> Result<Page, RouterError> {
		let value = T::from_value_at(ctx, 0).map_err(RouterError::PathExtraction)?;
		Ok((self.component)(Path(value)))
	}
}

/// Boxes a no-parameter component.
pub(crate) fn component_handler<F>(component: F) -> Arc<dyn RouteHandler>
where
	F: Fn() -> Page + Send + Sync + 'static,
{
	Arc::new(ComponentHandler::new(component))
}

/// Boxes a single-parameter component.
pub(crate) fn path_handler<F, T>(component: F) -> Arc<dyn RouteHandler>
where
	F: Fn(Path<T>) -> Page + Send + Sync + 'static,
	T: FromPathValue + Send + Sync + 'static,
{
	Arc::new(PathHandler::new(component))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::PageElement;
	use crate::router::error::PathError;
	use std::collections::HashMap;

	fn text_page(text: &str) -> Page {
		PageElement::new("p").child(text.to_string()).into_page()
	}

	fn empty_ctx() -> ParamContext {
		ParamContext::new(HashMap::new(), Vec::new())
	}

	fn ctx_with(value: &str) -> ParamContext {
		ParamContext::new(HashMap::new(), vec![value.to_string()])
	}

	#[test]
	fn test_component_handler_renders() {
		let handler = ComponentHandler::new(|| text_page("home"));
		let page = handler.handle(&empty_ctx()).unwrap();
		assert!(page.render_to_string().contains("home"));
	}

	#[test]
	fn test_path_handler_extracts_typed_id() {
		let handler =
			PathHandler::new(|Path(id): Path<i64>| text_page(&format!("music {}", id)));
		let page = handler.handle(&ctx_with("42")).unwrap();
		assert!(page.render_to_string().contains("music 42"));
	}

	#[test]
	fn test_path_handler_propagates_parse_failure() {
		let handler = PathHandler::new(|Path(_id): Path<i64>| Page::Empty);
		let result = handler.handle(&ctx_with("not-a-number"));
		assert!(matches!(
			result,
			Err(RouterError::PathExtraction(PathError::ParseError { .. }))
		));
	}

	#[test]
	fn test_helpers_box_to_trait_objects() {
		let no_params: Arc<dyn RouteHandler> = component_handler(|| Page::Empty);
		assert!(no_params.handle(&empty_ctx()).is_ok());

		let one_param: Arc<dyn RouteHandler> =
			path_handler(|Path(_slug): Path<String>| Page::Empty);
		assert!(one_param.handle(&ctx_with("abc")).is_ok());
	}
}
