//! Renderable page tree.
//!
//! `Page` is the unit a route component produces. It is deliberately small:
//! an element tree with attributes and children, plus text and empty nodes.
//! The router only passes pages around; everything about how a page gets
//! mounted into a document lives with the host shell.

use std::borrow::Cow;

/// A renderable unit bound to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// Renders to nothing.
	Empty,
	/// A plain text node. Escaped on render.
	Text(Cow<'static, str>),
	/// An element with attributes and children.
	Element(PageElement),
}

impl Page {
	/// Renders the page to an HTML string.
	pub fn render_to_string(&self) -> String {
		match self {
			Page::Empty => String::new(),
			Page::Text(text) => html_escape(text),
			Page::Element(element) => element.render_to_string(),
		}
	}
}

impl From<&'static str> for Page {
	fn from(text: &'static str) -> Self {
		Page::Text(Cow::Borrowed(text))
	}
}

impl From<String> for Page {
	fn from(text: String) -> Self {
		Page::Text(Cow::Owned(text))
	}
}

/// An element node: tag, attributes in declaration order, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: &'static str,
	attrs: Vec<(&'static str, String)>,
	children: Vec<Page>,
}

impl PageElement {
	/// Creates an element with the given tag.
	pub fn new(tag: &'static str) -> Self {
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.attrs.push((name, value.into()));
		self
	}

	/// Appends a child node.
	pub fn child(mut self, child: impl Into<Page>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Wraps this element into a [`Page`].
	pub fn into_page(self) -> Page {
		Page::Element(self)
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &'static str {
		self.tag
	}

	fn render_to_string(&self) -> String {
		let mut out = String::new();
		out.push('<');
		out.push_str(self.tag);
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&html_escape(value));
			out.push('"');
		}
		out.push('>');
		for child in &self.children {
			out.push_str(&child.render_to_string());
		}
		out.push_str("</");
		out.push_str(self.tag);
		out.push('>');
		out
	}
}

impl From<PageElement> for Page {
	fn from(element: PageElement) -> Self {
		Page::Element(element)
	}
}

/// Escapes text for safe inclusion in HTML content and attribute values.
fn html_escape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}
