//! Element builder
//!
//! Creates a detached element of a given tag, applies the initial id and
//! attributes, then appends child content. The element is returned without
//! being inserted anywhere; use [`crate::dom::add`] for that.

use web_sys::{Document, Element, Node, Text};

use crate::dom::{add, set, DomResult};

/// One piece of child content
#[derive(Debug, Clone)]
pub enum Content {
    /// An existing node, appended as-is
    Node(Node),
    /// Literal text, appended as a new text node
    Text(String),
}

/// Children to append to a freshly built element
///
/// `None` is the explicit "bare node" signal and skips child handling
/// entirely. An empty `Many` is what an omitted argument means.
#[derive(Debug, Clone)]
pub enum Children {
    None,
    Single(Content),
    Many(Vec<Content>),
}

impl Default for Children {
    fn default() -> Self {
        Children::Many(Vec::new())
    }
}

impl Children {
    pub fn is_none(&self) -> bool {
        matches!(self, Children::None)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Node(node)
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Node(element.into())
    }
}

impl From<Text> for Content {
    fn from(text: Text) -> Self {
        Content::Node(text.into())
    }
}

macro_rules! single_child_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Children {
                fn from(content: $ty) -> Self {
                    Children::Single(content.into())
                }
            }
        )*
    };
}

single_child_from!(&str, String, Node, Element, Text);

impl From<Content> for Children {
    fn from(content: Content) -> Self {
        Children::Single(content)
    }
}

impl From<Vec<Content>> for Children {
    fn from(items: Vec<Content>) -> Self {
        Children::Many(items)
    }
}

impl<T: Into<Content>> FromIterator<T> for Children {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Children::Many(iter.into_iter().map(Into::into).collect())
    }
}

/// Initial id and attributes for a built element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementOptions {
    pub id: Option<String>,
    /// Attribute name/value pairs, applied in order
    pub html: Vec<(String, String)>,
}

impl ElementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.push((name.into(), value.into()));
        self
    }
}

/// Build a new element owned by `document`.
///
/// Order matters: id, then attributes, then children. `Children::None`
/// returns right after the attributes are applied.
pub fn build_element(
    document: &Document,
    tag: &str,
    children: Children,
    options: &ElementOptions,
) -> DomResult<Element> {
    let element = document.create_element(wasm_bindgen::intern(tag))?;

    if let Some(id) = &options.id {
        element.set_id(id);
    }

    for (name, value) in &options.html {
        set(&element, name, value)?;
    }

    if children.is_none() {
        return Ok(element);
    }

    append_children(document, &element, children)?;
    Ok(element)
}

/// Append `children` to `element` in order, wrapping text in new text nodes.
pub fn append_children(document: &Document, element: &Element, children: Children) -> DomResult<()> {
    let items = match children {
        Children::None => return Ok(()),
        Children::Single(content) => vec![content],
        Children::Many(items) => items,
    };

    for content in items {
        let node = content_to_node(document, content);
        add(element, &node, None)?;
    }

    Ok(())
}

fn content_to_node(document: &Document, content: Content) -> Node {
    match content {
        Content::Node(node) => node,
        Content::Text(text) => document.create_text_node(&text).into(),
    }
}
