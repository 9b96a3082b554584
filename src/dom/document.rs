//! Document context
//!
//! Every lookup and every node creation goes through a [`Dom`], which owns a
//! handle to one document. Independent documents get independent `Dom`s.

use web_sys::{Document, Element, NodeList, Text};

use crate::dom::{build_element, Children, DomError, DomResult, ElementOptions};

#[derive(Debug, Clone)]
pub struct Dom {
    document: Document,
}

impl Dom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Context for the document of the global `window`
    pub fn from_window() -> DomResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(DomError::NoDocument)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Element with the given id, if attached to this document
    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// First element matching a CSS selector
    pub fn first(&self, selector: &str) -> DomResult<Option<Element>> {
        Ok(self.document.query_selector(selector)?)
    }

    /// Every element matching a CSS selector, in document order
    pub fn all(&self, selector: &str) -> DomResult<NodeList> {
        Ok(self.document.query_selector_all(selector)?)
    }

    pub fn make_text(&self, text: &str) -> Text {
        self.document.create_text_node(text)
    }

    /// Build a detached element; see [`build_element`].
    pub fn make_element(
        &self,
        tag: &str,
        children: impl Into<Children>,
        options: &ElementOptions,
    ) -> DomResult<Element> {
        build_element(&self.document, tag, children.into(), options)
    }
}

impl From<Document> for Dom {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}
