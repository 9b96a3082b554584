//! Attribute accessors

use web_sys::Element;

use crate::dom::DomResult;

/// Read an attribute, `None` when it is not set
pub fn get(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Set an attribute; fails on names the platform rejects
pub fn set(element: &Element, name: &str, value: &str) -> DomResult<()> {
    element.set_attribute(name, value)?;
    Ok(())
}
