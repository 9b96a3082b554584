//! Error type for DOM helpers
//!
//! Failures are those of the underlying platform primitives. The JS value a
//! primitive throws is carried as-is so it can be handed back to JavaScript
//! unchanged.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// No `window` or no `document` in the current global scope
    #[error("No document available in the current global scope")]
    NoDocument,

    /// Removal requested for a node that is not attached to a parent
    #[error("Node has no parent to be removed from")]
    NoParent,

    /// Exception raised by a DOM primitive
    #[error("DOM operation failed: {0:?}")]
    Platform(JsValue),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Platform(value)
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        match err {
            DomError::Platform(value) => value,
            DomError::NoParent => js_sys::TypeError::new(&err.to_string()).into(),
            DomError::NoDocument => js_sys::Error::new(&err.to_string()).into(),
        }
    }
}

pub type DomResult<T> = Result<T, DomError>;
