//! JavaScript-facing API
//!
//! Short names for page scripts. Lookups and node creation live on
//! [`Sanity`], which is bound to one document; the rest work on nodes the
//! caller already holds.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, Node, NodeList, Text};

use crate::api::helpers::{children_from_js, js_to_string, options_from_js, ArrayLike};
use crate::dom::{self, Children, Dom};
use crate::utils;

/// DOM helpers bound to one document
#[wasm_bindgen]
pub struct Sanity {
    dom: Dom,
}

#[wasm_bindgen]
impl Sanity {
    /// Bind to `document`, or to the window's document when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(document: Option<Document>) -> Result<Sanity, JsValue> {
        let dom = match document {
            Some(document) => Dom::new(document),
            None => Dom::from_window()?,
        };
        Ok(Sanity { dom })
    }

    #[wasm_bindgen(getter)]
    pub fn document(&self) -> Document {
        self.dom.document().clone()
    }

    pub fn id(&self, id: &str) -> Option<Element> {
        self.dom.by_id(id)
    }

    pub fn first(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        Ok(self.dom.first(selector)?)
    }

    pub fn all(&self, selector: &str) -> Result<NodeList, JsValue> {
        Ok(self.dom.all(selector)?)
    }

    pub fn mktxt(&self, text: &str) -> Text {
        self.dom.make_text(text)
    }

    /// Create an element with optional children (array or string) and
    /// options (`{ id, html }`).
    pub fn mkele(&self, tag: &str, children: JsValue, options: JsValue) -> Result<Element, JsValue> {
        let options = options_from_js(options)?;
        let element = self.dom.make_element(tag, Children::None, &options)?;

        let children = children_from_js(&children)?;
        dom::append_children(self.dom.document(), &element, children)?;
        Ok(element)
    }
}

#[wasm_bindgen]
pub fn get(element: &Element, attr: &str) -> Option<String> {
    dom::get(element, attr)
}

#[wasm_bindgen]
pub fn set(element: &Element, attr: &str, value: JsValue) -> Result<(), JsValue> {
    Ok(dom::set(element, attr, &js_to_string(&value))?)
}

/// Add an event listener
#[wasm_bindgen(js_name = e)]
pub fn bind_event(target: &EventTarget, evt: &str, callback: &js_sys::Function) -> Result<(), JsValue> {
    Ok(dom::on_function(target, evt, callback)?)
}

#[wasm_bindgen(js_name = isUndef)]
pub fn is_undef(value: JsValue) -> bool {
    utils::is_undef(&value)
}

#[wasm_bindgen(js_name = isNull)]
pub fn is_null(value: JsValue) -> bool {
    utils::is_null(&value)
}

/// Call `callback(item)` for each member of an array-like
#[wasm_bindgen]
pub fn each(list: JsValue, callback: &js_sys::Function) -> Result<(), JsValue> {
    let list = ArrayLike::new(list)?;
    for index in 0..list.length() {
        callback.call1(&JsValue::UNDEFINED, &list.get(index)?)?;
    }
    Ok(())
}

/// Array of `callback(item, index)` for each member of an array-like
#[wasm_bindgen]
pub fn map(list: JsValue, callback: &js_sys::Function) -> Result<js_sys::Array, JsValue> {
    let list = ArrayLike::new(list)?;
    let out = js_sys::Array::new();
    for index in 0..list.length() {
        let value = callback.call2(&JsValue::UNDEFINED, &list.get(index)?, &JsValue::from(index))?;
        out.push(&value);
    }
    Ok(out)
}

/// Append `child`, or insert it before `before` when that is given
#[wasm_bindgen(js_name = domAdd)]
pub fn dom_add(node: &Node, child: &Node, before: Option<Node>) -> Result<(), JsValue> {
    Ok(dom::add(node, child, before.as_ref())?)
}

/// Detach `el` from its parent; nothing happens for null or undefined
#[wasm_bindgen(js_name = domRm)]
pub fn dom_rm(el: Option<Node>) -> Result<(), JsValue> {
    Ok(dom::remove(el.as_ref())?)
}

/// Change the log level at runtime ("off", "error", ..., "trace")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}
