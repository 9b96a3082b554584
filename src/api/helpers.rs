//! Shared helpers for the JavaScript-facing API
//!
//! Loose JS arguments are turned into the typed [`Children`] and
//! [`ElementOptions`] here, following the rules page scripts already rely on.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::dom::{Children, Content, ElementOptions};
use crate::utils::Presence;

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// `String(value)`
pub fn js_to_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    if let Some(b) = value.as_bool() {
        return b.to_string();
    }
    if let Some(number) = value.dyn_ref::<js_sys::Number>() {
        if let Ok(text) = number.to_string(10) {
            return text.into();
        }
    }
    value.unchecked_ref::<js_sys::Object>().to_string().into()
}

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawOptions {
    #[serde(default, with = "serde_wasm_bindgen::preserve")]
    id: JsValue,
    #[serde(default, with = "serde_wasm_bindgen::preserve")]
    html: JsValue,
}

/// Read `{ id, html }` from a JS options argument.
///
/// Falsy or non-object arguments mean no options. `id` is skipped only when
/// `undefined`; `html` is skipped when `undefined` or `null`.
pub fn options_from_js(value: JsValue) -> Result<ElementOptions, JsValue> {
    if value.is_falsy() || !value.is_object() || js_sys::Array::is_array(&value) {
        return Ok(ElementOptions::default());
    }

    let raw: RawOptions = deserialize(value, "Failed to read element options")?;
    let mut options = ElementOptions::new();

    options.id = match Presence::from_js(raw.id) {
        Presence::Absent => None,
        Presence::Null => Some("null".to_string()),
        Presence::Present(id) => Some(js_to_string(&id)),
    };

    if let Some(html) = Presence::from_js(raw.html).into_option() {
        let entries = js_sys::Object::entries(html.unchecked_ref());
        for entry in entries.iter() {
            let pair: js_sys::Array = entry.unchecked_into();
            options = options.attr(js_to_string(&pair.get(0)), js_to_string(&pair.get(1)));
        }
    }

    Ok(options)
}

// ============================================================================
// Children
// ============================================================================

/// Interpret a JS children argument.
///
/// Falsy values and unrecognized shapes yield no children. Array items that
/// are neither strings nor nodes fail the way `appendChild` would.
pub fn children_from_js(value: &JsValue) -> Result<Children, JsValue> {
    if value.is_falsy() {
        return Ok(Children::default());
    }

    if js_sys::Array::is_array(value) {
        let items: &js_sys::Array = value.unchecked_ref();
        let mut contents = Vec::with_capacity(items.length() as usize);
        for item in items.iter() {
            contents.push(content_from_js(item)?);
        }
        return Ok(Children::Many(contents));
    }

    if let Some(text) = string_value(value) {
        return Ok(Children::from(text));
    }

    log::debug!("ignoring children argument of unrecognized shape: {:?}", value);
    Ok(Children::default())
}

/// Primitive strings and `String` objects
fn string_value(value: &JsValue) -> Option<String> {
    value
        .as_string()
        .or_else(|| value.is_instance_of::<js_sys::JsString>().then(|| js_to_string(value)))
}

fn content_from_js(item: JsValue) -> Result<Content, JsValue> {
    if let Some(text) = string_value(&item) {
        return Ok(Content::Text(text));
    }

    item.dyn_into::<Node>().map(Content::Node).map_err(|_| {
        js_sys::TypeError::new("Failed to execute 'appendChild' on 'Node': parameter 1 is not of type 'Node'.")
            .into()
    })
}

// ============================================================================
// Array-likes
// ============================================================================

/// Anything with a `length` and indexed properties, read the way `list.length`
/// and `list[i]` read it: strings index by code unit, other primitives have
/// no length.
pub struct ArrayLike {
    value: JsValue,
    length: u32,
}

impl ArrayLike {
    /// Reads `length` once; throws like `value.length` would on null/undefined.
    pub fn new(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Err(js_sys::TypeError::new(&format!(
                "Cannot read properties of {} (reading 'length')",
                js_to_string(&value)
            ))
            .into());
        }

        let raw_length = if let Some(text) = value.dyn_ref::<js_sys::JsString>() {
            JsValue::from(text.length())
        } else if value.is_object() || value.is_function() {
            js_sys::Reflect::get(&value, &JsValue::from_str("length"))?
        } else {
            JsValue::UNDEFINED
        };

        Ok(Self { length: to_length(&raw_length), value })
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn get(&self, index: u32) -> Result<JsValue, JsValue> {
        match self.value.dyn_ref::<js_sys::JsString>() {
            Some(text) => Ok(text.char_at(index).into()),
            None => js_sys::Reflect::get_u32(&self.value, index),
        }
    }
}

/// Iteration count for `for (i = 0; i < length; ++i)`, with `length` coerced
/// by `ToNumber`
fn to_length(raw: &JsValue) -> u32 {
    if raw.is_undefined() {
        return 0;
    }
    let n = js_sys::Number::new(raw).value_of();
    if n.is_nan() || n <= 0.0 {
        return 0;
    }
    n.ceil().min(u32::MAX as f64) as u32
}
