//! Event binding
//!
//! Listeners are registered for the lifetime of the target. There is no
//! unregister helper, so the Rust closure backing a listener is leaked with
//! `Closure::forget`; the browser drops it together with the target.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom::DomResult;

/// Listen for `event` on `target`
pub fn on<F>(target: &EventTarget, event: &str, callback: F) -> DomResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listen for `event` on `target` with an existing JS function
pub fn on_function(target: &EventTarget, event: &str, callback: &js_sys::Function) -> DomResult<()> {
    target.add_event_listener_with_callback(event, callback)?;
    Ok(())
}
