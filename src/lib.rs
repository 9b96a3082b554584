//! Sanity DOM helpers WASM Module
//!
//! Shorthand wrappers around everyday DOM work: lookups, element building,
//! attributes, event binding and iteration over DOM collections.
//!
//! Rust callers use [`dom::Dom`], a handle to one document, plus the free
//! functions in [`dom`] and [`utils`]. Page scripts use the exports in [`api`].

pub mod api;
pub mod dom;
pub mod utils;

// Re-export commonly used types
pub use dom::*;
pub use utils::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
    }

    log::debug!("Sanity WASM module initialized");
}
