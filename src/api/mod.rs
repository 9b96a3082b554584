//! Sanity WASM API
//!
//! This module provides the JavaScript-facing API: short helpers that page
//! scripts call directly, with the loose argument handling those scripts
//! expect.
//!
//! # Module Structure
//!
//! - `helpers`: conversion of loose JS arguments into the typed DOM API
//! - `exports`: the exported functions and the `Sanity` class

pub mod exports;
pub mod helpers;

pub use exports::*;
