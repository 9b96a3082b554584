//! DOM helpers
//!
//! - `document`: the [`Dom`] context (lookups, text nodes, element building)
//! - `builder`: element construction from a tag, children and options
//! - `attributes`, `events`, `mutation`: thin wrappers over node primitives

pub mod attributes;
pub mod builder;
pub mod document;
pub mod error;
pub mod events;
pub mod mutation;

pub use attributes::*;
pub use builder::*;
pub use document::*;
pub use error::*;
pub use events::*;
pub use mutation::*;
