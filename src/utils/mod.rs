//! Value and collection utilities
//!
//! This module contains the helpers that are not tied to a particular
//! DOM primitive.

pub mod collections;
pub mod presence;

// Re-export commonly used types
pub use collections::*;
pub use presence::*;
