//! Undefined / null / present
//!
//! JavaScript distinguishes a missing value (`undefined`) from an explicit
//! `null`. [`Presence`] keeps that distinction on the Rust side.

use wasm_bindgen::JsValue;

/// True only for `undefined`
pub fn is_undef(value: &JsValue) -> bool {
    value.is_undefined()
}

/// True only for `null`
pub fn is_null(value: &JsValue) -> bool {
    value.is_null()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Presence<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Presence::Null)
    }

    /// Collapse `Absent` and `Null` into `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Present(value) => Some(value),
            Presence::Absent | Presence::Null => None,
        }
    }
}

impl Presence<JsValue> {
    pub fn from_js(value: JsValue) -> Self {
        if is_undef(&value) {
            Presence::Absent
        } else if is_null(&value) {
            Presence::Null
        } else {
            Presence::Present(value)
        }
    }
}

/// Outer `None` is absent, inner `None` is null
impl<T> From<Option<Option<T>>> for Presence<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => Presence::Absent,
            Some(None) => Presence::Null,
            Some(Some(value)) => Presence::Present(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nested_option() {
        assert_eq!(Presence::<u32>::from(None), Presence::Absent);
        assert_eq!(Presence::<u32>::from(Some(None)), Presence::Null);
        assert_eq!(Presence::from(Some(Some(0))), Presence::Present(0));
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert!(!Presence::from(Some(Some(""))).is_absent());
        assert!(!Presence::from(Some(Some(false))).is_null());
        assert_eq!(Presence::from(Some(Some(0))).into_option(), Some(0));
    }

    #[test]
    fn test_into_option_collapses() {
        assert_eq!(Presence::<String>::Absent.into_option(), None);
        assert_eq!(Presence::<String>::Null.into_option(), None);
        assert_eq!(
            Presence::Present(String::from("x")).into_option().as_deref(),
            Some("x")
        );
        assert_eq!(Presence::<u8>::default(), Presence::Absent);
    }
}
