//! Iteration over indexable collections
//!
//! DOM collections (`NodeList`, `HTMLCollection`) and JS arrays are not Rust
//! iterators. [`Indexed`] gives them, and plain slices, a common shape that
//! [`each`] and [`map`] walk from index `0` to `length - 1`.

use web_sys::{Element, HtmlCollection, Node, NodeList};

/// A collection read by position
pub trait Indexed {
    type Item;

    fn length(&self) -> u32;

    fn item(&self, index: u32) -> Option<Self::Item>;
}

impl Indexed for NodeList {
    type Item = Node;

    fn length(&self) -> u32 {
        NodeList::length(self)
    }

    fn item(&self, index: u32) -> Option<Node> {
        self.get(index)
    }
}

impl Indexed for HtmlCollection {
    type Item = Element;

    fn length(&self) -> u32 {
        HtmlCollection::length(self)
    }

    fn item(&self, index: u32) -> Option<Element> {
        self.get_with_index(index)
    }
}

impl Indexed for js_sys::Array {
    type Item = wasm_bindgen::JsValue;

    fn length(&self) -> u32 {
        js_sys::Array::length(self)
    }

    fn item(&self, index: u32) -> Option<wasm_bindgen::JsValue> {
        Some(self.get(index))
    }
}

impl<T: Clone> Indexed for [T] {
    type Item = T;

    fn length(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX)
    }

    fn item(&self, index: u32) -> Option<T> {
        self.get(index as usize).cloned()
    }
}

impl<T: Clone> Indexed for Vec<T> {
    type Item = T;

    fn length(&self) -> u32 {
        self.as_slice().length()
    }

    fn item(&self, index: u32) -> Option<T> {
        self.as_slice().item(index)
    }
}

/// Run `f` once per item. The length is read once, up front.
pub fn each<C, F>(list: &C, mut f: F)
where
    C: Indexed + ?Sized,
    F: FnMut(C::Item),
{
    for index in 0..list.length() {
        if let Some(item) = list.item(index) {
            f(item);
        }
    }
}

/// Collect `f(item, index)` for every item, in order.
pub fn map<C, F, U>(list: &C, mut f: F) -> Vec<U>
where
    C: Indexed + ?Sized,
    F: FnMut(C::Item, u32) -> U,
{
    let len = list.length();
    let mut out = Vec::with_capacity(len as usize);
    for index in 0..len {
        if let Some(item) = list.item(index) {
            out.push(f(item, index));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_visits_in_order() {
        let list = vec!["a", "b", "c"];
        let mut seen = Vec::new();
        each(&list, |item| seen.push(item));
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_each_on_empty_slice() {
        let list: &[u8] = &[];
        let mut calls = 0;
        each(list, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_map_passes_index_and_keeps_length() {
        let list = [10u32, 20, 30];
        let out = map(&list[..], |item, index| item + index);
        assert_eq!(out, vec![10, 21, 32]);
        assert_eq!(out.len(), list.len());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_slice_length_saturates() {
        let big = vec![(); u32::MAX as usize + 5];
        assert_eq!(big.as_slice().length(), u32::MAX);
    }

    #[test]
    fn test_item_out_of_range() {
        let list = vec![1];
        assert_eq!(list.item(0), Some(1));
        assert_eq!(list.item(1), None);
    }
}
