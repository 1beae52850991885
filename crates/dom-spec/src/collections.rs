//! Read-only node collections

use crate::Backend;

/// Indexed list of nodes (`NodeList`).
pub trait NodeList {
    type Item;

    /// Number of nodes in the list
    fn length(&self) -> usize;

    /// Node at `index`, or `None` when out of range
    fn item(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Collect every item in order.
    fn to_vec(&self) -> Vec<Self::Item> {
        (0..self.length()).filter_map(|i| self.item(i)).collect()
    }
}

/// Element-only collection (`HTMLCollection`).
pub trait ElementCollection<B: Backend> {
    /// Number of elements in the collection
    fn length(&self) -> usize;

    /// Element at `index`, or `None` when out of range
    fn item(&self, index: usize) -> Option<B::Element>;

    /// First element whose `id` or `name` attribute equals `name`
    fn named_item(&self, name: &str) -> Option<B::Element>;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    fn to_vec(&self) -> Vec<B::Element> {
        (0..self.length()).filter_map(|i| self.item(i)).collect()
    }
}
