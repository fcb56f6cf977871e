//! Read-only, count-bounded view over the flattened element array.

use std::ops::Index;

/// Indexed view over a tree's elements in construction (pre-order) order.
///
/// Obtained with [`crate::QuadTree::view`]. The view is `Copy` and borrows the
/// tree, so it can be handed out for snapshotting or external iteration.
#[derive(Debug)]
pub struct ElementView<'a, T> {
    elements: &'a [T],
}

impl<T> Clone for ElementView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementView<'_, T> {}

impl<'a, T> ElementView<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }

    /// Number of elements in the view.
    #[inline]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, or `None` past [`count`](Self::count).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elements.get(index)
    }

    /// Forward iterator in construction order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.elements.iter()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }
}

impl<T> Index<usize> for ElementView<'_, T> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= self.count()`.
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for ElementView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
