//! Insertion-ordered bag.

use collframe_core::{Coll, ExtensibleColl, IterableColl, RemovableColl};
use std::ops::ControlFlow;

/// A `Vec`-backed collection that keeps insertion order and permits
/// duplicates.
///
/// `add` always changes the bag. `remove` takes out the first occurrence
/// only, so removing a twice-added element succeeds twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecBag<T> {
    items: Vec<T>,
}

impl<T> Default for VecBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecBag<T> {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the elements in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for VecBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: PartialEq + Clone> Coll<T> for VecBag<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn visit(&self, f: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()> {
        for elem in &self.items {
            f(elem)?;
        }
        ControlFlow::Continue(())
    }

    fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: PartialEq + Clone> ExtensibleColl<T> for VecBag<T> {
    fn add(&mut self, elem: T) -> bool {
        self.items.push(elem);
        true
    }
}

impl<T: PartialEq + Clone> RemovableColl<T> for VecBag<T> {
    fn remove(&mut self, elem: &T) -> bool {
        match self.items.iter().position(|e| e == elem) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    fn remove_if(&mut self, pred: &mut dyn FnMut(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|e| !pred(e));
        self.items.len() != before
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq + Clone> IterableColl<T> for VecBag<T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}
