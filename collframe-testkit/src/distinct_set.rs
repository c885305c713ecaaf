//! Insertion-ordered set.

use collframe_core::{Coll, ExtensibleColl, IterableColl, RemovableColl};
use std::ops::ControlFlow;

/// A `Vec`-backed collection that keeps insertion order and holds each
/// element at most once.
///
/// Adding an element that is already present leaves the set unchanged and
/// returns false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctSet<T> {
    items: Vec<T>,
}

impl<T> Default for DistinctSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DistinctSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq + Clone> FromIterator<T> for DistinctSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for elem in iter {
            set.add(elem);
        }
        set
    }
}

impl<T: PartialEq + Clone> Coll<T> for DistinctSet<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn visit(&self, f: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.items.iter().try_for_each(f)
    }

    fn contains(&self, elem: &T) -> bool {
        self.items.contains(elem)
    }
}

impl<T: PartialEq + Clone> ExtensibleColl<T> for DistinctSet<T> {
    fn add(&mut self, elem: T) -> bool {
        if self.items.contains(&elem) {
            return false;
        }
        self.items.push(elem);
        true
    }
}

impl<T: PartialEq + Clone> RemovableColl<T> for DistinctSet<T> {
    fn remove(&mut self, elem: &T) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e != elem);
        self.items.len() != before
    }

    fn remove_if(&mut self, pred: &mut dyn FnMut(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|e| !pred(e));
        self.items.len() != before
    }
}

impl<T: PartialEq + Clone> IterableColl<T> for DistinctSet<T> {
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }
}
