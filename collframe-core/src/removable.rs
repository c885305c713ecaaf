use crate::coll::Coll;

/// A collection that supports removing elements.
///
/// [`remove`](RemovableColl::remove) takes out a single occurrence, while
/// [`remove_if`](RemovableColl::remove_if) and the bulk operations built on it
/// take out every matching occurrence.
pub trait RemovableColl<T: PartialEq + Clone>: Coll<T> {
    /// Removes a single instance of `elem`, if present.
    ///
    /// Returns true if an element was removed.
    fn remove(&mut self, elem: &T) -> bool;

    /// Removes every element that satisfies `pred`.
    ///
    /// The order in which `pred` sees elements is unspecified. If `pred`
    /// panics the panic reaches the caller, and the collection must still be
    /// valid, holding some subset of its previous elements.
    ///
    /// Returns true if any element was removed.
    fn remove_if(&mut self, pred: &mut dyn FnMut(&T) -> bool) -> bool;

    /// Removes every element that is also contained in `other`.
    fn remove_all(&mut self, other: &dyn Coll<T>) -> bool {
        self.remove_if(&mut |e| other.contains(e))
    }

    /// Retains only the elements that are contained in `other`.
    fn retain_all(&mut self, other: &dyn Coll<T>) -> bool {
        self.remove_if(&mut |e| !other.contains(e))
    }

    /// Removes every element.
    fn clear(&mut self) {
        self.remove_if(&mut |_| true);
    }
}
