use crate::coll::Coll;

/// A collection that supports adding elements.
pub trait ExtensibleColl<T: PartialEq + Clone>: Coll<T> {
    /// Ensures that this collection contains `elem`.
    ///
    /// Returns true if the collection changed. A set that already holds
    /// `elem` returns false; a bag that permits duplicates returns true.
    fn add(&mut self, elem: T) -> bool;

    /// Adds every element of `other` to this collection.
    ///
    /// Every element is offered, even after the first change. Returns true if
    /// any [`add`](ExtensibleColl::add) changed the collection.
    fn add_all(&mut self, other: &dyn Coll<T>) -> bool {
        other
            .to_vec()
            .into_iter()
            .fold(false, |changed, elem| self.add(elem) || changed)
    }
}
