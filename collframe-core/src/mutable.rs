use crate::extensible::ExtensibleColl;
use crate::removable::RemovableColl;

/// A collection that supports both adding and removing elements.
///
/// Implemented for every type that is both [`ExtensibleColl`] and
/// [`RemovableColl`].
pub trait MutableColl<T: PartialEq + Clone>: ExtensibleColl<T> + RemovableColl<T> {}

impl<T, C> MutableColl<T> for C
where
    T: PartialEq + Clone,
    C: ExtensibleColl<T> + RemovableColl<T> + ?Sized,
{
}
