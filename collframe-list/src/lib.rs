//! The composed list contract.
//!
//! [`List<T>`] bundles every capability of the root hierarchy: membership,
//! iteration, insertion and removal. It adds no operations of its own and is
//! implemented for any type that implements all four root traits.
//!
//! A type taking on this contract is usually sequential, insertion-ordered
//! and duplicate-permitting, but nothing here enforces that. Document the
//! policy on the concrete type.

pub use collframe_core::{Coll, ExtensibleColl, IterableColl, MutableColl, RemovableColl};

/// A collection that is iterable, extensible and removable.
pub trait List<T: PartialEq + Clone>:
    Coll<T> + IterableColl<T> + ExtensibleColl<T> + RemovableColl<T>
{
}

impl<T, C> List<T> for C
where
    T: PartialEq + Clone,
    C: Coll<T> + IterableColl<T> + ExtensibleColl<T> + RemovableColl<T> + ?Sized,
{
}
