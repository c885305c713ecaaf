//! The root collection contract.

use crate::error::{Error, Result};
use std::ops::ControlFlow;

/// The root trait of the collection hierarchy.
///
/// A collection is a group of zero or more elements. Whether it orders its
/// elements or permits duplicates is up to the implementor.
///
/// Implementors supply [`len`](Coll::len) and [`visit`](Coll::visit); every
/// other operation has a provided body built on those two and may be
/// overridden with something faster (a hashed `contains`, for instance).
pub trait Coll<T: PartialEq + Clone> {
    /// Returns the number of elements in this collection.
    fn len(&self) -> usize;

    /// Calls `f` for each element in the collection's natural order until
    /// `f` breaks.
    ///
    /// Returns `Break` if `f` stopped the walk early.
    fn visit(&self, f: &mut dyn FnMut(&T) -> ControlFlow<()>) -> ControlFlow<()>;

    /// Returns true if some element equals `elem`.
    fn contains(&self, elem: &T) -> bool {
        self.visit(&mut |e| {
            if e == elem {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Returns true if every element of `other` is contained in this
    /// collection.
    ///
    /// Multiplicity is ignored: `[1]` contains all of `[1, 1]`.
    fn contains_all(&self, other: &dyn Coll<T>) -> bool {
        other
            .visit(&mut |e| {
                if self.contains(e) {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            })
            .is_continue()
    }

    /// Compares this collection with `other` for equality.
    ///
    /// The provided body is multiset equality: both sides hold the same
    /// elements the same number of times, in any order. Implementors that
    /// override it should keep it symmetric.
    fn equals(&self, other: &dyn Coll<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut unmatched = other.to_vec();
        let walk = self.visit(&mut |e| match unmatched.iter().position(|u| u == e) {
            Some(idx) => {
                unmatched.swap_remove(idx);
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        });
        walk.is_continue() && unmatched.is_empty()
    }

    /// Returns true if this collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a newly allocated snapshot of every element, in visit order.
    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        let _ = self.visit(&mut |e| {
            out.push(e.clone());
            ControlFlow::Continue(())
        });
        out
    }

    /// Copies every element into the front of `out`, in visit order.
    ///
    /// Returns the number of elements written. Slots past that count are left
    /// untouched. Fails without writing anything if `out` is shorter than
    /// [`len`](Coll::len).
    fn copy_to(&self, out: &mut [T]) -> Result<usize> {
        let required = self.len();
        if out.len() < required {
            return Err(Error::InsufficientCapacity {
                required,
                available: out.len(),
            });
        }

        let mut written = 0;
        let _ = self.visit(&mut |e| match out.get_mut(written) {
            Some(slot) => {
                slot.clone_from(e);
                written += 1;
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        });
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(Vec<i32>);

    impl Coll<i32> for Fixed {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn visit(&self, f: &mut dyn FnMut(&i32) -> ControlFlow<()>) -> ControlFlow<()> {
            for e in &self.0 {
                f(e)?;
            }
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn contains_stops_at_first_match() {
        let coll = Fixed(vec![1, 2, 3]);
        assert!(coll.contains(&2));
        assert!(!coll.contains(&4));
    }

    #[test]
    fn contains_all_ignores_multiplicity() {
        let coll = Fixed(vec![1, 2]);
        assert!(coll.contains_all(&Fixed(vec![1, 1, 2])));
        assert!(coll.contains_all(&Fixed(vec![])));
        assert!(!coll.contains_all(&Fixed(vec![1, 3])));
    }

    #[test]
    fn equals_is_multiset_equality() {
        let coll = Fixed(vec![1, 2, 2]);
        assert!(coll.equals(&Fixed(vec![2, 1, 2])));
        assert!(!coll.equals(&Fixed(vec![1, 1, 2])));
        assert!(!coll.equals(&Fixed(vec![1, 2])));
    }

    #[test]
    fn to_vec_preserves_visit_order() {
        assert_eq!(Fixed(vec![3, 1, 2]).to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn copy_to_fills_prefix_only() {
        let mut out = [0; 5];
        let written = Fixed(vec![7, 8]).copy_to(&mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(out, [7, 8, 0, 0, 0]);
    }

    #[test]
    fn copy_to_rejects_short_buffer() {
        let mut out = [0; 1];
        let err = Fixed(vec![7, 8]).copy_to(&mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientCapacity {
                required: 2,
                available: 1
            }
        ));
        assert_eq!(out, [0]);
    }
}
