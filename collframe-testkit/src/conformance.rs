//! Law checks that every implementor must satisfy.
//!
//! Each check returns `Err` with a description of the first violation so it
//! can be used from `prop_assert!`, plain `assert!`, or `?` in a test that
//! returns `Result`.

use collframe_core::{Coll, MutableColl};
use std::fmt::Debug;

fn occurrences<T: PartialEq + Clone>(coll: &dyn Coll<T>, elem: &T) -> usize {
    coll.to_vec().iter().filter(|e| *e == elem).count()
}

/// `is_empty` agrees with `len`, and the snapshot has `len` elements.
pub fn check_size_laws<T, C>(coll: &C) -> Result<(), String>
where
    T: PartialEq + Clone,
    C: Coll<T> + ?Sized,
{
    let len = coll.len();
    if coll.is_empty() != (len == 0) {
        return Err(format!(
            "is_empty() = {} but len() = {len}",
            coll.is_empty()
        ));
    }
    let snapshot = coll.to_vec().len();
    if snapshot != len {
        return Err(format!("to_vec() has {snapshot} elements but len() = {len}"));
    }
    Ok(())
}

/// After `add(elem)` the collection contains `elem`, and `add` reported a
/// change exactly when the length grew.
pub fn check_add_then_contains<T, C>(coll: &mut C, elem: T) -> Result<(), String>
where
    T: PartialEq + Clone + Debug,
    C: MutableColl<T> + ?Sized,
{
    let before = coll.len();
    let changed = coll.add(elem.clone());
    if !coll.contains(&elem) {
        return Err(format!("{elem:?} missing after add"));
    }
    let grew = coll.len() > before;
    if changed != grew {
        return Err(format!(
            "add({elem:?}) returned {changed} but len went from {before} to {}",
            coll.len()
        ));
    }
    check_size_laws(coll)
}

/// After `add_all(other)` the collection contains all of `other`.
pub fn check_add_all_then_contains_all<T, C>(coll: &mut C, other: &dyn Coll<T>) -> Result<(), String>
where
    T: PartialEq + Clone,
    C: MutableColl<T> + ?Sized,
{
    coll.add_all(other);
    if !coll.contains_all(other) {
        return Err("contains_all() false right after add_all()".to_string());
    }
    check_size_laws(coll)
}

/// `remove(elem)` takes out exactly one occurrence, whatever the duplicate
/// policy, and reports whether it did.
pub fn check_remove_policy<T, C>(coll: &mut C, elem: &T) -> Result<(), String>
where
    T: PartialEq + Clone + Debug,
    C: MutableColl<T>,
{
    let before = occurrences(&*coll, elem);
    let removed = coll.remove(elem);
    let after = occurrences(&*coll, elem);

    if removed != (before > 0) {
        return Err(format!(
            "remove({elem:?}) returned {removed} with {before} occurrences present"
        ));
    }
    if after != before.saturating_sub(1) {
        return Err(format!(
            "remove({elem:?}) left {after} of {before} occurrences"
        ));
    }
    check_size_laws(coll)
}

/// `clear()` leaves nothing behind.
pub fn check_clear_empties<T, C>(coll: &mut C) -> Result<(), String>
where
    T: PartialEq + Clone,
    C: MutableColl<T> + ?Sized,
{
    coll.clear();
    if !coll.is_empty() || coll.len() != 0 {
        return Err(format!("{} elements left after clear()", coll.len()));
    }
    check_size_laws(coll)
}
