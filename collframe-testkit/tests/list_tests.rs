use collframe_list::{Coll, ExtensibleColl, IterableColl, List, RemovableColl};
use collframe_testkit::{DistinctSet, VecBag};
use pretty_assertions::assert_eq;

/// Moves every element matching `pred` from `from` to the back of `to`.
fn move_matching<T, A, B>(from: &mut A, to: &mut B, pred: impl Fn(&T) -> bool) -> usize
where
    T: PartialEq + Clone,
    A: List<T> + ?Sized,
    B: List<T> + ?Sized,
{
    let picked: Vec<T> = from.iter().filter(|e| pred(e)).cloned().collect();
    from.remove_if(&mut |e| pred(e));
    picked.into_iter().filter(|e| to.add(e.clone())).count()
}

#[test]
fn fixtures_satisfy_list() {
    fn assert_list<T: PartialEq + Clone, L: List<T>>(_: &L) {}
    assert_list(&VecBag::<i32>::new());
    assert_list(&DistinctSet::<i32>::new());
}

#[test]
fn generic_list_code_works_on_both_fixtures() {
    let mut bag: VecBag<i32> = [1, 2, 3, 4, 4].into_iter().collect();
    let mut set: DistinctSet<i32> = [4].into_iter().collect();

    let moved = move_matching(&mut bag, &mut set, |x| x % 2 == 0);

    assert_eq!(bag.to_vec(), vec![1, 3]);
    assert_eq!(set.to_vec(), vec![4, 2]);
    assert_eq!(moved, 1);
}

#[test]
fn list_trait_objects_share_one_interface() {
    let mut lists: Vec<Box<dyn List<&str>>> = vec![
        Box::new(VecBag::new()),
        Box::new(DistinctSet::new()),
    ];

    for list in &mut lists {
        for word in ["to", "be", "or", "not", "to", "be"] {
            list.add(word);
        }
    }

    assert_eq!(lists[0].len(), 6);
    assert_eq!(lists[1].len(), 4);
    assert!(lists[0].contains_all(&*lists[1]));

    let (bag, set) = lists.split_at_mut(1);
    bag[0].retain_all(&*set[0]);
    assert_eq!(bag[0].len(), 6);

    set[0].remove_all(&*bag[0]);
    assert!(set[0].is_empty());
    assert_eq!(set[0].iter().count(), 0);
}
