use ordered_tree::OrderedTree;

use std::cmp::Ordering;
use std::collections::HashSet;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.into_iter().collect();
    let values: Vec<_> = tree.in_order().collect();

    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();

    let mut still_present = xs;
    for delete in &deletes {
        // Each delete removes a single copy, so mirror that in the model.
        let expected = match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                true
            }
            None => false,
        };
        if tree.remove(delete) != expected {
            return false;
        }
    }

    still_present.sort_unstable();
    tree.len() == still_present.len()
        && tree.in_order().eq(still_present.iter())
        && still_present.iter().all(|x| tree.contains(x))
        && deletes
            .iter()
            .filter(|x| !still_present.contains(*x))
            .all(|x| !tree.contains(x))
}

#[quickcheck]
fn traversals_agree_after_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.into_iter().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let in_order: Vec<_> = tree.in_order().collect();
    let mut pre: Vec<_> = tree.pre_order().collect();
    let mut post: Vec<_> = tree.post_order().collect();
    pre.sort();
    post.sort();

    pre == in_order && post == in_order
}

#[quickcheck]
fn removed_values_leave_every_traversal(xs: Vec<i8>, target: i8) -> bool {
    let mut tree: OrderedTree<i8> = xs.into_iter().collect();
    while tree.remove(&target) {}

    !tree.contains(&target)
        && tree.pre_order().all(|x| *x != target)
        && tree.in_order().all(|x| *x != target)
        && tree.post_order().all(|x| *x != target)
}

/// Add, remove and contains must all route with `compare(probe, node)`.
/// A reversed ordering makes any swapped argument order visible.
#[quickcheck]
fn operations_share_comparator_convention(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let reversed = |a: &i8, b: &i8| -> Ordering { b.cmp(a) };
    let mut tree = OrderedTree::with_comparator(reversed);
    tree.extend(xs.iter().copied());

    let descending: Vec<_> = tree.in_order().collect();
    if !descending.windows(2).all(|pair| pair[0] >= pair[1]) {
        return false;
    }

    let mut present = xs;
    for probe in &probes {
        if tree.contains(probe) != present.contains(probe) {
            return false;
        }
        let expected = match present.iter().position(|x| x == probe) {
            Some(pos) => {
                present.swap_remove(pos);
                true
            }
            None => false,
        };
        if tree.remove(probe) != expected {
            return false;
        }
    }
    true
}

#[quickcheck]
fn clone_matches_original(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.into_iter().collect();
    let cloned = tree.clone();

    tree.pre_order().eq(cloned.pre_order()) && tree.post_order().eq(cloned.post_order())
}

#[test]
fn concrete_scenario() {
    let mut tree = OrderedTree::new();
    tree.extend([5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 4, 3, 7, 9, 8, 5]);

    assert!(tree.remove(&3));
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 4, 5, 7, 8, 9]);
    assert!(!tree.remove(&3));
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 4, 5, 7, 8, 9]);
}
