use avl::{SentinelTree, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::init_logging;

/// The worst case height of an AVL tree holding `len` elements.
fn height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2() - 1.0
}

#[quickcheck]
fn in_order_is_sorted_and_unique(xs: Vec<i16>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.is_balanced() && tree.len() == expected.len() && tree.in_order().into_iter().eq(expected)
}

#[quickcheck]
fn height_stays_logarithmic(xs: Vec<u32>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
        if tree.height() as f64 > height_bound(tree.len()) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
        if !tree.is_balanced() {
            return false;
        }
    }

    let mut still_present = xs;
    // The same value may have been inserted multiple times - drop every copy.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let height = tree.height();
    let len = tree.len();

    xs.iter().all(|x| !tree.insert(*x)) && tree.height() == height && tree.len() == len
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i16>) -> bool {
    init_logging();
    let mut tree = SentinelTree::with_tree(xs.iter().copied().collect(), i16::MIN);
    for x in &xs {
        tree.remove(x);
    }

    tree.is_empty()
        && tree.len() == 0
        && *tree.find_min() == i16::MIN
        && *tree.find_max() == i16::MIN
        && xs.iter().all(|x| *tree.find(x) == i16::MIN)
}

#[quickcheck]
fn clone_is_unaffected_by_mutation(xs: Vec<i8>, more: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let copy = tree.clone();
    let before: Vec<i8> = copy.in_order().into_iter().copied().collect();

    for x in &xs {
        tree.remove(x);
    }
    tree.extend(more);

    copy.in_order().into_iter().copied().eq(before) && copy.is_balanced()
}

#[test]
fn ascending_sequence() {
    init_logging();
    let mut tree = Tree::new();
    for x in 1..=7 {
        assert!(tree.insert(x));
        assert!(tree.is_balanced());
    }

    assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6, &7]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn large_ascending_and_descending_runs() {
    init_logging();
    let mut tree: Tree<_> = (0..10_000).chain((10_000..20_000).rev()).collect();

    assert!(tree.is_balanced());
    assert!(tree.height() as f64 <= height_bound(tree.len()));
    assert_eq!(tree.find_min(), Some(&0));
    assert_eq!(tree.find_max(), Some(&19_999));

    for x in (0..20_000).step_by(2) {
        assert_eq!(tree.remove(&x), Some(x));
    }
    assert!(tree.is_balanced());
    assert_eq!(tree.len(), 10_000);
    assert_eq!(tree.find_min(), Some(&1));
}

#[test]
fn print_tree_one_per_line() {
    init_logging();
    let tree: Tree<_> = ["pear", "apple", "fig"].into_iter().collect();
    let mut out = Vec::new();
    tree.print_tree(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "apple\nfig\npear\n");
}
