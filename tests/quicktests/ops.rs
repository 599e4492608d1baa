use std::collections::{BTreeSet, HashSet};

use bstree::Tree;
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`. This way we can
/// ensure that after a random smattering of inserts and deletes we have the
/// same set of values in the model.
fn do_ops(ops: &[Op], tree: &Tree, model: &mut BTreeSet<i64>) {
    for op in ops {
        match *op {
            Op::Insert(n) => {
                tree.insert(i64::from(n));
                model.insert(i64::from(n));
            }
            Op::Remove(n) => {
                tree.remove(i64::from(n));
                model.remove(&i64::from(n));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &tree, &mut model);
    tree.inorder() == model.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::new();
    for &x in &xs {
        tree.insert(i64::from(x));
    }

    xs.iter().all(|&x| tree.contains(i64::from(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::new();
    for &x in &xs {
        tree.insert(i64::from(x));
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !tree.contains(i64::from(x)))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let tree = Tree::new();
    for &x in &xs {
        tree.insert(i64::from(x));
    }
    for &delete in &deletes {
        tree.remove(i64::from(delete));
    }

    let deletes: HashSet<_> = deletes.into_iter().collect();
    let still_present: Vec<_> = xs.into_iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|&x| !tree.contains(i64::from(x)))
        && still_present.iter().all(|&x| tree.contains(i64::from(x)))
}

#[quickcheck]
fn inorder_is_strictly_ascending(ops: Vec<Op>) -> bool {
    let tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &tree, &mut model);
    tree.inorder().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn iter_matches_inorder(ops: Vec<Op>) -> bool {
    let tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &tree, &mut model);
    tree.iter().collect::<Vec<_>>() == tree.inorder()
}

#[quickcheck]
fn duplicate_inserts_change_nothing(xs: Vec<i8>) -> bool {
    let tree = Tree::new();
    for &x in &xs {
        tree.insert(i64::from(x));
    }
    let len = tree.len();
    let rendered = tree.to_json();

    for &x in &xs {
        tree.insert(i64::from(x));
    }
    tree.len() == len && tree.to_json() == rendered
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i8>) -> bool {
    let tree = Tree::new();
    for &x in &xs {
        tree.insert(i64::from(x));
    }

    // Drain in an order unrelated to insertion order.
    let mut drain: Vec<_> = xs.iter().map(|&x| i64::from(x)).collect();
    drain.sort_unstable();
    drain.reverse();
    tree.remove_many(&drain);

    tree.is_empty() && tree.left().is_none() && tree.right().is_none()
}

#[quickcheck]
fn len_and_height_track_the_model(ops: Vec<Op>) -> bool {
    let tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &tree, &mut model);
    tree.len() == model.len()
        && tree.height() <= model.len()
        && (tree.height() == 0) == model.is_empty()
}

#[quickcheck]
fn min_and_max_track_the_model(ops: Vec<Op>) -> bool {
    let tree = Tree::new();
    let mut model = BTreeSet::new();

    do_ops(&ops, &tree, &mut model);
    tree.min() == model.iter().next().copied() && tree.max() == model.iter().next_back().copied()
}

#[quickcheck]
fn sorted_round_trip(xs: Vec<i16>) -> bool {
    let tree = Tree::new();
    for &x in &xs {
        tree.insert(i64::from(x));
    }

    let sorted: BTreeSet<_> = xs.into_iter().map(i64::from).collect();
    tree.inorder() == sorted.into_iter().collect::<Vec<_>>()
}
