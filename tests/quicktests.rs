//! Property tests driving the tree with random operation sequences and
//! checking it against a multiset model.

use std::collections::{BTreeMap, HashSet};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use bstree::Tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op {
    /// Insert the value into the tree.
    Insert(i8),
    /// Remove one occurrence of the value from the tree.
    Remove(i8),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree and a multiset (a map of value to
/// occurrence count). This way we can ensure that after a random smattering
/// of inserts and deletes the tree holds exactly the modeled values.
fn do_ops(ops: &[Op], tree: &mut Tree<i8>, model: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match *op {
            Op::Insert(v) => {
                tree.insert(v);
                *model.entry(v).or_default() += 1;
            }
            Op::Remove(v) => {
                tree.remove(&v);
                if let Some(count) = model.get_mut(&v) {
                    *count -= 1;
                    if *count == 0 {
                        model.remove(&v);
                    }
                }
            }
        }
    }
}

/// Expands the multiset model into the sorted value sequence the tree's
/// in-order traversal must produce.
fn expand(model: &BTreeMap<i8, usize>) -> Vec<i8> {
    model
        .iter()
        .flat_map(|(&v, &count)| std::iter::repeat(v).take(count))
        .collect()
}

fn sorted(mut values: Vec<i8>) -> Vec<i8> {
    values.sort_unstable();
    values
}

fn collected(values: Vec<&i8>) -> Vec<i8> {
    values.into_iter().copied().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);

    collected(tree.dfs_in_order()) == expand(&model)
        && model.keys().all(|v| tree.find(v).is_some())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.find(x).map(|n| n.value()) == Some(x))
        && xs
            .iter()
            .all(|x| tree.find_recursive(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursive(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut model = BTreeMap::new();
    for &x in &xs {
        *model.entry(x).or_insert(0usize) += 1;
    }

    // Each remove takes out at most one occurrence.
    for delete in &deletes {
        tree.remove(delete);
        if let Some(count) = model.get_mut(delete) {
            *count -= 1;
            if *count == 0 {
                model.remove(delete);
            }
        }
    }

    collected(tree.dfs_in_order()) == expand(&model)
}

#[quickcheck]
fn insert_variants_agree(xs: Vec<i8>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for &x in &xs {
        iterative.insert(x);
        recursive.insert_recursive(x);
    }

    iterative.bfs() == recursive.bfs() && iterative.dfs_pre_order() == recursive.dfs_pre_order()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    collected(tree.dfs_in_order()) == sorted(xs)
}

#[quickcheck]
fn traversals_visit_the_same_values(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let in_order = collected(tree.dfs_in_order());
    tree.len() == xs.len()
        && sorted(collected(tree.dfs_pre_order())) == in_order
        && sorted(collected(tree.dfs_post_order())) == in_order
        && sorted(collected(tree.bfs())) == in_order
}

#[quickcheck]
fn second_highest_of_distinct_values(xs: Vec<i8>) -> bool {
    let distinct: Vec<i8> = {
        let set: HashSet<_> = xs.into_iter().collect();
        set.into_iter().collect()
    };
    let tree: Tree<_> = distinct.iter().copied().collect();

    let mut expected = distinct;
    expected.sort_unstable();
    expected.pop();

    tree.find_second_highest() == expected.last()
}
