use linked_bst::{Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::Op;

/// Applies a set of operations to a tree and a map of per-key queues.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same entries in both. Repeated keys are
/// first-in-first-out in the tree, hence the queues.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, VecDeque<V>>)
where
    K: Ord + Clone,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.entry(k.clone()).or_default().push_back(v.clone());
            }
            Op::Remove(k) => {
                let expected = match map.get_mut(k) {
                    Some(values) => {
                        let value = values.pop_front();
                        if values.is_empty() {
                            map.remove(k);
                        }
                        value.ok_or(Error::KeyNotFound)
                    }
                    None => Err(Error::KeyNotFound),
                };
                assert_eq!(bst.remove(k), expected);
            }
        }
    }
}

fn build(xs: &[i8]) -> Tree<i8, i8> {
    xs.iter().map(|x| (*x, *x)).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.dfs_in_order() == map.values().flatten().collect::<Vec<_>>()
        && map.iter().all(|(key, values)| tree.find(key).ok() == values.front())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.find(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == Err(Error::KeyNotFound))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        // We may have inserted the same key multiple times - remove each one.
        while tree.remove(delete).is_ok() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_err())
        && still_present.iter().all(|x| tree.find(x) == Ok(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.dfs_in_order().into_iter().copied().eq(sorted)
}

#[quickcheck]
fn is_bst_when_values_follow_keys(xs: Vec<i8>) -> bool {
    build(&xs).is_bst()
}

#[quickcheck]
fn is_bst_matches_in_order_values(pairs: Vec<(i8, i8)>) -> bool {
    let tree: Tree<_, _> = pairs.into_iter().collect();
    let values = tree.dfs_in_order();
    let mut sorted = values.clone();
    sorted.sort_unstable();

    tree.is_bst() == (values == sorted)
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i8>) -> bool {
    fn sorted(mut values: Vec<&i8>) -> Vec<&i8> {
        values.sort_unstable();
        values
    }

    let tree = build(&xs);

    let in_order = tree.dfs_in_order();
    in_order.len() == xs.len()
        && sorted(tree.dfs_pre_order()) == in_order
        && sorted(tree.dfs_post_order()) == in_order
        && sorted(tree.bfs()) == in_order
}

#[quickcheck]
fn height_is_deepest_level(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    // An earlier key is an ancestor of `x` iff it falls in the range of keys that could still
    // share a subtree with `x` when it was inserted. Left is `[lo, key)` and right is `[key, hi)`.
    let mut depths = Vec::new();
    for (i, x) in xs.iter().enumerate() {
        let mut depth = 0;
        let mut lo = i16::from(i8::MIN);
        let mut hi = i16::from(i8::MAX) + 1;
        for earlier in &xs[..i] {
            let earlier = i16::from(*earlier);
            if lo <= earlier && earlier < hi {
                depth += 1;
                if i16::from(*x) < earlier {
                    hi = earlier;
                } else {
                    lo = earlier;
                }
            }
        }
        depths.push(depth);
    }

    tree.height() == depths.into_iter().max().unwrap_or(0)
}

#[quickcheck]
fn kth_largest_matches_sorted(xs: Vec<i8>, k: usize) -> bool {
    let tree = build(&xs);
    let mut sorted = xs.clone();
    sorted.sort_unstable();

    let k = k % (xs.len() + 2);
    match tree.find_kth_largest_value(k) {
        Ok(value) => k >= 1 && k <= xs.len() && *value == sorted[xs.len() - k],
        Err(Error::RankOutOfRange { k: got, len }) => {
            got == k && len == xs.len() && (k == 0 || k > xs.len())
        }
        Err(Error::KeyNotFound) => false,
    }
}
