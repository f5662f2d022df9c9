//! Differential property tests against `BTreeSet`.

use crate::VebTree;

use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(u32),
    Remove(u32),
    Contains(u32),
    Successor(u32),
    Predecessor(u32),
    Clear,
}

/// Operations over `[0, 2^bits + 4)`, so a few keys fall outside the universe.
fn op_strategy(bits: u8) -> impl Strategy<Value = Op> {
    let key = 0..(1u32 << bits) + 4;
    prop_oneof![
        6 => key.clone().prop_map(Op::Insert),
        4 => key.clone().prop_map(Op::Remove),
        2 => key.clone().prop_map(Op::Contains),
        2 => key.clone().prop_map(Op::Successor),
        2 => key.prop_map(Op::Predecessor),
        1 => Just(Op::Clear),
    ]
}

fn case_strategy() -> impl Strategy<Value = (u8, Vec<Op>)> {
    (1u8..=10).prop_flat_map(|bits| {
        (
            Just(bits),
            proptest::collection::vec(op_strategy(bits), 0..200),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Replays random operations on both VebTree and BTreeSet and asserts
    /// identical results at every step.
    #[test]
    fn ops_match_btreeset((bits, ops) in case_strategy()) {
        let size = 1u32 << bits;
        let mut tree = VebTree::new(size as usize).unwrap();
        let mut model: BTreeSet<u32> = BTreeSet::new();

        for op in &ops {
            match *op {
                Op::Insert(k) => {
                    let got = tree.insert(k);
                    if k < size {
                        prop_assert_eq!(got, Ok(model.insert(k)), "insert({})", k);
                    } else {
                        prop_assert!(got.is_err(), "insert({}) out of range", k);
                    }
                }
                Op::Remove(k) => {
                    let got = tree.remove(k);
                    if k < size {
                        prop_assert_eq!(got, Ok(model.remove(&k)), "remove({})", k);
                    } else {
                        prop_assert!(got.is_err(), "remove({}) out of range", k);
                    }
                }
                Op::Contains(k) => {
                    prop_assert_eq!(tree.contains(k), model.contains(&k), "contains({})", k);
                }
                Op::Successor(k) => {
                    let want = model.range(k.saturating_add(1)..).next().copied();
                    prop_assert_eq!(tree.successor(k), want, "successor({})", k);
                }
                Op::Predecessor(k) => {
                    let want = model.range(..k).next_back().copied();
                    prop_assert_eq!(tree.predecessor(k), want, "predecessor({})", k);
                }
                Op::Clear => {
                    tree.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(tree.min(), model.first().copied());
            prop_assert_eq!(tree.max(), model.last().copied());
        }

        tree.assert_invariants();
        prop_assert!(tree.iter().eq(model.iter().copied()));
        prop_assert!(tree.iter().rev().eq(model.iter().rev().copied()));
        prop_assert!(tree.members().eq(model.iter().copied()));
    }

    /// Inserting a set and then removing all of it leaves every node empty.
    #[test]
    fn insert_then_remove_all_empties_tree(
        bits in 1u8..=10,
        raw in proptest::collection::vec(any::<u32>(), 0..300),
    ) {
        let size = 1u32 << bits;
        let keys: Vec<u32> = raw.iter().map(|k| k % size).collect();
        let mut tree = VebTree::new(size as usize).unwrap();

        for &k in &keys {
            tree.insert(k).unwrap();
        }
        tree.assert_invariants();

        for &k in &keys {
            tree.remove(k).unwrap();
        }
        prop_assert!(tree.is_empty());
        prop_assert!(tree.is_structurally_empty());
        prop_assert_eq!(tree.iter().next(), None);
    }
}
