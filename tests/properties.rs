//! Property tests: random insert/remove sequences checked against a
//! `BTreeMap` model after every step.

use std::collections::BTreeMap;

use avl_index::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u8),
    Remove(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u16..256, 0u8..4).prop_map(|(k, e)| Op::Insert(k, e)),
        1 => (0u16..256).prop_map(Op::Remove),
    ]
}

fn key(k: u16) -> String {
    format!("{k:03}")
}

fn acronym(e: u8) -> String {
    format!("E{e}")
}

proptest! {
    #[test]
    fn tree_matches_model(ops in prop::collection::vec(op(), 1..300)) {
        let mut tree = AvlTree::new();
        let mut model: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(k, e) => {
                    let created = tree.insert(SequenceMap::new(key(k), acronym(e)));
                    let entry = model.entry(key(k));
                    let was_new = matches!(entry, std::collections::btree_map::Entry::Vacant(_));
                    let acronyms = entry.or_default();
                    if !acronyms.contains(&acronym(e)) {
                        acronyms.push(acronym(e));
                    }
                    prop_assert_eq!(created, was_new);
                }
                Op::Remove(k) => {
                    let removed = tree.remove(key(k).as_str());
                    prop_assert_eq!(removed.is_some(), model.remove(&key(k)).is_some());
                }
            }

            prop_assert_eq!(tree.check_invariants(), Ok(()));
            prop_assert_eq!(tree.count(), model.len());
        }

        let in_order: Vec<(String, Vec<String>)> = tree
            .iter()
            .map(|m| (m.recognition_sequence().to_string(), m.enzyme_acronyms().to_vec()))
            .collect();
        let expected: Vec<(String, Vec<String>)> = model.into_iter().collect();
        prop_assert_eq!(in_order, expected);
    }

    #[test]
    fn height_is_logarithmic(keys in prop::collection::btree_set(any::<u32>(), 1..500)) {
        let tree: AvlTree<u32> = keys.iter().copied().collect();
        let n = keys.len() as f64;
        // AVL bound: h < 1.4405 * log2(n + 2) - 0.3277
        let bound = 1.4405 * (n + 2.0).log2() - 0.3277;
        prop_assert!(f64::from(tree.height()) < bound);
    }

    #[test]
    fn absent_removal_is_a_no_op(keys in prop::collection::vec(0u32..1000, 0..100), missing in 1000u32..2000) {
        let mut tree: AvlTree<u32> = keys.into_iter().collect();
        let before = tree.clone();
        prop_assert_eq!(tree.remove(&missing), None);
        prop_assert_eq!(tree.iter().collect::<Vec<_>>(), before.iter().collect::<Vec<_>>());
        prop_assert_eq!(tree.height(), before.height());
        prop_assert_eq!(tree.total_depth(), before.total_depth());
    }

    #[test]
    fn find_count_never_exceeds_height(keys in prop::collection::vec(any::<u16>(), 1..200), key in any::<u16>()) {
        let tree: AvlTree<u16> = keys.into_iter().collect();
        let steps = tree.find_recursion_count(&key);
        prop_assert!(steps as i32 <= tree.height() + 1);
        prop_assert_eq!(tree.find_traced(&key), (tree.find(&key), steps));
    }
}
