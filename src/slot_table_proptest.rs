#![cfg(test)]

// Property tests for SlotTable kept inside the crate next to the
// structure they exercise.

use crate::slot_table::{InsertError, SlotTable};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    TryInsert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::TryInsert(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            2 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `insert` overwrites and reports the previous value like the model.
// - `try_insert` fails exactly when the key is present and never mutates.
// - `remove` returns the owned pair matching the model.
// - `get`/`contains_key` parity; `iter` yields the model's key set once each.
// - `len`/`is_empty` parity with the model after each op.
fn run_scenario<S>(
    mut sut: SlotTable<String, i32, S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher + Clone + Default,
{
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k, v));
            }
            OpI::TryInsert(i, v) => {
                let k = pool[i].clone();
                let already = model.contains_key(&k);
                match sut.try_insert(k.clone(), v) {
                    Ok(()) => {
                        prop_assert!(!already, "try_insert must fail on duplicate");
                        model.insert(k, v);
                    }
                    Err(InsertError::DuplicateKey) => {
                        prop_assert!(already, "duplicate error only when key exists");
                        prop_assert_eq!(sut.get(k.as_str()), model.get(&k));
                    }
                }
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let removed = sut.remove(k.as_str());
                let expected = model.remove_entry(k);
                prop_assert_eq!(removed, expected);
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k.as_str()), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
            }
            OpI::Iterate => {
                let s_keys: BTreeSet<_> = sut.iter().map(|(k, _)| k.clone()).collect();
                let m_keys: BTreeSet<_> = model.keys().cloned().collect();
                prop_assert_eq!(s_keys, m_keys);
                prop_assert_eq!(sut.iter().count(), model.len());
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(SlotTable::new(), &pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress equality resolution.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// Same state-machine invariants under worst-case collision behavior.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(SlotTable::with_hasher(ConstBuildHasher), &pool, ops)?;
    }
}
