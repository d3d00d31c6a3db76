use proptest::prelude::*;
use reversed_string_map::{derive_key, StringAssociation};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Add(Option<String>),
    RemoveByKey(Option<String>),
    RemoveByValue(Option<String>),
    Reset(Option<Vec<Option<String>>>),
}

fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof!["[a-c]{0,3}", " {0,2}", "[a-cA-C ]{1,4}"]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => proptest::option::weighted(0.9, arb_value()).prop_map(Op::Add),
        2 => proptest::option::weighted(0.9, arb_value()).prop_map(Op::RemoveByKey),
        2 => proptest::option::weighted(0.9, arb_value()).prop_map(Op::RemoveByValue),
        1 => proptest::option::weighted(
            0.9,
            proptest::collection::vec(proptest::option::weighted(0.8, arb_value()), 0..6),
        )
        .prop_map(Op::Reset),
    ]
}

// Model the store as a BTreeMap keyed by the reversal and check, after every
// op, that contents match and the store invariants hold:
// - every stored key is the reversal of its value;
// - count_distinct_values equals len;
// - extremes and sorted views agree with the model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_store_matches_model(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let mut sut = StringAssociation::new();
        let mut model: BTreeMap<String, String> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Add(v) => {
                    sut.add_value(v.as_deref());
                    if let Some(v) = v {
                        if !v.trim().is_empty() {
                            model.insert(derive_key(&v), v);
                        }
                    }
                }
                Op::RemoveByKey(k) => {
                    sut.remove_by_key(k.as_deref());
                    if let Some(k) = k {
                        model.remove(&k);
                    }
                }
                Op::RemoveByValue(v) => {
                    sut.remove_by_value(v.as_deref());
                    if let Some(v) = v {
                        model.remove(&derive_key(&v));
                    }
                }
                Op::Reset(items) => {
                    sut.reset_from(items.clone());
                    model.clear();
                    for v in items.into_iter().flatten().flatten() {
                        model.insert(derive_key(&v), v);
                    }
                }
            }

            let mut entries = sut.entries();
            entries.sort();
            let expected: Vec<(String, String)> = model.clone().into_iter().collect();
            prop_assert_eq!(entries, expected);

            prop_assert!(sut.is_consistent());
            prop_assert_eq!(sut.count_distinct_values(), sut.len());
            prop_assert_eq!(sut.smallest_key(), model.keys().next().map(String::as_str));
            prop_assert_eq!(sut.largest_value(), model.values().max().map(String::as_str));

            let mut values: Vec<String> = model.values().cloned().collect();
            values.sort();
            prop_assert_eq!(sut.values_sorted(), values);
            let keys: Vec<String> = model.keys().rev().cloned().collect();
            prop_assert_eq!(sut.keys_sorted_descending(), keys);
        }
    }
}

proptest! {
    // Every stored value is found; adding any value not stored makes the check fail.
    #[test]
    fn prop_contains_all_values(values in proptest::collection::vec("[a-d]{1,3}", 0..8), probe in "[a-d]{1,3}") {
        let sut: StringAssociation = values.iter().collect();
        prop_assert!(sut.contains_all_values(Some(values.iter().map(String::as_str))));

        let mut with_probe: Vec<&str> = values.iter().map(String::as_str).collect();
        with_probe.push(&probe);
        prop_assert_eq!(sut.contains_all_values(Some(with_probe)), values.contains(&probe));
    }

    // Uppercasing keys never changes the value multiset beyond collisions and
    // leaves every key in uppercase form.
    #[test]
    fn prop_uppercase_all_keys(values in proptest::collection::vec("[a-cA-C]{1,3}", 0..8)) {
        let mut sut: StringAssociation = values.iter().collect();
        let before: Vec<String> = sut.values_sorted();
        let upper_keys = {
            let mut k = sut.keys_uppercased();
            k.sort();
            k.dedup();
            k
        };
        sut.uppercase_all_keys();

        let mut keys = sut.keys_sorted_descending();
        keys.reverse();
        prop_assert_eq!(keys, upper_keys);
        for v in sut.values_sorted() {
            prop_assert!(before.contains(&v));
        }
    }
}
