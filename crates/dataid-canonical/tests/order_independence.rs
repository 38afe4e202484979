use dataid_canonical::{standardize, Value};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-20i64..20).prop_map(Value::Int),
        (-4i32..4).prop_map(|n| Value::Float(f64::from(n) / 2.0)),
        proptest::string::string_regex("[a-c1-2]{0,2}")
            .unwrap()
            .prop_map(Value::Str),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            proptest::collection::btree_map("[a-d]", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

/// Reverses every sequence at every depth.
fn reversed(value: &Value) -> Value {
    match value {
        Value::Seq(items) => Value::Seq(items.iter().rev().map(reversed).collect()),
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), reversed(v)))
                .collect::<BTreeMap<_, _>>(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn permuted_sequences_standardize_identically(
        items in proptest::collection::vec(nested(), 0..6),
        rotation in 0usize..6,
    ) {
        let mut rotated = items.clone();
        if !rotated.is_empty() {
            let len = rotated.len();
            rotated.rotate_left(rotation % len);
        }
        prop_assert_eq!(
            standardize(&Value::Seq(items)),
            standardize(&Value::Seq(rotated))
        );
    }

    #[test]
    fn deep_reversal_standardizes_identically(value in nested()) {
        prop_assert_eq!(standardize(&value), standardize(&reversed(&value)));
    }

    #[test]
    fn insertion_order_of_keys_is_irrelevant(
        entries in proptest::collection::vec(("[a-f]{1,2}", scalar()), 0..6),
    ) {
        let forward: BTreeMap<String, Value> = entries.iter().cloned().collect();
        let backward: BTreeMap<String, Value> = entries.iter().rev().cloned().collect();
        // Later duplicates win on insert, so compare only when keys are unique.
        prop_assume!(forward.len() == entries.len());
        prop_assert_eq!(
            standardize(&Value::Map(forward)),
            standardize(&Value::Map(backward))
        );
    }
}
