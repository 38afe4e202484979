use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::trace;

use crate::render::str_form;
use crate::serializer::to_canonical_json;
use crate::value::Value;

/// Ordering key of a value: its textual form first, then its kind rank.
///
/// Two values with equal keys render identically and share a kind, so a
/// stable sort by this key is independent of input order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    text: String,
    rank: u8,
}

impl SortKey {
    /// Textual form that orders the value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Kind rank used on textual ties.
    pub fn rank(&self) -> u8 {
        self.rank
    }
}

/// Computes the ordering key of a value.
pub fn sort_key(value: &Value) -> SortKey {
    SortKey {
        text: str_form(value),
        rank: value.kind().rank(),
    }
}

/// Compares two values by textual form, breaking ties by kind rank.
///
/// `Int(1)` and `Str("1")` share the text `1` and are ordered solely by rank;
/// they compare equal only when both kind and text match.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    let text = str_form(a).cmp(&str_form(b));
    text.then_with(|| a.kind().rank().cmp(&b.kind().rank()))
}

/// Returns an order-fixed copy of `value`.
///
/// Mapping values are normalized recursively; sequences normalize each
/// element and are then stably sorted with [`compare`]. Scalars are cloned.
/// The input is never modified.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Seq(items) => {
            let mut sorted: Vec<Value> = items.iter().map(normalize).collect();
            sorted.sort_by_cached_key(sort_key);
            Value::Seq(sorted)
        }
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, child)| (key.clone(), normalize(child)))
                .collect::<BTreeMap<_, _>>(),
        ),
        scalar => scalar.clone(),
    }
}

/// Output of [`standardize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Standardized {
    /// Canonical JSON text of a container input.
    Canonical(String),
    /// Non-container input, returned unchanged.
    Scalar(Value),
}

impl Standardized {
    /// Canonical text, if the input was a container.
    pub fn as_canonical(&self) -> Option<&str> {
        match self {
            Standardized::Canonical(text) => Some(text),
            Standardized::Scalar(_) => None,
        }
    }
}

/// Normalizes and serializes containers; passes scalars through untouched.
pub fn standardize(value: &Value) -> Standardized {
    if !value.is_container() {
        trace!(kind = ?value.kind(), "scalar passed through standardization");
        return Standardized::Scalar(value.clone());
    }
    let canonical = to_canonical_json(&normalize(value));
    trace!(len = canonical.len(), "standardized container");
    Standardized::Canonical(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: Vec<Value>) -> Value {
        Value::Seq(items)
    }

    #[test]
    fn compare_orders_by_text_then_rank() {
        assert_eq!(compare(&Value::Int(1), &Value::from("1")), Ordering::Less);
        assert_eq!(compare(&Value::from("1"), &Value::Int(1)), Ordering::Greater);
        assert_eq!(compare(&Value::Int(10), &Value::Int(9)), Ordering::Less);
        assert_eq!(compare(&Value::Int(1), &Value::Int(1)), Ordering::Equal);
        assert_eq!(compare(&Value::from("None"), &Value::Null), Ordering::Less);
    }

    #[test]
    fn booleans_are_not_integers() {
        let sorted = normalize(&seq(vec![Value::Bool(true), Value::Int(1), Value::Int(0)]));
        assert_eq!(
            sorted,
            seq(vec![Value::Int(0), Value::Int(1), Value::Bool(true)])
        );
    }

    #[test]
    fn bytes_rank_before_every_known_kind() {
        let ranked = normalize(&seq(vec![Value::from("b''"), Value::Bytes(vec![])]));
        assert_eq!(ranked, seq(vec![Value::Bytes(vec![]), Value::from("b''")]));
    }

    #[test]
    fn nested_sequences_are_sorted_before_their_parent() {
        let value = seq(vec![
            seq(vec![Value::Int(2), Value::Int(1)]),
            seq(vec![Value::Int(1), Value::Int(0)]),
        ]);
        let expected = seq(vec![
            seq(vec![Value::Int(0), Value::Int(1)]),
            seq(vec![Value::Int(1), Value::Int(2)]),
        ]);
        assert_eq!(normalize(&value), expected);
    }

    #[test]
    fn normalize_leaves_input_untouched() {
        let value = seq(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
        let before = value.clone();
        let _ = normalize(&value);
        assert_eq!(value, before);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(standardize(&Value::Int(42)), Standardized::Scalar(Value::Int(42)));
        assert_eq!(standardize(&Value::Null), Standardized::Scalar(Value::Null));
        assert_eq!(
            standardize(&Value::from("Just a string")),
            Standardized::Scalar(Value::from("Just a string"))
        );
        assert_eq!(standardize(&Value::Bool(false)).as_canonical(), None);
    }

    #[test]
    fn sort_key_exposes_parts() {
        let key = sort_key(&Value::Float(1.0));
        assert_eq!(key.text(), "1.0");
        assert_eq!(key.rank(), 3);
    }
}
