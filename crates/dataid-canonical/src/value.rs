use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;

use crate::render::str_form;

/// A nested value accepted by normalization and identifier derivation.
///
/// Mapping keys are held in a `BTreeMap`, so iteration is always ascending
/// regardless of the order in which the caller inserted them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value (`None`).
    Null,
    /// Boolean; never conflated with integers `0`/`1`.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// IEEE-754 binary float, non-finite values included.
    Float(f64),
    /// UTF-8 text.
    Str(String),
    /// Naive (zone-less) timestamp.
    Datetime(NaiveDateTime),
    /// Raw byte data.
    Bytes(Vec<u8>),
    /// Ordered sequence.
    Seq(Vec<Value>),
    /// String-keyed mapping.
    Map(BTreeMap<String, Value>),
}

/// Type tag of a [`Value`], used to break ordering ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Float`]
    Float,
    /// [`Value::Str`]
    Str,
    /// [`Value::Datetime`]
    Datetime,
    /// [`Value::Bytes`]
    Bytes,
    /// [`Value::Seq`]
    Seq,
    /// [`Value::Map`]
    Map,
}

impl ValueKind {
    /// Tie-break rank of the kind.
    ///
    /// The table is fixed: Int 1, Str 2, Float 3, Datetime 4, Null 5, Bool 6,
    /// Seq 7, Map 8. Kinds missing from the table (bytes) rank 0 and sort
    /// before everything else on a tie.
    pub fn rank(self) -> u8 {
        match self {
            ValueKind::Int => 1,
            ValueKind::Str => 2,
            ValueKind::Float => 3,
            ValueKind::Datetime => 4,
            ValueKind::Null => 5,
            ValueKind::Bool => 6,
            ValueKind::Seq => 7,
            ValueKind::Map => 8,
            ValueKind::Bytes => 0,
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Datetime(_) => ValueKind::Datetime,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// True for sequences and mappings.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Seq(_) | Value::Map(_))
    }

    /// Returns the text when the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Converts a parsed JSON document into a value.
    ///
    /// Numbers that fit `i64` become [`Value::Int`]; every other number
    /// becomes [`Value::Float`].
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(json)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::Datetime(dt)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// Datetimes serialize as their textual form; bytes as a byte sequence.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Datetime(_) => serializer.serialize_str(&str_form(self)),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rank_table_is_fixed() {
        let order = [
            ValueKind::Bytes,
            ValueKind::Int,
            ValueKind::Str,
            ValueKind::Float,
            ValueKind::Datetime,
            ValueKind::Null,
            ValueKind::Bool,
            ValueKind::Seq,
            ValueKind::Map,
        ];
        let ranks: Vec<u8> = order.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn from_json_splits_integers_and_floats() {
        let value = Value::from_json(json!({"a": 1, "b": 1.5, "c": [null, true, "x"]}));
        let Value::Map(map) = value else {
            panic!("expected map");
        };
        assert_eq!(map["a"], Value::Int(1));
        assert_eq!(map["b"], Value::Float(1.5));
        assert_eq!(
            map["c"],
            Value::Seq(vec![Value::Null, Value::Bool(true), Value::from("x")])
        );
    }

    #[test]
    fn huge_unsigned_becomes_float() {
        let value = Value::from_json(json!(u64::MAX));
        assert_eq!(value.kind(), ValueKind::Float);
    }

    #[test]
    fn containers_are_detected() {
        assert!(Value::Seq(vec![]).is_container());
        assert!(Value::Map(BTreeMap::new()).is_container());
        assert!(!Value::from("[]").is_container());
        assert!(!Value::Bytes(vec![]).is_container());
    }

    #[test]
    fn serializes_datetime_as_text() {
        let dt = chrono::NaiveDate::from_ymd_opt(2021, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let value: Value = [("date", Value::from(dt))].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"date":"2021-09-01 00:00:00"}"#
        );
    }
}
