//! Canonical JSON text.
//!
//! Output uses `", "` and `": "` separators, emits mapping keys in ascending
//! order, and is pure ASCII: every character outside `' '..='~'` is written
//! as a `\uXXXX` escape (surrogate pairs above the BMP). Non-finite floats
//! render as `NaN`, `Infinity` and `-Infinity`. Datetimes and bytes have no
//! JSON form and are written as strings of their textual form.

use serde::Serializer as _;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

use crate::render::{float_repr, str_form};
use crate::value::Value;

/// `serde_json` formatter with spaced separators, ASCII-only strings and
/// non-finite float tokens.
#[derive(Debug, Clone, Copy, Default)]
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(json_float(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes a value to canonical JSON text.
///
/// Sequence order is preserved; call [`crate::normalize`] first (or use
/// [`crate::standardize`]) for order-independent output.
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = Vec::new();
    // Writes into a Vec never fail and the output is ASCII.
    let _ = write_value(&mut out, &mut CanonicalFormatter, value);
    String::from_utf8_lossy(&out).into_owned()
}

fn write_value(out: &mut Vec<u8>, fmt: &mut CanonicalFormatter, value: &Value) -> io::Result<()> {
    match value {
        Value::Null => fmt.write_null(out),
        Value::Bool(b) => fmt.write_bool(out, *b),
        Value::Int(i) => fmt.write_i64(out, *i),
        Value::Float(f) => fmt.write_f64(out, *f),
        Value::Str(s) => write_string(out, s),
        Value::Datetime(_) | Value::Bytes(_) => write_string(out, &str_form(value)),
        Value::Seq(items) => {
            fmt.begin_array(out)?;
            for (idx, item) in items.iter().enumerate() {
                fmt.begin_array_value(out, idx == 0)?;
                write_value(out, fmt, item)?;
                fmt.end_array_value(out)?;
            }
            fmt.end_array(out)
        }
        Value::Map(map) => {
            fmt.begin_object(out)?;
            for (idx, (key, item)) in map.iter().enumerate() {
                fmt.begin_object_key(out, idx == 0)?;
                write_string(out, key)?;
                fmt.end_object_key(out)?;
                fmt.begin_object_value(out)?;
                write_value(out, fmt, item)?;
                fmt.end_object_value(out)?;
            }
            fmt.end_object(out)
        }
    }
}

fn json_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        float_repr(f)
    }
}

/// Quotes and escapes `s` through `serde_json`, leaving non-ASCII to the formatter.
fn write_string(out: &mut Vec<u8>, s: &str) -> io::Result<()> {
    let mut ser = Serializer::with_formatter(out, CanonicalFormatter);
    ser.serialize_str(s).map_err(io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_non_ascii_and_controls() {
        assert_eq!(
            to_canonical_json(&Value::from("zażółć")),
            r#""za\u017c\u00f3\u0142\u0107""#
        );
        assert_eq!(
            to_canonical_json(&Value::from("😀")),
            r#""\ud83d\ude00""#
        );
        assert_eq!(
            to_canonical_json(&Value::from("a\"b\\c\n\u{01}\u{7f}")),
            r#""a\"b\\c\n\u0001\u007f""#
        );
        assert_eq!(
            to_canonical_json(&Value::from("\t\u{08}\u{0c}\r")),
            r#""\t\b\f\r""#
        );
    }

    #[test]
    fn renders_scalars() {
        assert_eq!(to_canonical_json(&Value::Null), "null");
        assert_eq!(to_canonical_json(&Value::Bool(true)), "true");
        assert_eq!(to_canonical_json(&Value::Int(-3)), "-3");
        assert_eq!(to_canonical_json(&Value::Float(2.0)), "2.0");
        assert_eq!(to_canonical_json(&Value::Float(f64::NAN)), "NaN");
        assert_eq!(to_canonical_json(&Value::Float(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(to_canonical_json(&Value::Bytes(b"ab".to_vec())), r#""b'ab'""#);
    }

    #[test]
    fn uses_spaced_separators() {
        let value: Value = [
            ("b", Value::Int(1)),
            ("a", Value::Seq(vec![Value::Int(1), Value::Null])),
        ]
        .into_iter()
        .collect();
        assert_eq!(to_canonical_json(&value), r#"{"a": [1, null], "b": 1}"#);
    }
}
