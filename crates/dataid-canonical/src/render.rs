//! Textual renderings of values.
//!
//! [`str_form`] is the primary ordering key of the comparator. It follows the
//! conventional dynamic-language rendering: strings render bare, everything
//! else renders the way it would appear inside a list (`'text'`, `None`,
//! `True`, `1e-05`, `[1, 'a']`). Float text uses the shortest round-trip
//! digits, switching to scientific notation below `1e-4` and from `1e16`.

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt::Write;

use crate::value::Value;

/// Exponent (base 10) from which floats render in scientific notation.
const FLOAT_SCI_UPPER: i32 = 16;
/// Exponent (base 10) below which floats render in scientific notation.
const FLOAT_SCI_LOWER: i32 = -4;

/// Bare textual form of a value, used as the primary ordering key.
pub fn str_form(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Datetime(dt) => datetime_str(dt),
        other => repr(other),
    }
}

/// Quoted representation of a value, as it renders nested inside a container.
pub fn repr(value: &Value) -> String {
    let mut out = String::new();
    write_repr(&mut out, value);
    out
}

fn write_repr(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Float(f) => out.push_str(&float_repr(*f)),
        Value::Str(s) => out.push_str(&str_repr(s)),
        Value::Datetime(dt) => out.push_str(&datetime_repr(dt)),
        Value::Bytes(b) => out.push_str(&bytes_repr(b)),
        Value::Seq(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_repr(out, item);
            }
            out.push(']');
        }
        Value::Map(map) => {
            out.push('{');
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(&str_repr(key));
                out.push_str(": ");
                write_repr(out, item);
            }
            out.push('}');
        }
    }
}

/// Shortest round-trip float text (`1.0`, `0.0001`, `1e-05`, `1e+16`, `nan`, `inf`).
pub fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.2345e-7`.
    let sci = format!("{:e}", f);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return sci,
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(FLOAT_SCI_LOWER..FLOAT_SCI_UPPER).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let mut out = String::from(sign);
    if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
            out.push_str(".0");
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-exponent - 1) as usize));
        out.push_str(&digits);
    }
    out
}

/// Quoted string: single quotes unless the text holds a single quote and no double quote.
pub fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Byte literal text, e.g. `b'ab\x00'`.
pub fn bytes_repr(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out.push(quote as char);
    out
}

/// `YYYY-MM-DD HH:MM:SS`, with `.ffffff` appended when microseconds are set.
pub fn datetime_str(dt: &NaiveDateTime) -> String {
    let mut out = dt.format("%Y-%m-%d %H:%M:%S").to_string();
    let micros = micros(dt);
    if micros != 0 {
        let _ = write!(out, ".{:06}", micros);
    }
    out
}

fn datetime_repr(dt: &NaiveDateTime) -> String {
    let mut out = format!(
        "datetime.datetime({}, {}, {}, {}, {}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute()
    );
    let micros = micros(dt);
    if dt.second() != 0 || micros != 0 {
        let _ = write!(out, ", {}", dt.second());
    }
    if micros != 0 {
        let _ = write!(out, ", {}", micros);
    }
    out.push(')');
    out
}

fn micros(dt: &NaiveDateTime) -> u32 {
    (dt.nanosecond() / 1_000) % 1_000_000
}
