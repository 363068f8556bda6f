// src/record/coerce.rs

use serde_json::{Number, Value};

use crate::parse::is_blank_char;

/// Parse the longest leading decimal float in `raw`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction (at least one
/// digit overall), an optional complete exponent, or `Infinity`. Trailing
/// garbage is ignored: `"12.5 kg"` → `12.5`. Returns `None` when no prefix
/// parses.
pub fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start_matches(is_blank_char);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // exponent only counts when it carries at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Coerce a field to a JSON number, keeping the original string when it has
/// no numeric prefix.
pub fn coerce_numeric(raw: &str) -> Value {
    match leading_float(raw) {
        Some(n) => number_value(n),
        None => Value::String(raw.to_string()),
    }
}

/// Integral values become JSON integers, non-finite values become `null`.
fn number_value(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Value::from(n as i64);
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
