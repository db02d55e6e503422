//! Loose JSON value coercion
//!
//! GHN is inconsistent about numeric types: ids and fees may arrive as
//! integers, floats or numeric strings, and ward codes as strings or
//! integers. Everything read from an upstream envelope goes through here.

use serde_json::Value;

/// Coerce a JSON value to an integer.
///
/// Integers pass through, floats are truncated toward zero, numeric
/// strings are parsed. Anything else (absent, null, bool, garbage) is 0.
pub fn coerce_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => parse_numeric_str(s),
        _ => 0,
    }
}

fn parse_numeric_str(s: &str) -> i64 {
    let trimmed = s.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        .unwrap_or(0)
}

/// Coerce a JSON value to a string.
///
/// Strings pass through, numbers are rendered in decimal. Absent or
/// non-scalar values become an empty string.
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Field lookup on an object value, `None` for non-objects
pub fn field<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    item.as_object().and_then(|obj| obj.get(key))
}
