//! Lenient numeric fields.
//!
//! The sales service is loose about numbers: prices come as JSON numbers,
//! numeric strings, `null` or not at all. Anything that is not a finite
//! number reads as `None`, and callers treat `None` as zero.
//!
//! Use with `#[serde(default, deserialize_with = "numeric::lenient_f64")]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a JSON value into a finite `f64`
pub fn value_to_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

/// Parse a JSON value into an integer; fractional values are rejected
pub fn value_to_i64(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    value_to_f64(value)
        .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
        .map(|v| v as i64)
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}
