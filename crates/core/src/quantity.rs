//! Lenient parsing of count-like fields from upstream JSON.
//!
//! Upstream APIs send counts either as JSON numbers or as decimal strings
//! (`"quantity": "2"`, `"viewCount": "1043"`). Anything that is not a
//! non-negative integer counts as zero; it is never an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a count from an arbitrary JSON value, falling back to 0.
///
/// Fractional quantities (`"1.5"`, sold by weight) deliberately count as 0.
pub fn parse_quantity(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

/// `#[serde(deserialize_with = "deserialize_quantity")]` adapter for
/// [`parse_quantity`]. Pair it with `#[serde(default)]` for absent fields.
pub fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_quantity(&value))
}
