//! Tolerant serde helpers for backend-supplied numbers.
//!
//! The backend sends amounts as JSON numbers, numeric strings, `null`, or not
//! at all, depending on the exchange. Anything that is not a finite number is
//! read as "absent" so that downstream sums treat it as zero.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parses a numeric string (plain or scientific notation) into a Decimal.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Converts an arbitrary JSON value into a Decimal, if it holds a number.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                // Prefer the textual form to keep the digits the backend sent
                parse_decimal(&n.to_string()).or_else(|| n.as_f64().and_then(Decimal::from_f64))
            }
        }
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

// Serializer/deserializer for Option<Decimal> that never fails on bad input
pub mod lenient_decimal_option {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            // Decimal has an inherent `serialize` returning raw bytes
            Some(d) => Serialize::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(decimal_from_value))
    }
}
