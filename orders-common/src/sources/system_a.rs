//! System A reader (JSON array export)
//!
//! Record fields: `orderID, customer, orderDate, totalAmount, status`. Dates
//! are already `YYYY-MM-DD`; status is a short code such as `SHIP`.
//!
//! Field decoding is lenient: a missing or oddly-typed value degrades to an
//! empty string (or NaN for the amount) instead of rejecting the whole export.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

use crate::normalize::coerce_amount;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemAOrder {
    #[serde(rename = "orderID", default, deserialize_with = "lenient_string")]
    pub order_id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub customer: String,

    #[serde(rename = "orderDate", default, deserialize_with = "lenient_string")]
    pub order_date: String,

    #[serde(
        rename = "totalAmount",
        default = "missing_amount",
        deserialize_with = "lenient_amount"
    )]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

/// Parse a System A export held in memory
pub fn parse(content: &str) -> Result<Vec<SystemAOrder>> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a System A export file
pub fn read_file(path: &Path) -> Result<Vec<SystemAOrder>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn missing_amount() -> f64 {
    f64::NAN
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_amount(&s),
        _ => f64::NAN,
    })
}
