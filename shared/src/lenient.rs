//! Deserializers that never fail on a wrong-typed field.
//!
//! Snapshots come from an external exporter. Optional fields may be missing,
//! `null`, or of an unexpected JSON type; every field routed through these
//! helpers falls back to its default instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::format_number;

/// Category name paired with its records, in document order.
pub type CategoryLists<T> = Vec<(String, Vec<T>)>;

/// Category name paired with unit lists, in document order.
pub type NestedCategoryLists<T> = Vec<(String, CategoryLists<T>)>;

/// Numeric field. Anything but a JSON number reads as `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Display text. Numbers and booleans keep their document spelling.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(value))
}

/// Nested record. Non-objects and unreadable objects become `T::default()`.
pub fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(record_from_value(value))
}

/// List of records. Non-arrays read as empty; elements that are not records are skipped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_from_value(value))
}

/// `{ category: [record, ...] }` map.
pub fn category_lists<'de, D, T>(deserializer: D) -> Result<CategoryLists<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(category_lists_from_value(value))
}

/// `{ category: { unit: [record, ...] } }` map.
pub fn nested_category_lists<'de, D, T>(
    deserializer: D,
) -> Result<NestedCategoryLists<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(categories) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(categories
        .into_iter()
        .map(|(category, units)| (category, category_lists_from_value(units)))
        .collect())
}

/// Truthiness of an arbitrary document value: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().map(format_number),
        },
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn record_from_value<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !value.is_object() {
        return T::default();
    }
    T::deserialize(value).unwrap_or_default()
}

fn list_from_value<T>(value: Value) -> Vec<T>
where
    T: DeserializeOwned,
{
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| T::deserialize(item).ok())
        .collect()
}

fn category_lists_from_value<T>(value: Value) -> CategoryLists<T>
where
    T: DeserializeOwned,
{
    let Value::Object(categories) = value else {
        return Vec::new();
    };
    categories
        .into_iter()
        .map(|(category, items)| (category, list_from_value(items)))
        .collect()
}
