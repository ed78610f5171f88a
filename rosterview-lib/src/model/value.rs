//! Value enum for dynamic field values

use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use uuid::Uuid;

/// A dynamic value held by one field of a [`Record`](super::Record).
///
/// Records coming from the backend are plain JSON, so most values arrive as
/// `Int`, `Float`, `String`, `List` or `Object`. The richer variants exist for
/// records built in code (fee amounts as `Decimal`, ids as `Guid`, timestamps
/// as `DateTime`).
///
/// # Example
///
/// ```
/// use rosterview_lib::Value;
///
/// let name = Value::from("Grade 5 - A");
/// let strength = Value::from(32);
/// let active = Value::from(true);
/// let empty = Value::Null;
///
/// assert_eq!(strength.to_display_string(), "32");
/// assert_eq!(empty.to_display_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Nested object.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for integer, float and decimal values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Decimal(_))
    }

    /// Returns the numeric view of this value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// Coerces the value to the string that search and filters match against.
    ///
    /// Null becomes the empty string, lists are joined with `,` and objects
    /// are written as compact JSON.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Decimal(d) => d.normalize().to_string(),
            Value::String(s) => s.clone(),
            Value::Guid(g) => g.to_string(),
            Value::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Value::List(items) => items
                .iter()
                .map(Value::to_display_string)
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

/// JSON integers become `Int`, other numbers `Float`. Strings are kept as
/// written so that search matches the text the backend sent.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_display_string_scalars() {
        assert_eq!(Value::Null.to_display_string(), "");
        assert_eq!(Value::from(true).to_display_string(), "true");
        assert_eq!(Value::from(50).to_display_string(), "50");
        assert_eq!(Value::from(2.5).to_display_string(), "2.5");
        assert_eq!(Value::from(200.0).to_display_string(), "200");
        assert_eq!(Value::from("Open").to_display_string(), "Open");
    }

    #[test]
    fn test_display_string_decimal_is_normalized() {
        let fee = Decimal::from_str("1500.00").unwrap();
        assert_eq!(Value::from(fee).to_display_string(), "1500");
    }

    #[test]
    fn test_display_string_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
        assert_eq!(Value::from(dt).to_display_string(), "2024-06-01T08:30:00Z");
    }

    #[test]
    fn test_display_string_list_and_object() {
        let list = Value::from(vec![Value::from("math"), Value::from(3)]);
        assert_eq!(list.to_display_string(), "math,3");

        let json = serde_json::json!({"name": "Ravi", "roll": 12});
        assert_eq!(
            Value::from(json).to_display_string(),
            r#"{"name":"Ravi","roll":12}"#
        );
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(serde_json::json!(5)), Value::Int(5));
        assert_eq!(Value::from(serde_json::json!(5.5)), Value::Float(5.5));
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(Value::from(7).as_f64(), Some(7.0));
        assert_eq!(Value::from("7").as_f64(), None);
        assert!(Value::Decimal(Decimal::new(125, 1)).is_numeric());
        assert!(!Value::Null.is_numeric());
    }
}
