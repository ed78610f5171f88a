//! Serialization for Record.
//!
//! Records travel as plain JSON objects. Field values are converted with
//! `Value::from(serde_json::Value)`, so strings stay strings and the text
//! that search and filters match is exactly the text the backend sent.
//! On the way out, fields are written in key order to keep exports stable.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for key in self.field_names() {
            map.serialize_entry(key, &self.fields[key])?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object representing a table record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            record.fields.insert(key, Value::from(value));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_in_key_order() {
        let record = Record::new()
            .set("status", "Open")
            .set("id", 1)
            .set("amount", 2.5);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"amount":2.5,"id":1,"status":"Open"}"#);
    }

    #[test]
    fn test_serialize_null_field() {
        let record = Record::new().set("remarks", Value::Null);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"remarks":null}"#);
    }

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"id": 7, "visitor": "Anita", "approved": true, "fee": 12.75}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_int("id").unwrap(), Some(7));
        assert_eq!(record.get_string("visitor").unwrap(), Some("Anita"));
        assert_eq!(record.get_bool("approved").unwrap(), Some(true));
        assert_eq!(record.get_float("fee").unwrap(), Some(12.75));
    }

    #[test]
    fn test_deserialize_keeps_date_strings() {
        let json = r#"{"createdAt": "2024-06-01T08:30:00.000Z"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(
            record.get_string("createdAt").unwrap(),
            Some("2024-06-01T08:30:00.000Z")
        );
    }

    #[test]
    fn test_deserialize_nested_values() {
        let json = r#"{"class": {"name": "5", "section": "A"}, "subjects": ["math", "art"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("subjects").unwrap().type_name(), "list");
        assert_eq!(record.get("class").unwrap().type_name(), "object");
        assert_eq!(
            record.get("subjects").unwrap().to_display_string(),
            "math,art"
        );
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<Record>("[1, 2]").is_err());
    }
}
