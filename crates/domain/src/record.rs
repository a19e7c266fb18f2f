//! Open-ended record type for API resources
//!
//! A [`Record`] is one resource instance (contact, campaign, list, tracking
//! event, ...). Cells are [`FieldValue`]s. The `Unset` cell marks a field the
//! server never sent; it is distinct from an explicit `Null` so that
//! serialization can drop unset fields while keeping explicitly cleared ones.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

static UNSET: FieldValue = FieldValue::Unset;

/// A single cell of a [`Record`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Field absent from the payload.
    #[default]
    Unset,
    /// Field present with an explicit JSON `null`.
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Record(Record),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Convert an arbitrary JSON value, keeping nested objects as records.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Record(Record::from_json_object(map)),
        }
    }

    /// Wire representation, or `None` when the cell is unset.
    ///
    /// Unset cells nested inside records are dropped; unset list entries are
    /// skipped.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Unset => None,
            Self::Null => Some(Value::Null),
            Self::Bool(b) => Some(Value::Bool(*b)),
            Self::Number(n) => Some(Value::Number(n.clone())),
            Self::Text(s) => Some(Value::String(s.clone())),
            Self::Record(record) => Some(record.to_json()),
            Self::List(items) => Some(Value::Array(items.iter().filter_map(Self::to_json).collect())),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Iterate over the records of a list cell, skipping non-record entries.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.as_list().unwrap_or(&[]).iter().filter_map(Self::as_record)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<Record> for FieldValue {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Record(record) => record.serialize(serializer),
            Self::List(items) => {
                let present: Vec<&FieldValue> = items.iter().filter(|v| !v.is_unset()).collect();
                let mut seq = serializer.serialize_seq(Some(present.len()))?;
                for item in present {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// One API resource instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record holding every key of a JSON object.
    pub fn from_json_object(map: Map<String, Value>) -> Self {
        let fields = map.into_iter().map(|(k, v)| (k, FieldValue::from_json(v))).collect();
        Self { fields }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Mark a field as unset so it is omitted from wire output.
    pub fn unset(&mut self, name: &str) {
        if let Some(cell) = self.fields.get_mut(name) {
            *cell = FieldValue::Unset;
        }
    }

    /// Set a field to an explicit `null`, which is kept in wire output.
    pub fn clear(&mut self, name: impl Into<String>) {
        self.fields.insert(name.into(), FieldValue::Null);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Cell for `name`; fields never assigned read as [`FieldValue::Unset`].
    pub fn get(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&UNSET)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(name)
    }

    /// Whether the field holds anything other than `Unset`.
    pub fn is_set(&self, name: &str) -> bool {
        !self.get(name).is_unset()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).as_str()
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).as_i64()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).as_bool()
    }

    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.get(name).as_record()
    }

    /// Records held by a list field (empty when unset or not a list).
    pub fn get_records(&self, name: &str) -> Vec<&Record> {
        self.get(name).records().collect()
    }

    /// The resource `id`, rendered as text whether the server sent a string
    /// or an integer.
    pub fn id(&self) -> Option<String> {
        match self.get("id") {
            FieldValue::Text(s) if !s.is_empty() => Some(s.clone()),
            FieldValue::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
            _ => None,
        }
    }

    /// Append to a list field, creating it when unset.
    pub fn push(&mut self, name: &str, value: impl Into<FieldValue>) {
        let cell = self.fields.entry(name.to_string()).or_default();
        match cell {
            FieldValue::List(items) => items.push(value.into()),
            other => *other = FieldValue::List(vec![value.into()]),
        }
    }

    /// Names of all fields holding a value (unset fields excluded).
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter(|(_, v)| !v.is_unset()).map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of cells, unset ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Wire representation with every unset field dropped.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .filter_map(|(k, v)| v.to_json().map(|json| (k.clone(), json)))
            .collect();
        Value::Object(map)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<(&String, &FieldValue)> =
            self.fields.iter().filter(|(_, v)| !v.is_unset()).collect();
        let mut map = serializer.serialize_map(Some(present.len()))?;
        for (k, v) in present {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self::from_json_object(map)),
            other => Err(de::Error::custom(format!("expected a JSON object, found {other}"))),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_fields_read_as_unset() {
        let record = Record::new().with("name", "Spring");
        assert!(record.get("status").is_unset());
        assert!(!record.is_set("status"));
        assert_eq!(record.get_str("name"), Some("Spring"));
    }

    #[test]
    fn unset_is_dropped_but_null_is_kept() {
        let mut record = Record::new().with("a", 1).with("b", "x");
        record.unset("a");
        record.clear("b");

        assert_eq!(record.to_json(), json!({ "b": null }));
    }

    #[test]
    fn id_accepts_numeric_and_text() {
        assert_eq!(Record::new().with("id", 42).id(), Some("42".to_string()));
        assert_eq!(Record::new().with("id", "1100").id(), Some("1100".to_string()));
        assert_eq!(Record::new().with("id", true).id(), None);
        assert_eq!(Record::new().id(), None);
    }

    #[test]
    fn falsy_values_survive_round_trip() {
        let value = json!({ "count": 0, "name": "", "enabled": false });
        let record: Record = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn push_creates_list() {
        let mut record = Record::new();
        record.push("email_addresses", "a@example.com");
        record.push("email_addresses", "b@example.com");
        assert_eq!(record.to_json(), json!({ "email_addresses": ["a@example.com", "b@example.com"] }));
    }

    #[test]
    fn deserialize_rejects_non_object() {
        let result: Result<Record, _> = serde_json::from_value(json!([1, 2]));
        assert!(result.is_err());
    }
}
