//! Data mapper between wire JSON and [`Record`]s
//!
//! Reading is driven by a [`FieldSpec`]: only declared fields are copied,
//! presence is checked by key (so `0`, `""` and `false` survive) and nested
//! fields are mapped with their own spec. Writing drops unset and
//! server-managed fields from a copy, never from the caller's record.

use ctct_domain::{CtctError, Field, FieldSpec, FieldValue, Record, Result};
use serde_json::{Map, Value};

/// Map one wire object into a record.
///
/// # Errors
///
/// Returns [`CtctError::Mapping`] when `payload` is not an object, a nested
/// field is neither an object nor `null`, or a collection field is not an
/// array.
pub fn from_wire(payload: &Value, spec: &FieldSpec) -> Result<Record> {
    let object = payload
        .as_object()
        .ok_or_else(|| CtctError::Mapping(format!("expected {} object, found {}", spec.name, kind(payload))))?;
    map_object(object, spec)
}

/// Map a top-level JSON array of wire objects.
///
/// # Errors
///
/// Returns [`CtctError::Mapping`] when `payload` is not an array or any
/// element fails [`from_wire`].
pub fn from_wire_list(payload: &Value, spec: &FieldSpec) -> Result<Vec<Record>> {
    let items = payload
        .as_array()
        .ok_or_else(|| CtctError::Mapping(format!("expected {} array, found {}", spec.name, kind(payload))))?;
    items.iter().map(|item| from_wire(item, spec)).collect()
}

fn map_object(object: &Map<String, Value>, spec: &FieldSpec) -> Result<Record> {
    let mut record = Record::new();
    for field in spec.fields {
        let name = field.name();
        let Some(raw) = object.get(name) else {
            record.set(name, FieldValue::Unset);
            continue;
        };

        let value = match (field, raw) {
            (Field::Scalar(_), raw) => FieldValue::from_json(raw.clone()),
            (Field::Nested(..) | Field::Collection(..), Value::Null) => FieldValue::Null,
            (Field::Nested(_, nested), Value::Object(inner)) => FieldValue::Record(map_object(inner, nested)?),
            (Field::Collection(_, nested), Value::Array(items)) => FieldValue::List(
                items
                    .iter()
                    .map(|item| from_wire(item, nested).map(FieldValue::Record))
                    .collect::<Result<_>>()?,
            ),
            (Field::Nested(_, nested) | Field::Collection(_, nested), other) => {
                return Err(CtctError::Mapping(format!(
                    "{}.{name}: expected {}, found {}",
                    spec.name,
                    nested.name,
                    kind(other)
                )));
            }
        };
        record.set(name, value);
    }
    Ok(record)
}

/// Serialize a record for sending, dropping `omit` and every unset field.
pub fn to_wire(record: &Record, omit: &[&str]) -> Value {
    let object: Map<String, Value> = record
        .iter()
        .filter(|(name, _)| !omit.contains(name))
        .filter_map(|(name, value)| value.to_json().map(|json| (name.to_string(), json)))
        .collect();
    Value::Object(object)
}

/// Serialize a record using the spec's server-managed list, recursing into
/// nested records with each nested spec's own list.
pub fn to_wire_with_spec(record: &Record, spec: &FieldSpec) -> Value {
    let object: Map<String, Value> = record
        .iter()
        .filter(|(name, _)| !spec.is_server_managed(name))
        .filter_map(|(name, value)| {
            let nested = spec.field(name).and_then(Field::nested_spec);
            wire_value(value, nested).map(|json| (name.to_string(), json))
        })
        .collect();
    Value::Object(object)
}

fn wire_value(value: &FieldValue, nested: Option<&FieldSpec>) -> Option<Value> {
    match (value, nested) {
        (FieldValue::Record(inner), Some(spec)) => Some(to_wire_with_spec(inner, spec)),
        (FieldValue::List(items), Some(spec)) => {
            Some(Value::Array(items.iter().filter_map(|item| wire_value(item, Some(spec))).collect()))
        }
        (other, _) => other.to_json(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
