//! Records — schema-less nested rows and the field accessor.
//!
//! A `Record` wraps a JSON object. The engine never mutates it; resolution
//! walks the path segments and short-circuits to `FieldValue::Absent` the
//! moment an intermediate is missing or not an object.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

/// One table row. Always a JSON object at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Value);

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
    #[error("failed to serialize row: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A resolved leaf value. Arrays, objects, and nulls at a leaf are treated
/// as absent — the engine only orders and filters scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    Bool(bool),
    Absent,
}

impl Record {
    pub fn new(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(_) => Ok(Self(value)),
            other => Err(RecordError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    /// Serialize a typed row into a record.
    pub fn from_serialize<T: Serialize>(row: &T) -> Result<Self, RecordError> {
        Self::new(serde_json::to_value(row)?)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Resolve a field path. Total: never panics, absent on any miss.
    pub fn resolve(&self, path: &FieldPath) -> FieldValue<'_> {
        let mut current = &self.0;
        for segment in path.segments() {
            match current.get(segment.as_str()) {
                Some(next) => current = next,
                None => return FieldValue::Absent,
            }
        }
        match current {
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Absent),
            Value::String(s) => FieldValue::Text(s),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Absent,
        }
    }
}

/// Serialize a slice of typed rows into records.
pub fn to_records<T: Serialize>(rows: &[T]) -> Result<Vec<Record>, RecordError> {
    rows.iter().map(Record::from_serialize).collect()
}

impl FieldValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setup_record() -> Record {
        Record::new(json!({
            "token": "SOL",
            "confidence": 96,
            "volume_confirmation": true,
            "note": null,
            "indicators": { "adx": 45.6, "channel_position": "+15.2%" },
        }))
        .unwrap()
    }

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn rejects_non_object_top_level() {
        assert!(Record::new(json!([1, 2, 3])).is_err());
        assert!(Record::new(json!("scalar")).is_err());
    }

    #[test]
    fn resolves_top_level_scalars() {
        let record = setup_record();
        assert_eq!(record.resolve(&path("token")), FieldValue::Text("SOL"));
        assert_eq!(record.resolve(&path("confidence")), FieldValue::Number(96.0));
        assert_eq!(
            record.resolve(&path("volume_confirmation")),
            FieldValue::Bool(true)
        );
    }

    #[test]
    fn resolves_nested_path() {
        let record = setup_record();
        assert_eq!(
            record.resolve(&path("indicators.adx")),
            FieldValue::Number(45.6)
        );
        assert_eq!(
            record.resolve(&path("indicators.channel_position")),
            FieldValue::Text("+15.2%")
        );
    }

    #[test]
    fn missing_intermediate_resolves_absent() {
        // A record without the nested object never throws — it is absent.
        let record = Record::new(json!({ "token": "OM" })).unwrap();
        assert!(record.resolve(&path("indicators.adx")).is_absent());
    }

    #[test]
    fn non_scalar_leaves_resolve_absent() {
        let record = setup_record();
        assert!(record.resolve(&path("note")).is_absent());
        assert!(record.resolve(&path("indicators")).is_absent());
    }

    #[test]
    fn scalar_intermediate_resolves_absent() {
        let record = setup_record();
        assert!(record.resolve(&path("token.symbol")).is_absent());
    }

    #[test]
    fn from_serialize_builds_object_record() {
        #[derive(serde::Serialize)]
        struct Row {
            token: &'static str,
            confidence: u8,
        }
        let record = Record::from_serialize(&Row { token: "PEPE", confidence: 94 }).unwrap();
        assert_eq!(record.resolve(&path("token")), FieldValue::Text("PEPE"));
    }
}
