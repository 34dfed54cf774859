//! `serde_json`-backed records.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::record::Record;
use crate::value::{ColumnType, Number, RecordValue, Temporal};

/// Error constructing a [`JsonRecord`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The JSON value is not an object.
    #[error("Record for {model} must be a JSON object, got {found}")]
    NotAnObject {
        /// Model name the record was built for.
        model: String,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// Record backed by a JSON object.
///
/// Property conversion:
///
/// | JSON | [`RecordValue`] |
/// |---|---|
/// | `null`, missing key | `Absent` |
/// | boolean | `Boolean` |
/// | number | `Number` |
/// | ISO date / date-time string | `Temporal` |
/// | other string | `Text` |
/// | array, object | `Other` (compact JSON) |
///
/// Strings are parsed as dates only when the attribute has no declared
/// column type, or when it is declared `date`/`date_time`.
#[derive(Debug, Clone)]
pub struct JsonRecord {
    model_name: String,
    fields: Map<String, Value>,
    columns: HashMap<String, ColumnType>,
    labels: HashMap<String, String>,
}

impl JsonRecord {
    /// Create a record from a JSON object map.
    #[must_use]
    pub fn new(model_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            model_name: model_name.into(),
            fields,
            columns: HashMap::new(),
            labels: HashMap::new(),
        }
    }

    /// Create a record from a JSON value, which must be an object.
    pub fn from_value(model_name: impl Into<String>, value: Value) -> Result<Self, RecordError> {
        let model_name = model_name.into();
        match value {
            Value::Object(fields) => Ok(Self::new(model_name, fields)),
            other => Err(RecordError::NotAnObject {
                model: model_name,
                found: json_type_name(&other),
            }),
        }
    }

    /// Declare the column type of an attribute.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.columns.insert(name.into(), column_type);
        self
    }

    /// Override the human-readable label of an attribute.
    #[must_use]
    pub fn with_label(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(name.into(), label.into());
        self
    }

    fn convert_string(&self, name: &str, text: &str) -> RecordValue {
        let parse_dates = match self.columns.get(name) {
            None | Some(ColumnType::Date | ColumnType::DateTime) => true,
            Some(_) => false,
        };
        if parse_dates && let Some(temporal) = parse_temporal(text) {
            return RecordValue::Temporal(temporal);
        }
        RecordValue::Text(text.to_owned())
    }
}

impl Record for JsonRecord {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn property(&self, name: &str) -> RecordValue {
        match self.fields.get(name) {
            None | Some(Value::Null) => RecordValue::Absent,
            Some(Value::Bool(flag)) => RecordValue::Boolean(*flag),
            Some(Value::Number(number)) => json_number(number)
                .map_or_else(|| RecordValue::Other(number.to_string()), RecordValue::Number),
            Some(Value::String(text)) => self.convert_string(name, text),
            Some(other) => RecordValue::Other(other.to_string()),
        }
    }

    fn has_property(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn human_attribute_name(&self, name: &str) -> String {
        self.labels
            .get(name)
            .cloned()
            .unwrap_or_else(|| crate::inflect::humanize(name))
    }

    fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.get(name).copied()
    }
}

/// Parse ISO 8601 dates and date-times.
fn parse_temporal(text: &str) -> Option<Temporal> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(Temporal::Date(date));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(Temporal::DateTime(datetime));
        }
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|datetime| Temporal::DateTime(datetime.naive_local()))
}

fn json_number(number: &serde_json::Number) -> Option<Number> {
    number
        .as_i64()
        .map(Number::from)
        .or_else(|| number.as_u64().map(Number::from))
        .or_else(|| number.as_f64().map(Number::from))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
