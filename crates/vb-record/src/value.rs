//! Property values and column metadata.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// A date or date-time property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temporal {
    /// Calendar date.
    Date(NaiveDate),
    /// Date with time of day.
    DateTime(NaiveDateTime),
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::DateTime(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// Value of a record property.
///
/// Builders dispatch display formatting on this variant.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordValue {
    /// Date or date-time.
    Temporal(Temporal),
    /// Boolean flag.
    Boolean(bool),
    /// Property missing or without a value.
    Absent,
    /// Free text.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// Anything else, carried as its display string.
    Other(String),
}

impl RecordValue {
    /// Unformatted string form, as used for form input values.
    ///
    /// Returns `None` for [`RecordValue::Absent`].
    #[must_use]
    pub fn to_plain_string(&self) -> Option<String> {
        match self {
            Self::Temporal(temporal) => Some(temporal.to_string()),
            Self::Boolean(flag) => Some(flag.to_string()),
            Self::Absent => None,
            Self::Text(text) | Self::Other(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
        }
    }
}

/// A numeric property value.
///
/// Integers are kept exact; only real fractions are floats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Whole number, exact across the full `i64` and `u64` ranges.
    Integer(i128),
    /// Floating point number.
    Float(f64),
}

impl Number {
    /// Approximate value for arithmetic such as currency formatting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Whole floats print without a trailing `.0`.
impl fmt::Display for Number {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value)
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 =>
            {
                write!(f, "{}", value as i64)
            }
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Declared database column type of an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Text,
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Binary,
}

impl ColumnType {
    /// Whether a plain text input is the natural widget for this type.
    #[must_use]
    pub fn is_text_like(self) -> bool {
        matches!(self, Self::String | Self::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Float(42.0).to_string(), "42");
        assert_eq!(Number::Float(-3.0).to_string(), "-3");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::from(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_integers_beyond_f64_precision_stay_exact() {
        let number = Number::from(9_007_199_254_740_993_i64);
        assert_eq!(number.to_string(), "9007199254740993");
        assert_eq!(
            RecordValue::Number(number).to_plain_string(),
            Some("9007199254740993".to_owned())
        );
    }

    #[test]
    fn test_plain_string() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            RecordValue::Temporal(Temporal::Date(date)).to_plain_string(),
            Some("2024-03-09".to_owned())
        );
        assert_eq!(
            RecordValue::Boolean(false).to_plain_string(),
            Some("false".to_owned())
        );
        assert_eq!(RecordValue::Number(Number::Integer(7)).to_plain_string(), Some("7".to_owned()));
        assert_eq!(RecordValue::Absent.to_plain_string(), None);
    }

    #[test]
    fn test_datetime_display() {
        let datetime = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(Temporal::DateTime(datetime).to_string(), "2024-03-09T14:05:00");
    }

    #[test]
    fn test_text_like_column_types() {
        assert!(ColumnType::String.is_text_like());
        assert!(ColumnType::Text.is_text_like());
        assert!(!ColumnType::Integer.is_text_like());
        assert!(!ColumnType::Date.is_text_like());
    }

    #[test]
    fn test_column_type_deserialize() {
        let parsed: ColumnType = serde_json::from_str("\"date_time\"").unwrap();
        assert_eq!(parsed, ColumnType::DateTime);
    }
}
