//! The record introspection trait.

use crate::inflect::{humanize, underscore};
use crate::value::{ColumnType, RecordValue};

/// A domain object whose properties are displayed or edited by builders.
///
/// Only [`model_name`](Self::model_name), [`property`](Self::property) and
/// [`has_property`](Self::has_property) are required. Naming and column
/// metadata have defaults derived from the attribute and model names.
pub trait Record {
    /// Model type name, e.g. `"User"` or `"AdminUser"`.
    fn model_name(&self) -> &str;

    /// Value of the named property.
    ///
    /// Returns [`RecordValue::Absent`] both for properties the record does not
    /// expose and for exposed properties without a value.
    fn property(&self, name: &str) -> RecordValue;

    /// Whether the record exposes the named property at all.
    fn has_property(&self, name: &str) -> bool;

    /// Human-readable label for an attribute.
    fn human_attribute_name(&self, name: &str) -> String {
        humanize(name)
    }

    /// Human-readable model name, e.g. `"Admin user"`.
    fn human_model_name(&self) -> String {
        humanize(&underscore(self.model_name()))
    }

    /// Declared column type for an attribute, when the model has column metadata.
    fn column_type(&self, _name: &str) -> Option<ColumnType> {
        None
    }
}
