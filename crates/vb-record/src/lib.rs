//! Record introspection for view builders.
//!
//! Builders never look at domain objects directly. They go through the
//! [`Record`] trait, which exposes:
//!
//! - property values as the closed [`RecordValue`] variant
//!   (temporal, boolean, absent, text, number, other)
//! - human-readable attribute and model names
//! - declared column types ([`ColumnType`]) for form widget inference
//!
//! [`JsonRecord`] implements the trait over a `serde_json` object, which is
//! enough for templates fed from JSON and for tests.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vb_record::{JsonRecord, Record, RecordValue};
//!
//! let user = JsonRecord::from_value("User", json!({"name": "Ada", "is_active": true})).unwrap();
//!
//! assert_eq!(user.property("name"), RecordValue::Text("Ada".to_owned()));
//! assert_eq!(user.property("is_active"), RecordValue::Boolean(true));
//! assert_eq!(user.property("missing"), RecordValue::Absent);
//! assert_eq!(user.human_attribute_name("is_active"), "Is active");
//! ```

mod inflect;
mod json;
mod record;
mod value;

pub use inflect::{humanize, underscore};
pub use json::{JsonRecord, RecordError};
pub use record::Record;
pub use value::{ColumnType, Number, RecordValue, Temporal};
