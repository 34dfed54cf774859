//! The host template capability surface.

use vb_record::{Record, Temporal, underscore};

use crate::attributes::Attributes;
use crate::html::Html;

/// Error raised by a template context capability.
///
/// Builders propagate these unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Element name is empty or contains invalid characters.
    #[error("Invalid element name: {0:?}")]
    InvalidTagName(String),
    /// Attribute name is empty or contains invalid characters.
    #[error("Invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName {
        /// Element the attribute was set on.
        tag: String,
        /// Offending attribute name.
        name: String,
    },
    /// No translation for a key.
    #[error("Translation missing: {key}")]
    MissingTranslation {
        /// Translation key.
        key: String,
    },
    /// Named date format that is not configured.
    #[error("Unknown date format: {name}")]
    UnknownDateFormat {
        /// Format name.
        name: String,
    },
    /// Date format pattern that does not parse.
    #[error("Invalid date format pattern: {pattern:?}")]
    InvalidDateFormat {
        /// The strftime pattern.
        pattern: String,
    },
    /// Amount that cannot be formatted (NaN or infinite).
    #[error("Cannot format {value} as currency")]
    InvalidNumber {
        /// Display form of the amount.
        value: String,
    },
}

/// Capabilities a host template environment provides to builders.
///
/// One context serves one render. It owns the output buffer stack and the
/// row cycle, so it is never shared between concurrent renders.
pub trait TemplateContext {
    /// Construct an element with content.
    fn content_tag(&self, name: &str, content: &Html, attrs: &Attributes)
    -> Result<Html, HostError>;

    /// Construct a void element (`<input>`, `<br>`).
    fn tag(&self, name: &str, attrs: &Attributes) -> Result<Html, HostError>;

    /// Start capturing: subsequent [`emit`](Self::emit) calls go to a fresh buffer.
    fn push_buffer(&mut self);

    /// Stop capturing and return what the innermost buffer collected.
    fn pop_buffer(&mut self) -> Html;

    /// Append content to the innermost output buffer.
    fn emit(&mut self, content: Html);

    /// Alternate between `on` and `off` on successive calls.
    fn cycle(&mut self, on: &str, off: Option<&str>) -> Option<String>;

    /// Restart the cycle so the next call returns `on`.
    fn reset_cycle(&mut self);

    /// Escape plain text.
    fn escape(&self, text: &str) -> Html {
        Html::text(text)
    }

    /// Format a date or date-time.
    ///
    /// `format` is a named format or a strftime pattern; `None` means the
    /// default format.
    fn localize_date(&self, value: &Temporal, format: Option<&str>) -> Result<String, HostError>;

    /// Translated label for a boolean.
    fn translate_boolean(&self, value: bool) -> Result<String, HostError>;

    /// Format an amount as currency.
    fn format_currency(&self, amount: f64) -> Result<String, HostError>;

    /// Construct a link.
    fn link_to(&self, text: &Html, href: &str) -> Result<Html, HostError> {
        self.content_tag("a", text, &Attributes::new().with("href", href))
    }

    /// CSS class identifying a record's type, e.g. `admin_user`.
    fn dom_class(&self, record: &dyn Record) -> String {
        underscore(record.model_name())
    }
}
