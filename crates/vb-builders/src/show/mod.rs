//! Show builders: one record's attributes as name/value rows.
//!
//! [`ShowBuilder`] resolves names and values from the bound [`Record`] and
//! stripes the rows; a [`ShowRenderer`] decides the markup:
//!
//! | Renderer | container | row | name | value |
//! |---|---|---|---|---|
//! | [`SimpleShow`] | `ul.show` | `li.<attribute>` | `div.name` | `div.value` |
//! | [`TabularShow`] | `table.show` | `tr.<attribute>` | `td.name` | `td.value` |
//!
//! [`ExtraShow`] renders like [`SimpleShow`] and keeps line breaks in free
//! text values.
//!
//! [`Record`]: vb_record::Record

mod builder;
mod variants;

pub use builder::{AttributeOptions, DEFAULT_JOIN_TEXT, FromUntilOptions, ShowBuilder, ShowOptions};
pub use variants::{ExtraShow, SimpleShow, TabularShow};

use vb_html::{Attributes, HostError, Html, TemplateContext};

/// One name/value row, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRow {
    /// Attribute key, used as the row's forced class. `None` for rows built
    /// from literal name and value.
    pub attribute_name: Option<String>,
    /// Rendered name content.
    pub name: Html,
    /// Rendered value content.
    pub value: Html,
    /// Attributes of the name element.
    pub name_attrs: Attributes,
    /// Attributes of the value element.
    pub value_attrs: Attributes,
    /// Attributes of the row element, stripe class included.
    pub attrs: Attributes,
}

/// Per-node rendering for show blocks.
pub trait ShowRenderer: Send + Sync {
    /// Name used in the builder catalog.
    fn name(&self) -> &str;

    /// Render the container. `dom_class` identifies the bound record's type.
    fn render_show(
        &self,
        ctx: &dyn TemplateContext,
        dom_class: Option<&str>,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render a name/value row.
    fn render_attribute(&self, ctx: &dyn TemplateContext, row: AttributeRow)
    -> Result<Html, HostError>;

    /// Render the name part of a row.
    fn render_attribute_name(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render the value part of a row.
    fn render_attribute_value(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Whether newlines in free text values become `<br/>`.
    fn converts_line_breaks(&self) -> bool {
        false
    }
}

/// Forced class of a show container.
pub(crate) fn show_class(dom_class: Option<&str>) -> String {
    match dom_class {
        Some(dom_class) if !dom_class.is_empty() => format!("show {dom_class}"),
        _ => "show".to_owned(),
    }
}
