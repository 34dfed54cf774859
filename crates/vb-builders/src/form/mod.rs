//! Form field builders: label and input pairs for one record.

mod builder;
mod variants;

pub use builder::{FieldOptions, FormBuilder, SelectOption};
pub use variants::SimpleForm;

use vb_html::{Attributes, HostError, Html, TemplateContext};

/// Per-node rendering for form fields.
pub trait FormRenderer: Send + Sync {
    /// Name used in the builder catalog.
    fn name(&self) -> &str;

    /// Render a field wrapper. `field_name` is the attribute the field edits.
    fn render_field(
        &self,
        ctx: &dyn TemplateContext,
        field_name: Option<&str>,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render the label area of a field.
    fn render_field_label(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render the input area of a field.
    fn render_field_input(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;
}
