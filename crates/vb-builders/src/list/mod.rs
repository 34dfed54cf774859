//! List builders.
//!
//! A list is a container of header rows and rows, each holding columns.
//! [`ListBuilder`] drives the row striping and column class assignment;
//! a [`ListRenderer`] decides which element each node becomes:
//!
//! | Renderer | list | header row | row | header column | column |
//! |---|---|---|---|---|---|
//! | [`BasicList`] | `div.list` | `div.header` | `div.row` | `div.header_column` | `div.column` |
//! | [`CompactList`] | `ul.list` | `li.row.header` | `li.row` | `div.header_column` | `div.column` |
//! | [`TabularList`] | `table.list` | `thead > tr` | `tr` | `th` | `td` |

mod builder;
mod variants;

pub use builder::{ListBuilder, ListOptions, RowOptions, STRIPE_CLASS};
pub use variants::{BasicList, CompactList, TabularList};

use vb_html::{Attributes, HostError, Html, TemplateContext};

use crate::composer::render_tag;

/// Per-node rendering for lists.
///
/// Attributes arrive with the stripe and column classes already applied.
pub trait ListRenderer: Send + Sync {
    /// Name used in the builder catalog.
    fn name(&self) -> &str;

    /// Render the list container.
    fn render_list(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render a header row.
    fn render_header_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render a data row.
    fn render_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render a header cell. Defaults to `div.header_column`.
    fn render_header_column(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "header_column", content, attrs)
    }

    /// Render a data cell. Defaults to `div.column`.
    fn render_column(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "column", content, attrs)
    }
}
