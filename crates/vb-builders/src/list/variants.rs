use vb_html::{Attributes, HostError, Html, TemplateContext};

use super::ListRenderer;
use crate::composer::render_tag;

/// `div` based list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicList;

impl ListRenderer for BasicList {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn render_list(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "list", content, attrs)
    }

    fn render_header_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "header", content, attrs)
    }

    fn render_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "row", content, attrs)
    }
}

/// `ul`/`li` based list; cells stay `div`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactList;

impl ListRenderer for CompactList {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn render_list(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "ul", "list", content, attrs)
    }

    fn render_header_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "li", "row header", content, attrs)
    }

    fn render_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "li", "row", content, attrs)
    }
}

/// Table based list. Rows and cells carry no forced class.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularList;

impl ListRenderer for TabularList {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn render_list(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "table", "list", content, attrs)
    }

    fn render_header_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        let row = ctx.content_tag("tr", &content, &attrs)?;
        ctx.content_tag("thead", &row, &Attributes::new())
    }

    fn render_row(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        ctx.content_tag("tr", &content, &attrs)
    }

    fn render_header_column(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        ctx.content_tag("th", &content, &attrs)
    }

    fn render_column(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        ctx.content_tag("td", &content, &attrs)
    }
}
