//! CRUD page shells: title, action links and main content.

use std::sync::Arc;

use vb_html::{Attributes, HostError, Html, TemplateContext};
use vb_record::Record;

use crate::capture::{BoundBuilder, dispatch_block};
use crate::composer::render_tag;
use crate::error::Result;

/// Class of the page container when the caller sets none.
pub const DEFAULT_PAGE_CLASS: &str = "crud_page";

/// Per-node rendering for CRUD pages.
pub trait CrudPageRenderer: Send + Sync {
    /// Name used in the builder catalog.
    fn name(&self) -> &str;

    /// Render the page container.
    fn render_crud_page(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render the page heading.
    fn render_title(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render the action link area.
    fn render_links(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError>;

    /// Render the main content. Defaults to the content unchanged.
    fn render_content(
        &self,
        _ctx: &dyn TemplateContext,
        content: Html,
        _attrs: Attributes,
    ) -> Result<Html, HostError> {
        Ok(content)
    }
}

/// `div.crud_page` with an `h1` title and `div.links`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCrudPage;

impl CrudPageRenderer for SimpleCrudPage {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn render_crud_page(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        mut attrs: Attributes,
    ) -> Result<Html, HostError> {
        if attrs.class().is_none() {
            attrs.set("class", DEFAULT_PAGE_CLASS);
        }
        ctx.content_tag("div", &content, &attrs)
    }

    fn render_title(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        ctx.content_tag("h1", &content, &attrs)
    }

    fn render_links(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "links", content, attrs)
    }
}

/// Drives one CRUD page render through a [`CrudPageRenderer`].
pub struct CrudPageBuilder<'a> {
    ctx: &'a mut dyn TemplateContext,
    record: Option<&'a dyn Record>,
    renderer: Arc<dyn CrudPageRenderer>,
}

impl BoundBuilder for CrudPageBuilder<'_> {
    fn template(&mut self) -> &mut dyn TemplateContext {
        &mut *self.ctx
    }
}

impl<'a> CrudPageBuilder<'a> {
    pub fn new(
        ctx: &'a mut dyn TemplateContext,
        record: Option<&'a dyn Record>,
        renderer: Arc<dyn CrudPageRenderer>,
    ) -> Self {
        Self {
            ctx,
            record,
            renderer,
        }
    }

    /// Title derived from the bound record's model name.
    pub fn default_title(&self) -> Option<String> {
        self.record.map(|record| record.human_model_name())
    }

    /// Render the page container around literal content.
    pub fn crud_page(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_crud_page(&*self.ctx, content, attrs)?)
    }

    /// Render the page container around the content produced by `block`.
    pub fn crud_page_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_crud_page(&*this.ctx, content, attrs)?)
        })
    }

    /// Render the page heading.
    pub fn title(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_title(&*self.ctx, content, attrs)?)
    }

    /// Render the link area around literal content.
    pub fn links(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_links(&*self.ctx, content, attrs)?)
    }

    /// Render the link area around the content produced by `block`.
    pub fn links_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_links(&*this.ctx, content, attrs)?)
        })
    }

    /// Render the main content from literal content.
    pub fn content(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_content(&*self.ctx, content, attrs)?)
    }

    /// Render the main content produced by `block`.
    pub fn content_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_content(&*this.ctx, content, attrs)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use vb_html::StandardContext;
    use vb_record::JsonRecord;

    #[test]
    fn test_page_class_defaults_unless_given() {
        let mut ctx = StandardContext::default();
        let mut builder = CrudPageBuilder::new(&mut ctx, None, Arc::new(SimpleCrudPage));
        let html = builder.crud_page(Html::text("x"), Attributes::new()).unwrap();
        assert_eq!(html.as_str(), r#"<div class="crud_page">x</div>"#);

        let html = builder
            .crud_page(Html::text("x"), Attributes::new().with_class("wide"))
            .unwrap();
        assert_eq!(html.as_str(), r#"<div class="wide">x</div>"#);
    }

    #[test]
    fn test_title_and_links() {
        let mut ctx = StandardContext::default();
        let mut builder = CrudPageBuilder::new(&mut ctx, None, Arc::new(SimpleCrudPage));
        let title = builder
            .title(Html::text("People"), Attributes::new())
            .unwrap();
        assert_eq!(title.as_str(), "<h1>People</h1>");
        let links = builder
            .links(Html::raw(r#"<a href="/new">New</a>"#), Attributes::new().with_class("top"))
            .unwrap();
        assert_eq!(
            links.as_str(),
            r#"<div class="links top"><a href="/new">New</a></div>"#
        );
    }

    #[test]
    fn test_content_is_identity() {
        let mut ctx = StandardContext::default();
        let mut builder = CrudPageBuilder::new(&mut ctx, None, Arc::new(SimpleCrudPage));
        let html = builder
            .content(Html::raw("<p>body</p>"), Attributes::new().with_class("ignored"))
            .unwrap();
        assert_eq!(html.as_str(), "<p>body</p>");
    }

    #[test]
    fn test_nested_page_in_document_order() {
        let mut ctx = StandardContext::default();
        let mut builder = CrudPageBuilder::new(&mut ctx, None, Arc::new(SimpleCrudPage));
        let html = builder
            .crud_page_with(Attributes::new(), |page| {
                let title = page.title(Html::text("People"), Attributes::new())?;
                page.emit(title);
                page.links_with(Attributes::new(), |_| Ok(Html::text("New")))?;
                page.content_with(Attributes::new(), |_| Ok(Html::raw("<p>list</p>")))?;
                Ok(Html::new())
            })
            .unwrap();
        assert_eq!(
            html.as_str(),
            r#"<div class="crud_page"><h1>People</h1><div class="links">New</div><p>list</p></div>"#
        );
        assert_eq!(ctx.output(), &html);
    }

    #[test]
    fn test_default_title() {
        let record = JsonRecord::from_value("LineItem", json!({})).unwrap();
        let mut ctx = StandardContext::default();
        let builder = CrudPageBuilder::new(&mut ctx, Some(&record), Arc::new(SimpleCrudPage));
        assert_eq!(builder.default_title(), Some("Line item".to_owned()));

        let mut ctx = StandardContext::default();
        let builder = CrudPageBuilder::new(&mut ctx, None, Arc::new(SimpleCrudPage));
        assert_eq!(builder.default_title(), None);
    }
}
