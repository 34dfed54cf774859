//! Helper entry points used by templates.
//!
//! Each helper picks a renderer (the caller's override, else the registry's
//! current default), binds a builder to the template context and delegates
//! the top-level call to it.

use std::sync::Arc;

use vb_html::{Attributes, Html, TemplateContext};
use vb_record::Record;

use crate::capture::{BoundBuilder, capture};
use crate::crud_page::{CrudPageBuilder, CrudPageRenderer};
use crate::error::Result;
use crate::form::{FormBuilder, FormRenderer};
use crate::list::{ListBuilder, ListOptions, ListRenderer};
use crate::registry::{BuilderKind, BuilderRegistry};
use crate::show::{ShowBuilder, ShowOptions, ShowRenderer};

/// Helper options: an optional renderer override plus the options passed on
/// to the builder.
///
/// The override is consumed by the helper and never reaches the markup.
pub struct HelperOptions<R: ?Sized, O> {
    /// Renderer to use instead of the registry default.
    pub builder: Option<Arc<R>>,
    /// Options for the top-level builder call.
    pub options: O,
}

impl<R: ?Sized, O> HelperOptions<R, O> {
    pub fn new(options: O) -> Self {
        Self {
            builder: None,
            options,
        }
    }

    /// Use `builder` instead of the registry default.
    #[must_use]
    pub fn with_builder(mut self, builder: Arc<R>) -> Self {
        self.builder = Some(builder);
        self
    }
}

impl<R: ?Sized, O: Default> Default for HelperOptions<R, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<R: ?Sized, O> From<O> for HelperOptions<R, O> {
    fn from(options: O) -> Self {
        Self::new(options)
    }
}

/// Options for [`ViewHelpers::list_html`].
pub type ListHtmlOptions = HelperOptions<dyn ListRenderer, ListOptions>;
/// Options for [`ViewHelpers::show_for`] and [`ViewHelpers::show_html`].
pub type ShowHtmlOptions = HelperOptions<dyn ShowRenderer, ShowOptions>;
/// Options for [`ViewHelpers::crud_page_html`].
pub type CrudPageHtmlOptions = HelperOptions<dyn CrudPageRenderer, Attributes>;
/// Options for [`ViewHelpers::form_fields_for`].
pub type FormHtmlOptions = HelperOptions<dyn FormRenderer, ()>;

/// Template helpers bound to a builder registry.
#[derive(Debug, Clone, Copy)]
pub struct ViewHelpers<'r> {
    registry: &'r BuilderRegistry,
}

impl ViewHelpers<'static> {
    /// Helpers reading defaults from [`BuilderRegistry::global`].
    pub fn global() -> Self {
        Self::new(BuilderRegistry::global())
    }
}

impl<'r> ViewHelpers<'r> {
    pub fn new(registry: &'r BuilderRegistry) -> Self {
        Self { registry }
    }

    /// The registry defaults are read from.
    pub fn registry(&self) -> &'r BuilderRegistry {
        self.registry
    }

    /// Render a list around literal content.
    pub fn list_html(
        &self,
        ctx: &mut dyn TemplateContext,
        content: Html,
        options: impl Into<ListHtmlOptions>,
    ) -> Result<Html> {
        let HelperOptions { builder, options } = options.into();
        let mut list = ListBuilder::new(ctx, self.list_renderer(builder));
        list.list(content, options)
    }

    /// Render a list around the content produced by `block`.
    pub fn list_html_with<'c, F>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        options: impl Into<ListHtmlOptions>,
        block: F,
    ) -> Result<Html>
    where
        F: FnOnce(&mut ListBuilder<'c>) -> Result<Html>,
    {
        let HelperOptions { builder, options } = options.into();
        let mut list = ListBuilder::new(ctx, self.list_renderer(builder));
        list.list_with(options, block)
    }

    /// Render a show block without a record around literal content.
    pub fn show_html(
        &self,
        ctx: &mut dyn TemplateContext,
        content: Html,
        options: impl Into<ShowHtmlOptions>,
    ) -> Result<Html> {
        let HelperOptions { builder, options } = options.into();
        let mut show = ShowBuilder::new(ctx, None, self.show_renderer(builder), options.blank_text);
        show.show(content, options.attrs)
    }

    /// Render a show block without a record around the content produced by `block`.
    pub fn show_html_with<'c, F>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        options: impl Into<ShowHtmlOptions>,
        block: F,
    ) -> Result<Html>
    where
        F: FnOnce(&mut ShowBuilder<'c>) -> Result<Html>,
    {
        let HelperOptions { builder, options } = options.into();
        let mut show = ShowBuilder::new(ctx, None, self.show_renderer(builder), options.blank_text);
        show.show_with(options.attrs, block)
    }

    /// Render a show block for `record` around literal content.
    pub fn show_for<'c>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        record: &'c dyn Record,
        content: Html,
        options: impl Into<ShowHtmlOptions>,
    ) -> Result<Html> {
        let HelperOptions { builder, options } = options.into();
        let renderer = self.show_renderer(builder);
        let mut show = ShowBuilder::new(ctx, Some(record), renderer, options.blank_text);
        show.show(content, options.attrs)
    }

    /// Render a show block for `record` around the content produced by `block`.
    pub fn show_for_with<'c, F>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        record: &'c dyn Record,
        options: impl Into<ShowHtmlOptions>,
        block: F,
    ) -> Result<Html>
    where
        F: FnOnce(&mut ShowBuilder<'c>) -> Result<Html>,
    {
        let HelperOptions { builder, options } = options.into();
        let renderer = self.show_renderer(builder);
        let mut show = ShowBuilder::new(ctx, Some(record), renderer, options.blank_text);
        show.show_with(options.attrs, block)
    }

    /// Render a CRUD page around literal content.
    pub fn crud_page_html(
        &self,
        ctx: &mut dyn TemplateContext,
        content: Html,
        options: impl Into<CrudPageHtmlOptions>,
    ) -> Result<Html> {
        let HelperOptions { builder, options } = options.into();
        let mut page = CrudPageBuilder::new(ctx, None, self.crud_page_renderer(builder));
        page.crud_page(content, options)
    }

    /// Render a CRUD page around the content produced by `block`.
    pub fn crud_page_html_with<'c, F>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        options: impl Into<CrudPageHtmlOptions>,
        block: F,
    ) -> Result<Html>
    where
        F: FnOnce(&mut CrudPageBuilder<'c>) -> Result<Html>,
    {
        let HelperOptions { builder, options } = options.into();
        let mut page = CrudPageBuilder::new(ctx, None, self.crud_page_renderer(builder));
        page.crud_page_with(options, block)
    }

    /// Render a CRUD page about `record`, which supplies the default title.
    pub fn crud_page_for_with<'c, F>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        record: &'c dyn Record,
        options: impl Into<CrudPageHtmlOptions>,
        block: F,
    ) -> Result<Html>
    where
        F: FnOnce(&mut CrudPageBuilder<'c>) -> Result<Html>,
    {
        let HelperOptions { builder, options } = options.into();
        let renderer = self.crud_page_renderer(builder);
        let mut page = CrudPageBuilder::new(ctx, Some(record), renderer);
        page.crud_page_with(options, block)
    }

    /// Form builder for `record` with inputs grouped under `object_name`.
    pub fn form_builder<'c>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        object_name: &str,
        record: &'c dyn Record,
        options: impl Into<FormHtmlOptions>,
    ) -> FormBuilder<'c> {
        let HelperOptions { builder, .. } = options.into();
        FormBuilder::new(ctx, object_name, record, self.form_renderer(builder))
    }

    /// Render the fields produced by `block`, emitting and returning them.
    pub fn form_fields_for<'c, F>(
        &self,
        ctx: &'c mut dyn TemplateContext,
        object_name: &str,
        record: &'c dyn Record,
        options: impl Into<FormHtmlOptions>,
        block: F,
    ) -> Result<Html>
    where
        F: FnOnce(&mut FormBuilder<'c>) -> Result<Html>,
    {
        let mut form = self.form_builder(ctx, object_name, record, options);
        let fields = capture(&mut form, block)?;
        form.emit(fields.clone());
        Ok(fields)
    }

    fn list_renderer(&self, builder: Option<Arc<dyn ListRenderer>>) -> Arc<dyn ListRenderer> {
        let overridden = builder.is_some();
        let renderer = builder.unwrap_or_else(|| self.registry.default_list());
        log_resolved(BuilderKind::List, renderer.name(), overridden);
        renderer
    }

    fn show_renderer(&self, builder: Option<Arc<dyn ShowRenderer>>) -> Arc<dyn ShowRenderer> {
        let overridden = builder.is_some();
        let renderer = builder.unwrap_or_else(|| self.registry.default_show());
        log_resolved(BuilderKind::Show, renderer.name(), overridden);
        renderer
    }

    fn crud_page_renderer(
        &self,
        builder: Option<Arc<dyn CrudPageRenderer>>,
    ) -> Arc<dyn CrudPageRenderer> {
        let overridden = builder.is_some();
        let renderer = builder.unwrap_or_else(|| self.registry.default_crud_page());
        log_resolved(BuilderKind::CrudPage, renderer.name(), overridden);
        renderer
    }

    fn form_renderer(&self, builder: Option<Arc<dyn FormRenderer>>) -> Arc<dyn FormRenderer> {
        let overridden = builder.is_some();
        let renderer = builder.unwrap_or_else(|| self.registry.default_form());
        log_resolved(BuilderKind::Form, renderer.name(), overridden);
        renderer
    }
}

fn log_resolved(kind: BuilderKind, name: &str, overridden: bool) {
    tracing::debug!(kind = %kind, builder = name, overridden, "Resolved builder");
}
