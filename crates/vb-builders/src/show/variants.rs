use vb_html::{Attributes, HostError, Html, TemplateContext};

use super::{AttributeRow, ShowRenderer, show_class};
use crate::composer::render_tag;

/// `ul`/`li` show block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleShow;

impl ShowRenderer for SimpleShow {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn render_show(
        &self,
        ctx: &dyn TemplateContext,
        dom_class: Option<&str>,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "ul", &show_class(dom_class), content, attrs)
    }

    fn render_attribute(
        &self,
        ctx: &dyn TemplateContext,
        row: AttributeRow,
    ) -> Result<Html, HostError> {
        let content = self.render_attribute_name(ctx, row.name, row.name_attrs)?
            + self.render_attribute_value(ctx, row.value, row.value_attrs)?;
        let class = row.attribute_name.unwrap_or_default();
        render_tag(ctx, "li", &class, content, row.attrs)
    }

    fn render_attribute_name(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "name", content, attrs)
    }

    fn render_attribute_value(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "value", content, attrs)
    }
}

/// Table show block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularShow;

impl ShowRenderer for TabularShow {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn render_show(
        &self,
        ctx: &dyn TemplateContext,
        dom_class: Option<&str>,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "table", &show_class(dom_class), content, attrs)
    }

    fn render_attribute(
        &self,
        ctx: &dyn TemplateContext,
        row: AttributeRow,
    ) -> Result<Html, HostError> {
        let content = self.render_attribute_name(ctx, row.name, row.name_attrs)?
            + self.render_attribute_value(ctx, row.value, row.value_attrs)?;
        let class = row.attribute_name.unwrap_or_default();
        render_tag(ctx, "tr", &class, content, row.attrs)
    }

    fn render_attribute_name(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "td", "name", content, attrs)
    }

    fn render_attribute_value(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "td", "value", content, attrs)
    }
}

/// [`SimpleShow`] markup that keeps line breaks in free text values.
///
/// Usually paired with [`ShowBuilder::from_until_attribute`](super::ShowBuilder::from_until_attribute)
/// for ranges stored as two columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraShow;

impl ShowRenderer for ExtraShow {
    fn name(&self) -> &'static str {
        "extra"
    }

    fn render_show(
        &self,
        ctx: &dyn TemplateContext,
        dom_class: Option<&str>,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        SimpleShow.render_show(ctx, dom_class, content, attrs)
    }

    fn render_attribute(
        &self,
        ctx: &dyn TemplateContext,
        row: AttributeRow,
    ) -> Result<Html, HostError> {
        SimpleShow.render_attribute(ctx, row)
    }

    fn render_attribute_name(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        SimpleShow.render_attribute_name(ctx, content, attrs)
    }

    fn render_attribute_value(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        SimpleShow.render_attribute_value(ctx, content, attrs)
    }

    fn converts_line_breaks(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vb_html::StandardContext;

    fn email_row() -> AttributeRow {
        AttributeRow {
            attribute_name: Some("email".to_owned()),
            name: Html::text("Email"),
            value: Html::text("a@b.com"),
            attrs: Attributes::new().with_class("odd"),
            ..AttributeRow::default()
        }
    }

    #[test]
    fn test_simple_show_markup() {
        let ctx = StandardContext::default();
        let row = SimpleShow.render_attribute(&ctx, email_row()).unwrap();
        assert_eq!(
            row.as_str(),
            r#"<li class="email odd"><div class="name">Email</div><div class="value">a@b.com</div></li>"#
        );
        let show = SimpleShow
            .render_show(&ctx, Some("user"), row, Attributes::new())
            .unwrap();
        assert!(show.as_str().starts_with(r#"<ul class="show user"><li "#));
    }

    #[test]
    fn test_tabular_show_markup() {
        let ctx = StandardContext::default();
        let row = TabularShow.render_attribute(&ctx, email_row()).unwrap();
        assert_eq!(
            row.as_str(),
            r#"<tr class="email odd"><td class="name">Email</td><td class="value">a@b.com</td></tr>"#
        );
        let show = TabularShow
            .render_show(&ctx, None, Html::new(), Attributes::new())
            .unwrap();
        assert_eq!(show.as_str(), r#"<table class="show"></table>"#);
    }

    #[test]
    fn test_literal_row_has_no_forced_class() {
        let ctx = StandardContext::default();
        let row = AttributeRow {
            name: Html::text("Total"),
            value: Html::text("3"),
            ..AttributeRow::default()
        };
        let html = SimpleShow.render_attribute(&ctx, row).unwrap();
        assert_eq!(
            html.as_str(),
            r#"<li><div class="name">Total</div><div class="value">3</div></li>"#
        );
    }

    #[test]
    fn test_extra_show_matches_simple_markup() {
        let ctx = StandardContext::default();
        assert_eq!(
            ExtraShow.render_attribute(&ctx, email_row()).unwrap(),
            SimpleShow.render_attribute(&ctx, email_row()).unwrap()
        );
        assert!(ExtraShow.converts_line_breaks());
        assert!(!SimpleShow.converts_line_breaks());
    }
}
