use vb_html::{Attributes, HostError, Html, TemplateContext};

use super::FormRenderer;
use crate::composer::{merge_classes, render_tag};

/// `div.field.<attribute>` holding `div.label` and `div.input`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleForm;

impl FormRenderer for SimpleForm {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn render_field(
        &self,
        ctx: &dyn TemplateContext,
        field_name: Option<&str>,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        let class = merge_classes([Some("field"), field_name]).unwrap_or_default();
        render_tag(ctx, "div", &class, content, attrs)
    }

    fn render_field_label(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "label", content, attrs)
    }

    fn render_field_input(
        &self,
        ctx: &dyn TemplateContext,
        content: Html,
        attrs: Attributes,
    ) -> Result<Html, HostError> {
        render_tag(ctx, "div", "input", content, attrs)
    }
}
