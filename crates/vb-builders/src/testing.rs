//! Host contexts for builder tests.

use vb_html::{Attributes, HostError, Html, StandardContext, TemplateContext};
use vb_record::Temporal;

/// Reference host whose escape wraps text in brackets, so tests can see
/// which text went through the host.
#[derive(Default)]
pub(crate) struct BracketingContext {
    inner: StandardContext,
}

impl TemplateContext for BracketingContext {
    fn content_tag(
        &self,
        name: &str,
        content: &Html,
        attrs: &Attributes,
    ) -> Result<Html, HostError> {
        self.inner.content_tag(name, content, attrs)
    }

    fn tag(&self, name: &str, attrs: &Attributes) -> Result<Html, HostError> {
        self.inner.tag(name, attrs)
    }

    fn push_buffer(&mut self) {
        self.inner.push_buffer();
    }

    fn pop_buffer(&mut self) -> Html {
        self.inner.pop_buffer()
    }

    fn emit(&mut self, content: Html) {
        self.inner.emit(content);
    }

    fn cycle(&mut self, on: &str, off: Option<&str>) -> Option<String> {
        self.inner.cycle(on, off)
    }

    fn reset_cycle(&mut self) {
        self.inner.reset_cycle();
    }

    fn escape(&self, text: &str) -> Html {
        Html::text(&format!("[{text}]"))
    }

    fn localize_date(&self, value: &Temporal, format: Option<&str>) -> Result<String, HostError> {
        self.inner.localize_date(value, format)
    }

    fn translate_boolean(&self, value: bool) -> Result<String, HostError> {
        self.inner.translate_boolean(value)
    }

    fn format_currency(&self, amount: f64) -> Result<String, HostError> {
        self.inner.format_currency(amount)
    }
}
