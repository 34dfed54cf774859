//! Block capture.
//!
//! Builder operations come in two forms. The literal form (`row`) takes its
//! content as a value and only returns the rendered markup, so results can be
//! combined programmatically. The block form (`row_with`) takes a closure that
//! receives the builder itself, captures what the closure produces, renders it,
//! and writes the result into the surrounding output buffer as well as
//! returning it, so nested calls compose in document order.

use vb_html::{Html, TemplateContext};

use crate::error::Result;

/// A builder bound to one template context for the duration of a render.
pub trait BoundBuilder {
    /// The host context the builder renders through.
    fn template(&mut self) -> &mut dyn TemplateContext;

    /// Append content to the innermost output buffer.
    fn emit(&mut self, content: Html) {
        self.template().emit(content);
    }
}

/// Run `block` against `builder` and return the content it produced.
///
/// Content emitted into the output buffer while the block runs takes
/// precedence; when nothing (or only whitespace) was emitted, the block's
/// return value is used. The capture buffer is released even when the block
/// fails.
pub fn capture<B, F>(builder: &mut B, block: F) -> Result<Html>
where
    B: BoundBuilder + ?Sized,
    F: FnOnce(&mut B) -> Result<Html>,
{
    builder.template().push_buffer();
    let returned = block(builder);
    let emitted = builder.template().pop_buffer();
    let returned = returned?;

    Ok(if emitted.is_blank() { returned } else { emitted })
}

/// Capture `block`, render the captured content and emit the result.
pub fn dispatch_block<B, F, R>(builder: &mut B, block: F, render: R) -> Result<Html>
where
    B: BoundBuilder + ?Sized,
    F: FnOnce(&mut B) -> Result<Html>,
    R: FnOnce(&mut B, Html) -> Result<Html>,
{
    let content = capture(builder, block)?;
    let rendered = render(builder, content)?;
    builder.emit(rendered.clone());
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuilderError;
    use pretty_assertions::assert_eq;
    use vb_html::{HostError, StandardContext};

    struct Probe<'a> {
        ctx: &'a mut dyn TemplateContext,
    }

    impl BoundBuilder for Probe<'_> {
        fn template(&mut self) -> &mut dyn TemplateContext {
            &mut *self.ctx
        }
    }

    #[test]
    fn test_capture_prefers_emitted_content() {
        let mut ctx = StandardContext::default();
        let mut probe = Probe { ctx: &mut ctx };
        let html = capture(&mut probe, |p| {
            p.emit(Html::raw("<b>emitted</b>"));
            Ok(Html::raw("returned"))
        })
        .unwrap();
        assert_eq!(html.as_str(), "<b>emitted</b>");
        assert!(ctx.output().is_empty());
    }

    #[test]
    fn test_capture_falls_back_to_return_value() {
        let mut ctx = StandardContext::default();
        let mut probe = Probe { ctx: &mut ctx };
        let html = capture(&mut probe, |p| {
            p.emit(Html::raw("  "));
            Ok(Html::raw("returned"))
        })
        .unwrap();
        assert_eq!(html.as_str(), "returned");
    }

    #[test]
    fn test_capture_releases_buffer_on_error() {
        let mut ctx = StandardContext::default();
        ctx.emit(Html::raw("before "));
        let mut probe = Probe { ctx: &mut ctx };
        let result = capture(&mut probe, |p| {
            p.emit(Html::raw("partial"));
            Err(BuilderError::Host(HostError::InvalidTagName("x y".to_owned())))
        });
        assert!(result.is_err());

        probe.emit(Html::raw("after"));
        assert_eq!(ctx.output().as_str(), "before after");
    }

    #[test]
    fn test_dispatch_block_emits_and_returns() {
        let mut ctx = StandardContext::default();
        let mut probe = Probe { ctx: &mut ctx };
        let html = dispatch_block(
            &mut probe,
            |_| Ok(Html::text("body")),
            |_, content| Ok(Html::raw("[") + content + Html::raw("]")),
        )
        .unwrap();
        assert_eq!(html.as_str(), "[body]");
        assert_eq!(ctx.output().as_str(), "[body]");
    }
}
