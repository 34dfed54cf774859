//! Content composition with forced classes.

use vb_html::{Attributes, HostError, Html, TemplateContext};

/// Space-join the non-blank class names, `None` when nothing remains.
pub fn merge_classes<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let merged = classes
        .into_iter()
        .flatten()
        .filter(|class| !class.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!merged.is_empty()).then_some(merged)
}

/// Render one element whose class is `forced_class` merged with the caller's class.
///
/// The class attribute is dropped when both are blank. Every other attribute
/// passes through unchanged. `kind` is not validated here; the host rejects
/// names it cannot serialize.
pub fn render_tag(
    ctx: &dyn TemplateContext,
    kind: &str,
    forced_class: &str,
    content: Html,
    mut attrs: Attributes,
) -> Result<Html, HostError> {
    let class = merge_classes([Some(forced_class), attrs.class()]);
    attrs.set_class(class);
    ctx.content_tag(kind, &content, &attrs)
}

/// Prepend the stripe class from the host cycle to the row's class.
pub(crate) fn apply_stripe(
    ctx: &mut dyn TemplateContext,
    attrs: &mut Attributes,
    stripe_class: &str,
) {
    let stripe = ctx.cycle(stripe_class, None);
    let class = merge_classes([stripe.as_deref(), attrs.class()]);
    attrs.set_class(class);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vb_html::StandardContext;

    #[test]
    fn test_merge_classes() {
        assert_eq!(
            merge_classes([Some("row"), Some("wide")]),
            Some("row wide".to_owned())
        );
        assert_eq!(merge_classes([Some("row"), None]), Some("row".to_owned()));
        assert_eq!(merge_classes([Some(""), Some("wide")]), Some("wide".to_owned()));
        assert_eq!(merge_classes([Some(" "), None, Some("")]), None);
        assert_eq!(merge_classes(std::iter::empty()), None);
    }

    #[test]
    fn test_render_tag_merges_forced_class() {
        let ctx = StandardContext::default();
        let attrs = Attributes::new().with("id", "people").with_class("wide");
        let html = render_tag(&ctx, "div", "list", Html::text("x"), attrs).unwrap();
        assert_eq!(
            html.as_str(),
            r#"<div id="people" class="list wide">x</div>"#
        );
    }

    #[test]
    fn test_render_tag_omits_blank_class() {
        let ctx = StandardContext::default();
        let attrs = Attributes::new().with_class("  ");
        let html = render_tag(&ctx, "td", "", Html::text("x"), attrs).unwrap();
        assert_eq!(html.as_str(), "<td>x</td>");
    }

    #[test]
    fn test_render_tag_propagates_host_error() {
        let ctx = StandardContext::default();
        let err = render_tag(&ctx, "not a tag", "list", Html::new(), Attributes::new());
        assert_eq!(err, Err(HostError::InvalidTagName("not a tag".to_owned())));
    }
}
