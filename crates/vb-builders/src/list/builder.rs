use std::sync::Arc;

use vb_html::{Attributes, Html, TemplateContext};

use super::ListRenderer;
use crate::capture::{BoundBuilder, dispatch_block};
use crate::composer::apply_stripe;
use crate::error::Result;

/// Class added to every other row.
pub const STRIPE_CLASS: &str = "odd";

/// Options for [`ListBuilder::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Class per column position, applied to columns without their own class.
    pub column_classes: Vec<String>,
    /// Attributes of the list container.
    pub attrs: Attributes,
}

impl ListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-column classes.
    #[must_use]
    pub fn column_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the container attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }
}

impl From<Attributes> for ListOptions {
    fn from(attrs: Attributes) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }
}

/// Options for [`ListBuilder::row`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOptions {
    /// Take part in striping. A row with `cycle: false` does not advance the
    /// stripe sequence.
    pub cycle: bool,
    /// Row attributes.
    pub attrs: Attributes,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            cycle: true,
            attrs: Attributes::new(),
        }
    }
}

impl RowOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude the row from striping.
    #[must_use]
    pub fn no_cycle(mut self) -> Self {
        self.cycle = false;
        self
    }

    /// Set the row attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }
}

impl From<Attributes> for RowOptions {
    fn from(attrs: Attributes) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }
}

/// Drives one list render through a [`ListRenderer`].
///
/// Tracks the column position within the current row so configured column
/// classes can be assigned, and advances the host cycle for row striping.
pub struct ListBuilder<'a> {
    ctx: &'a mut dyn TemplateContext,
    renderer: Arc<dyn ListRenderer>,
    column_classes: Vec<String>,
    current_column: Option<usize>,
}

impl BoundBuilder for ListBuilder<'_> {
    fn template(&mut self) -> &mut dyn TemplateContext {
        &mut *self.ctx
    }
}

impl<'a> ListBuilder<'a> {
    pub fn new(ctx: &'a mut dyn TemplateContext, renderer: Arc<dyn ListRenderer>) -> Self {
        Self {
            ctx,
            renderer,
            column_classes: Vec::new(),
            current_column: None,
        }
    }

    /// Render a list around literal content.
    pub fn list(&mut self, content: Html, options: ListOptions) -> Result<Html> {
        let attrs = self.begin_list(options);
        Ok(self.renderer.render_list(&*self.ctx, content, attrs)?)
    }

    /// Render a list around the content produced by `block`.
    pub fn list_with<F>(&mut self, options: ListOptions, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        let attrs = self.begin_list(options);
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_list(&*this.ctx, content, attrs)?)
        })
    }

    /// Render a header row around literal content.
    pub fn header_row(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        self.current_column = None;
        Ok(self.renderer.render_header_row(&*self.ctx, content, attrs)?)
    }

    /// Render a header row around the content produced by `block`.
    pub fn header_row_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        self.current_column = None;
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_header_row(&*this.ctx, content, attrs)?)
        })
    }

    /// Render a row around literal content.
    pub fn row(&mut self, content: Html, options: RowOptions) -> Result<Html> {
        let attrs = self.begin_row(options);
        Ok(self.renderer.render_row(&*self.ctx, content, attrs)?)
    }

    /// Render a row around the content produced by `block`.
    pub fn row_with<F>(&mut self, options: RowOptions, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        let attrs = self.begin_row(options);
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_row(&*this.ctx, content, attrs)?)
        })
    }

    /// Render a header cell around literal content.
    pub fn header_column(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        let attrs = self.next_column(attrs);
        Ok(self.renderer.render_header_column(&*self.ctx, content, attrs)?)
    }

    /// Render a header cell around the content produced by `block`.
    pub fn header_column_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        let attrs = self.next_column(attrs);
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_header_column(&*this.ctx, content, attrs)?)
        })
    }

    /// Render a cell around literal content.
    pub fn column(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        let attrs = self.next_column(attrs);
        Ok(self.renderer.render_column(&*self.ctx, content, attrs)?)
    }

    /// Render a cell around the content produced by `block`.
    pub fn column_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        let attrs = self.next_column(attrs);
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_column(&*this.ctx, content, attrs)?)
        })
    }

    fn begin_list(&mut self, options: ListOptions) -> Attributes {
        self.column_classes = options.column_classes;
        self.current_column = None;
        self.ctx.reset_cycle();
        options.attrs
    }

    fn begin_row(&mut self, options: RowOptions) -> Attributes {
        self.current_column = None;
        let mut attrs = options.attrs;
        if options.cycle {
            apply_stripe(&mut *self.ctx, &mut attrs, STRIPE_CLASS);
        }
        attrs
    }

    fn next_column(&mut self, mut attrs: Attributes) -> Attributes {
        if self.column_classes.is_empty() {
            return attrs;
        }

        let index = self.current_column.map_or(0, |column| column + 1);
        self.current_column = Some(index);

        if attrs.class().is_none() {
            match self.column_classes.get(index) {
                Some(class) => attrs.set("class", class.as_str()),
                None => tracing::warn!(
                    column = index,
                    configured = self.column_classes.len(),
                    "Column has no configured class"
                ),
            }
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{BasicList, CompactList, TabularList};
    use pretty_assertions::assert_eq;
    use vb_html::StandardContext;

    fn row_classes(builder: &mut ListBuilder<'_>, rows: &[RowOptions]) -> Vec<String> {
        rows.iter()
            .map(|options| {
                builder
                    .row(Html::new(), options.clone())
                    .unwrap()
                    .into_string()
            })
            .collect()
    }

    #[test]
    fn test_rows_alternate_stripe_starting_with_stripe() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(BasicList));
        builder.list(Html::new(), ListOptions::new()).unwrap();

        let rows = vec![RowOptions::new(); 4];
        assert_eq!(
            row_classes(&mut builder, &rows),
            vec![
                r#"<div class="row odd"></div>"#,
                r#"<div class="row"></div>"#,
                r#"<div class="row odd"></div>"#,
                r#"<div class="row"></div>"#,
            ]
        );
    }

    #[test]
    fn test_row_without_cycle_does_not_consume_stripe() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(BasicList));

        let rows = [
            RowOptions::new(),
            RowOptions::new().no_cycle(),
            RowOptions::new(),
            RowOptions::new(),
        ];
        assert_eq!(
            row_classes(&mut builder, &rows),
            vec![
                r#"<div class="row odd"></div>"#,
                r#"<div class="row"></div>"#,
                r#"<div class="row"></div>"#,
                r#"<div class="row odd"></div>"#,
            ]
        );
    }

    #[test]
    fn test_row_merges_stripe_with_caller_class() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(CompactList));
        let html = builder
            .row(
                Html::text("a"),
                RowOptions::from(Attributes::new().with_class("selected")),
            )
            .unwrap();
        assert_eq!(html.as_str(), r#"<li class="row odd selected">a</li>"#);
    }

    #[test]
    fn test_list_resets_cycle() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(TabularList));
        builder.row(Html::new(), RowOptions::new()).unwrap();
        builder.list(Html::new(), ListOptions::new()).unwrap();
        let html = builder.row(Html::new(), RowOptions::new()).unwrap();
        assert_eq!(html.as_str(), r#"<tr class="odd"></tr>"#);
    }

    #[test]
    fn test_column_classes_assigned_by_position() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(TabularList));
        builder
            .list(
                Html::new(),
                ListOptions::new().column_classes(["name", "email", "age"]),
            )
            .unwrap();

        builder.row(Html::new(), RowOptions::new()).unwrap();
        let cells: Vec<String> = [
            Attributes::new(),
            Attributes::new().with_class("highlight"),
            Attributes::new(),
        ]
        .into_iter()
        .map(|attrs| builder.column(Html::new(), attrs).unwrap().into_string())
        .collect();
        assert_eq!(
            cells,
            vec![
                r#"<td class="name"></td>"#,
                r#"<td class="highlight"></td>"#,
                r#"<td class="age"></td>"#,
            ]
        );

        builder.row(Html::new(), RowOptions::new()).unwrap();
        let first = builder.column(Html::new(), Attributes::new()).unwrap();
        assert_eq!(first.as_str(), r#"<td class="name"></td>"#);
    }

    #[test]
    fn test_header_columns_share_position_tracking() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(BasicList));
        builder
            .list(Html::new(), ListOptions::new().column_classes(["first", "second"]))
            .unwrap();
        builder.header_row(Html::new(), Attributes::new()).unwrap();
        let first = builder.header_column(Html::new(), Attributes::new()).unwrap();
        let second = builder.header_column(Html::new(), Attributes::new()).unwrap();
        assert_eq!(first.as_str(), r#"<div class="header_column first"></div>"#);
        assert_eq!(second.as_str(), r#"<div class="header_column second"></div>"#);
    }

    #[test]
    fn test_columns_past_configured_classes_pass_through() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(BasicList));
        builder
            .list(Html::new(), ListOptions::new().column_classes(["only"]))
            .unwrap();
        builder.column(Html::new(), Attributes::new()).unwrap();
        let extra = builder.column(Html::new(), Attributes::new()).unwrap();
        assert_eq!(extra.as_str(), r#"<div class="column"></div>"#);
    }

    #[test]
    fn test_without_column_classes_columns_pass_through() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(BasicList));
        let html = builder
            .column(Html::text("x"), Attributes::new().with("title", "t"))
            .unwrap();
        assert_eq!(html.as_str(), r#"<div title="t" class="column">x</div>"#);
    }

    #[test]
    fn test_block_form_nests_in_document_order() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(TabularList));
        let html = builder
            .list_with(ListOptions::new(), |list| {
                list.header_row_with(Attributes::new(), |row| {
                    row.header_column(Html::text("Name"), Attributes::new())
                })?;
                for name in ["Ada", "Grace"] {
                    list.row_with(RowOptions::new(), |row| {
                        row.column_with(Attributes::new(), |_| Ok(Html::text(name)))
                    })?;
                }
                Ok(Html::new())
            })
            .unwrap();

        let expected = concat!(
            r#"<table class="list">"#,
            "<thead><tr><th>Name</th></tr></thead>",
            r#"<tr class="odd"><td>Ada</td></tr>"#,
            "<tr><td>Grace</td></tr>",
            "</table>"
        );
        assert_eq!(html.as_str(), expected);
        assert_eq!(ctx.output().as_str(), expected);
    }

    #[test]
    fn test_literal_form_does_not_emit() {
        let mut ctx = StandardContext::default();
        let mut builder = ListBuilder::new(&mut ctx, Arc::new(BasicList));
        let html = builder.list(Html::text("x"), ListOptions::new()).unwrap();
        assert_eq!(html.as_str(), r#"<div class="list">x</div>"#);
        assert!(ctx.output().is_empty());
    }
}
