use std::sync::Arc;

use vb_config::ShowConfig;
use vb_html::{Attributes, Html, TemplateContext};
use vb_record::{Record, RecordValue, humanize};

use super::{AttributeRow, ShowRenderer};
use crate::capture::{BoundBuilder, dispatch_block};
use crate::composer::apply_stripe;
use crate::error::Result;
use crate::list::STRIPE_CLASS;

/// Default separator between the two halves of a from/until range.
pub const DEFAULT_JOIN_TEXT: &str = " / ";

/// Options for a show render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Substituted verbatim for blank attribute values.
    pub blank_text: Option<String>,
    /// Attributes of the show container.
    pub attrs: Attributes,
}

impl ShowOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults from the `[show]` configuration section.
    #[must_use]
    pub fn from_config(config: &ShowConfig) -> Self {
        Self {
            blank_text: config.blank_text.clone(),
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn blank_text(mut self, text: impl Into<String>) -> Self {
        self.blank_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }
}

impl From<Attributes> for ShowOptions {
    fn from(attrs: Attributes) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }
}

/// Options for [`ShowBuilder::attribute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeOptions {
    /// Display name, replacing the record's human attribute name.
    pub name: Option<Html>,
    /// Display value, replacing the record's property.
    pub value: Option<Html>,
    /// Named date format or strftime pattern for temporal values.
    pub date_format: Option<String>,
    /// Take part in row striping.
    pub cycle: bool,
    /// Attributes of the name element.
    pub name_attrs: Attributes,
    /// Attributes of the value element.
    pub value_attrs: Attributes,
    /// Attributes of the row element.
    pub attrs: Attributes,
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self {
            name: None,
            value: None,
            date_format: None,
            cycle: true,
            name_attrs: Attributes::new(),
            value_attrs: Attributes::new(),
            attrs: Attributes::new(),
        }
    }
}

impl AttributeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the display name. Plain strings are escaped.
    #[must_use]
    pub fn name(mut self, name: impl Into<Html>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the display value. Plain strings are escaped.
    #[must_use]
    pub fn value(mut self, value: impl Into<Html>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Exclude the row from striping.
    #[must_use]
    pub fn no_cycle(mut self) -> Self {
        self.cycle = false;
        self
    }

    #[must_use]
    pub fn name_attrs(mut self, attrs: Attributes) -> Self {
        self.name_attrs = attrs;
        self
    }

    #[must_use]
    pub fn value_attrs(mut self, attrs: Attributes) -> Self {
        self.value_attrs = attrs;
        self
    }

    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Options for [`ShowBuilder::from_until_attribute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FromUntilOptions {
    /// Row options. An explicit `value` replaces the whole range.
    pub attribute: AttributeOptions,
    /// Separator between the halves, [`DEFAULT_JOIN_TEXT`] when unset.
    pub join_text: Option<String>,
}

impl FromUntilOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn join_text(mut self, text: impl Into<String>) -> Self {
        self.join_text = Some(text.into());
        self
    }
}

impl From<AttributeOptions> for FromUntilOptions {
    fn from(attribute: AttributeOptions) -> Self {
        Self {
            attribute,
            join_text: None,
        }
    }
}

/// Drives one show render through a [`ShowRenderer`].
///
/// Names come from the record's human attribute names and values from its
/// properties, formatted by type:
///
/// - dates and date-times are localized, honoring `date_format`
/// - booleans are translated
/// - an absent `address` is synthesized from `street` and `number`
/// - a non-blank `email` becomes a `mailto:` link
/// - numbers whose key ends in `price` are formatted as currency
///
/// Blank values are replaced by the builder's blank text when one is set.
pub struct ShowBuilder<'a> {
    ctx: &'a mut dyn TemplateContext,
    record: Option<&'a dyn Record>,
    renderer: Arc<dyn ShowRenderer>,
    blank_text: Option<String>,
}

impl BoundBuilder for ShowBuilder<'_> {
    fn template(&mut self) -> &mut dyn TemplateContext {
        &mut *self.ctx
    }
}

impl<'a> ShowBuilder<'a> {
    pub fn new(
        ctx: &'a mut dyn TemplateContext,
        record: Option<&'a dyn Record>,
        renderer: Arc<dyn ShowRenderer>,
        blank_text: Option<String>,
    ) -> Self {
        Self {
            ctx,
            record,
            renderer,
            blank_text,
        }
    }

    /// The bound record.
    pub fn record(&self) -> Option<&'a dyn Record> {
        self.record
    }

    /// Render the show container around literal content.
    pub fn show(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        let dom_class = self.begin_show();
        Ok(self
            .renderer
            .render_show(&*self.ctx, dom_class.as_deref(), content, attrs)?)
    }

    /// Render the show container around the content produced by `block`.
    pub fn show_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        let dom_class = self.begin_show();
        dispatch_block(self, block, |this, content| {
            Ok(this
                .renderer
                .render_show(&*this.ctx, dom_class.as_deref(), content, attrs)?)
        })
    }

    /// Render one attribute row.
    pub fn attribute(&mut self, key: &str, options: AttributeOptions) -> Result<Html> {
        let AttributeOptions {
            name,
            value,
            date_format,
            cycle,
            name_attrs,
            value_attrs,
            mut attrs,
        } = options;

        if cycle {
            apply_stripe(&mut *self.ctx, &mut attrs, STRIPE_CLASS);
        }
        let name = name.unwrap_or_else(|| self.name_content(key));
        let value = match value {
            Some(value) => value,
            None => self.value_content(key, date_format.as_deref())?,
        };

        let row = AttributeRow {
            attribute_name: Some(key.to_owned()),
            name,
            value: self.or_blank_text(value),
            name_attrs,
            value_attrs,
            attrs,
        };
        Ok(self.renderer.render_attribute(&*self.ctx, row)?)
    }

    /// Render several attribute rows with the same options, concatenated.
    pub fn attributes(&mut self, keys: &[&str], options: &AttributeOptions) -> Result<Html> {
        keys.iter()
            .map(|key| self.attribute(key, options.clone()))
            .collect()
    }

    /// Render a row from literal name and value content.
    pub fn attribute_html(&mut self, name: Html, value: Html, attrs: Attributes) -> Result<Html> {
        let row = AttributeRow {
            name,
            value,
            attrs,
            ..AttributeRow::default()
        };
        Ok(self.renderer.render_attribute(&*self.ctx, row)?)
    }

    /// Render `<key>_from` and `<key>_until` as one row.
    ///
    /// Blank halves are dropped, so a range with one side set shows only that
    /// side and no separator.
    pub fn from_until_attribute(&mut self, key: &str, options: FromUntilOptions) -> Result<Html> {
        let FromUntilOptions {
            attribute,
            join_text,
        } = options;
        let join_text = self.ctx.escape(join_text.as_deref().unwrap_or(DEFAULT_JOIN_TEXT));

        let value = match attribute.value {
            Some(value) => value,
            None => {
                let format = attribute.date_format.as_deref();
                let halves = [
                    self.value_content(&format!("{key}_from"), format)?,
                    self.value_content(&format!("{key}_until"), format)?,
                ];
                Html::join(halves.iter().filter(|half| !half.is_blank()), &join_text)
            }
        };

        self.attribute(
            key,
            AttributeOptions {
                value: Some(value),
                ..attribute
            },
        )
    }

    /// Render several from/until rows with the same options, concatenated.
    pub fn from_until_attributes(
        &mut self,
        keys: &[&str],
        options: &FromUntilOptions,
    ) -> Result<Html> {
        keys.iter()
            .map(|key| self.from_until_attribute(key, options.clone()))
            .collect()
    }

    fn begin_show(&mut self) -> Option<String> {
        self.ctx.reset_cycle();
        self.record.map(|record| self.ctx.dom_class(record))
    }

    fn name_content(&self, key: &str) -> Html {
        let name = match self.record {
            Some(record) => record.human_attribute_name(key),
            None => humanize(key),
        };
        self.ctx.escape(&name)
    }

    /// Formatted value of a record property, before blank text substitution.
    fn value_content(&self, key: &str, date_format: Option<&str>) -> Result<Html> {
        let Some(record) = self.record else {
            return Ok(Html::new());
        };

        let ctx = &*self.ctx;
        let html = match record.property(key) {
            RecordValue::Temporal(value) => ctx.escape(&ctx.localize_date(&value, date_format)?),
            RecordValue::Boolean(flag) => ctx.escape(&ctx.translate_boolean(flag)?),
            RecordValue::Absent if key == "address" => self.synthesized_address(record),
            RecordValue::Absent => Html::new(),
            RecordValue::Text(text) if key == "email" && !text.trim().is_empty() => {
                ctx.link_to(&ctx.escape(&text), &format!("mailto:{text}"))?
            }
            RecordValue::Text(text) if self.renderer.converts_line_breaks() => {
                self.line_breaks(&text)
            }
            RecordValue::Text(text) | RecordValue::Other(text) => ctx.escape(&text),
            RecordValue::Number(amount) if key.ends_with("price") => {
                ctx.escape(&ctx.format_currency(amount.as_f64())?)
            }
            RecordValue::Number(number) => ctx.escape(&number.to_string()),
        };
        Ok(html)
    }

    /// `"{street} {number}"` when the record has both properties.
    fn synthesized_address(&self, record: &dyn Record) -> Html {
        if !(record.has_property("street") && record.has_property("number")) {
            return Html::new();
        }
        let part = |name: &str| record.property(name).to_plain_string().unwrap_or_default();
        self.ctx.escape(&format!("{} {}", part("street"), part("number")))
    }

    /// Escape text and turn each line ending into `<br/>`.
    fn line_breaks(&self, text: &str) -> Html {
        let normalized = text.replace("\r\n", "\n").replace("\n\r", "\n");
        Html::raw(self.ctx.escape(&normalized).as_str().replace('\n', "<br/>"))
    }

    fn or_blank_text(&self, value: Html) -> Html {
        match self.blank_text.as_deref() {
            Some(blank_text) if value.is_blank() && !blank_text.trim().is_empty() => {
                Html::raw(blank_text)
            }
            _ => value,
        }
    }
}
