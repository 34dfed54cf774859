use std::sync::Arc;

use vb_html::{Attributes, Html, TemplateContext};
use vb_record::{ColumnType, Record};

use super::FormRenderer;
use crate::capture::{BoundBuilder, dispatch_block};
use crate::error::Result;

/// One choice of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Displayed text.
    pub label: String,
    /// Submitted value.
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(text: &str) -> Self {
        Self::new(text, text)
    }
}

impl From<(&str, &str)> for SelectOption {
    fn from((label, value): (&str, &str)) -> Self {
        Self::new(label, value)
    }
}

/// Options for [`FormBuilder::field`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Label content, replacing the generated `<label>`.
    pub label: Option<Html>,
    /// Attributes of the generated `<label>`.
    pub label_attrs: Attributes,
    /// Input content, replacing widget inference.
    pub input: Option<Html>,
    /// Choices; when set the input is a select.
    pub select: Option<Vec<SelectOption>>,
    /// Attributes of the generated input widget.
    pub input_attrs: Attributes,
}

impl FieldOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label. Plain strings are escaped.
    #[must_use]
    pub fn label(mut self, label: impl Into<Html>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn label_attrs(mut self, attrs: Attributes) -> Self {
        self.label_attrs = attrs;
        self
    }

    /// Override the input widget.
    #[must_use]
    pub fn input(mut self, input: Html) -> Self {
        self.input = Some(input);
        self
    }

    /// Render the input as a select over `choices`.
    #[must_use]
    pub fn select<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SelectOption>,
    {
        self.select = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn input_attrs(mut self, attrs: Attributes) -> Self {
        self.input_attrs = attrs;
        self
    }
}

/// Renders labelled inputs for one record through a [`FormRenderer`].
///
/// Inputs are named `object[attribute]` and identified `object_attribute`.
/// Without an explicit input the widget is inferred:
///
/// 1. a select when choices are given
/// 2. a password input for attributes starting with `password`
/// 3. a text input for string and text columns, or when the record declares
///    no column type
/// 4. nothing otherwise
pub struct FormBuilder<'a> {
    ctx: &'a mut dyn TemplateContext,
    object_name: String,
    record: &'a dyn Record,
    renderer: Arc<dyn FormRenderer>,
}

impl BoundBuilder for FormBuilder<'_> {
    fn template(&mut self) -> &mut dyn TemplateContext {
        &mut *self.ctx
    }
}

impl<'a> FormBuilder<'a> {
    pub fn new(
        ctx: &'a mut dyn TemplateContext,
        object_name: impl Into<String>,
        record: &'a dyn Record,
        renderer: Arc<dyn FormRenderer>,
    ) -> Self {
        Self {
            ctx,
            object_name: object_name.into(),
            record,
            renderer,
        }
    }

    /// Render a labelled input for `attr`.
    pub fn field(&mut self, attr: &str, options: FieldOptions) -> Result<Html> {
        let FieldOptions {
            label,
            label_attrs,
            input,
            select,
            input_attrs,
        } = options;

        let label = match label {
            Some(label) => label,
            None => self.label_for(attr, label_attrs)?,
        };
        let input = match input {
            Some(input) => input,
            None => self.infer_input(attr, select.as_deref(), input_attrs)?,
        };

        let ctx = &*self.ctx;
        let content = self.renderer.render_field_label(ctx, label, Attributes::new())?
            + self.renderer.render_field_input(ctx, input, Attributes::new())?;
        Ok(self
            .renderer
            .render_field(ctx, Some(attr), content, Attributes::new())?)
    }

    /// Render several fields with the same options, concatenated.
    pub fn fields(&mut self, attrs: &[&str], options: &FieldOptions) -> Result<Html> {
        attrs
            .iter()
            .map(|attr| self.field(attr, options.clone()))
            .collect()
    }

    /// Render a field wrapper around literal content.
    pub fn field_html(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_field(&*self.ctx, None, content, attrs)?)
    }

    /// Render a field wrapper around the content produced by `block`.
    pub fn field_html_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_field(&*this.ctx, None, content, attrs)?)
        })
    }

    /// Render a label area around literal content.
    pub fn label_html(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_field_label(&*self.ctx, content, attrs)?)
    }

    /// Render a label area around the content produced by `block`.
    pub fn label_html_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_field_label(&*this.ctx, content, attrs)?)
        })
    }

    /// Render an input area around literal content.
    pub fn input_html(&mut self, content: Html, attrs: Attributes) -> Result<Html> {
        Ok(self.renderer.render_field_input(&*self.ctx, content, attrs)?)
    }

    /// Render an input area around the content produced by `block`.
    pub fn input_html_with<F>(&mut self, attrs: Attributes, block: F) -> Result<Html>
    where
        F: FnOnce(&mut Self) -> Result<Html>,
    {
        dispatch_block(self, block, |this, content| {
            Ok(this.renderer.render_field_input(&*this.ctx, content, attrs)?)
        })
    }

    /// `<label>` for `attr` with the record's human attribute name.
    pub fn label_for(&self, attr: &str, attrs: Attributes) -> Result<Html> {
        let mut label_attrs = Attributes::new().with("for", self.input_id(attr));
        label_attrs.merge(attrs);
        let text = self.ctx.escape(&self.record.human_attribute_name(attr));
        Ok(self.ctx.content_tag("label", &text, &label_attrs)?)
    }

    /// Text input pre-filled with the current value.
    pub fn text_field(&self, attr: &str, attrs: Attributes) -> Result<Html> {
        let mut input_attrs = self.input_attrs("text", attr);
        if let Some(value) = self.record.property(attr).to_plain_string() {
            input_attrs.set("value", value);
        }
        input_attrs.merge(attrs);
        Ok(self.ctx.tag("input", &input_attrs)?)
    }

    /// Password input. The current value is never rendered.
    pub fn password_field(&self, attr: &str, attrs: Attributes) -> Result<Html> {
        let mut input_attrs = self.input_attrs("password", attr);
        input_attrs.merge(attrs);
        Ok(self.ctx.tag("input", &input_attrs)?)
    }

    /// Select over `choices` with the current value selected.
    pub fn select(&self, attr: &str, choices: &[SelectOption], attrs: Attributes) -> Result<Html> {
        let current = self.record.property(attr).to_plain_string();
        let options = choices
            .iter()
            .map(|choice| {
                let mut option_attrs = Attributes::new().with("value", choice.value.as_str());
                if current.as_deref() == Some(choice.value.as_str()) {
                    option_attrs.set("selected", "selected");
                }
                self.ctx
                    .content_tag("option", &self.ctx.escape(&choice.label), &option_attrs)
            })
            .collect::<Result<Html, _>>()?;

        let mut select_attrs = Attributes::new()
            .with("id", self.input_id(attr))
            .with("name", self.input_name(attr));
        select_attrs.merge(attrs);
        Ok(self.ctx.content_tag("select", &options, &select_attrs)?)
    }

    fn infer_input(
        &self,
        attr: &str,
        select: Option<&[SelectOption]>,
        attrs: Attributes,
    ) -> Result<Html> {
        if let Some(choices) = select {
            return self.select(attr, choices, attrs);
        }
        if attr.starts_with("password") {
            return self.password_field(attr, attrs);
        }

        let column = self.record.column_type(attr).unwrap_or(ColumnType::String);
        if column.is_text_like() {
            self.text_field(attr, attrs)
        } else {
            Ok(Html::new())
        }
    }

    fn input_attrs(&self, input_type: &str, attr: &str) -> Attributes {
        Attributes::new()
            .with("type", input_type)
            .with("id", self.input_id(attr))
            .with("name", self.input_name(attr))
    }

    fn input_id(&self, attr: &str) -> String {
        format!("{}_{attr}", sanitized_object_name(&self.object_name))
    }

    fn input_name(&self, attr: &str) -> String {
        format!("{}[{attr}]", self.object_name)
    }
}

/// Object name usable as an element id: `user[address]` becomes `user_address`.
fn sanitized_object_name(name: &str) -> String {
    let mut id: String = name
        .replace("][", "_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if id.ends_with('_') {
        id.pop();
    }
    id
}
