//! Reference template context.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use vb_config::LocaleConfig;
use vb_record::Temporal;

use crate::attributes::Attributes;
use crate::context::{HostError, TemplateContext};
use crate::html::{Html, escape_html};
use crate::number;

/// Reference [`TemplateContext`] serializing HTML5 markup.
///
/// - element names must be ASCII alphanumeric (dashes allowed after the first
///   character); attribute values are escaped
/// - the bottom of the buffer stack is the page output, see
///   [`output`](Self::output) and [`take_output`](Self::take_output)
/// - dates, booleans and currency follow the [`LocaleConfig`]
#[derive(Debug)]
pub struct StandardContext {
    locale: LocaleConfig,
    /// Output buffer stack; index 0 is the page output and is never popped.
    buffers: Vec<Html>,
    cycle_position: usize,
}

impl Default for StandardContext {
    fn default() -> Self {
        Self::new(LocaleConfig::default())
    }
}

impl StandardContext {
    /// Create a context for one render.
    #[must_use]
    pub fn new(locale: LocaleConfig) -> Self {
        Self {
            locale,
            buffers: vec![Html::new()],
            cycle_position: 0,
        }
    }

    /// Locale settings in use.
    #[must_use]
    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Page output emitted so far.
    #[must_use]
    pub fn output(&self) -> &Html {
        &self.buffers[0]
    }

    /// Take the page output, leaving it empty.
    pub fn take_output(&mut self) -> Html {
        std::mem::take(&mut self.buffers[0])
    }

    fn open_tag(name: &str, attrs: &Attributes) -> Result<String, HostError> {
        if !is_valid_tag_name(name) {
            return Err(HostError::InvalidTagName(name.to_owned()));
        }

        let mut out = String::with_capacity(name.len() + 2 + attrs.len() * 16);
        out.push('<');
        out.push_str(name);
        for (attr, value) in attrs.iter() {
            if !is_valid_attribute_name(attr) {
                return Err(HostError::InvalidAttributeName {
                    tag: name.to_owned(),
                    name: attr.to_owned(),
                });
            }
            let _ = write!(out, r#" {attr}="{}""#, escape_html(value));
        }
        out.push('>');
        Ok(out)
    }

    fn resolve_date_pattern<'a>(
        &'a self,
        value: &Temporal,
        format: &'a str,
    ) -> Result<&'a str, HostError> {
        let named = match value {
            Temporal::Date(_) => self.locale.date_format(format),
            Temporal::DateTime(_) => self.locale.time_format(format),
        };
        match named {
            Some(pattern) => Ok(pattern),
            None if format.contains('%') => Ok(format),
            None => Err(HostError::UnknownDateFormat {
                name: format.to_owned(),
            }),
        }
    }
}

impl TemplateContext for StandardContext {
    fn content_tag(
        &self,
        name: &str,
        content: &Html,
        attrs: &Attributes,
    ) -> Result<Html, HostError> {
        let mut out = Self::open_tag(name, attrs)?;
        out.push_str(content.as_str());
        let _ = write!(out, "</{name}>");
        Ok(Html::raw(out))
    }

    fn tag(&self, name: &str, attrs: &Attributes) -> Result<Html, HostError> {
        Self::open_tag(name, attrs).map(Html::raw)
    }

    fn push_buffer(&mut self) {
        self.buffers.push(Html::new());
    }

    fn pop_buffer(&mut self) -> Html {
        if self.buffers.len() > 1 {
            self.buffers.pop().unwrap_or_default()
        } else {
            tracing::warn!("Output buffer popped without a matching push");
            Html::new()
        }
    }

    fn emit(&mut self, content: Html) {
        if let Some(buffer) = self.buffers.last_mut() {
            *buffer += content;
        }
    }

    fn cycle(&mut self, on: &str, off: Option<&str>) -> Option<String> {
        let value = if self.cycle_position % 2 == 0 {
            Some(on.to_owned())
        } else {
            off.map(str::to_owned)
        };
        self.cycle_position += 1;
        value
    }

    fn reset_cycle(&mut self) {
        self.cycle_position = 0;
    }

    fn localize_date(&self, value: &Temporal, format: Option<&str>) -> Result<String, HostError> {
        let pattern = self.resolve_date_pattern(value, format.unwrap_or("default"))?;
        let invalid = || HostError::InvalidDateFormat {
            pattern: pattern.to_owned(),
        };

        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }

        // Time specifiers on a plain date fail at write time, not at parse time.
        let mut out = String::new();
        let written = match value {
            Temporal::Date(date) => write!(out, "{}", date.format_with_items(items.iter())),
            Temporal::DateTime(datetime) => {
                write!(out, "{}", datetime.format_with_items(items.iter()))
            }
        };
        written.map_err(|_| invalid())?;
        Ok(out)
    }

    fn translate_boolean(&self, value: bool) -> Result<String, HostError> {
        let key = value.to_string();
        match self.locale.translation(&key) {
            Some(label) => Ok(label.to_owned()),
            None => Err(HostError::MissingTranslation { key }),
        }
    }

    fn format_currency(&self, amount: f64) -> Result<String, HostError> {
        number::format_currency(amount, &self.locale)
    }
}

fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}
