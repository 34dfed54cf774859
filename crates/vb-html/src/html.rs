//! Rendered markup values.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A fragment of markup that is safe to place in the output as is.
///
/// Plain strings become `Html` through [`Html::text`] (or `From<&str>`),
/// which escapes them. Already rendered markup is wrapped with [`Html::raw`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    /// Empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap markup that is already safe.
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Escape plain text.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Borrow the markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the fragment has no characters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the fragment is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Append another fragment.
    pub fn push(&mut self, other: &Html) {
        self.0.push_str(&other.0);
    }

    /// Join fragments with a separator.
    #[must_use]
    pub fn join<'a>(parts: impl IntoIterator<Item = &'a Html>, separator: &Html) -> Self {
        let mut out = Self::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push(part);
        }
        out
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Html {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Html {
    fn from(text: String) -> Self {
        Self::text(&text)
    }
}

impl Add for Html {
    type Output = Html;

    fn add(mut self, rhs: Html) -> Html {
        self.0.push_str(&rhs.0);
        self
    }
}

impl AddAssign for Html {
    fn add_assign(&mut self, rhs: Html) {
        self.0.push_str(&rhs.0);
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut out = Self::new();
        for part in iter {
            out += part;
        }
        out
    }
}

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
