//! Markup primitives and the template context for view builders.
//!
//! Builders never serialize markup themselves. They call into a host
//! template environment through the [`TemplateContext`] trait, which covers:
//!
//! - element construction ([`content_tag`](TemplateContext::content_tag),
//!   [`tag`](TemplateContext::tag)) and escaping
//! - the output buffer stack used to capture nested content
//! - the row cycle used for striping
//! - localization: dates, booleans, currency, links
//!
//! [`StandardContext`] is the reference implementation, configured from a
//! [`vb_config::LocaleConfig`].
//!
//! # Example
//!
//! ```
//! use vb_html::{Attributes, Html, StandardContext, TemplateContext};
//!
//! let ctx = StandardContext::default();
//! let attrs = Attributes::new().with_class("note");
//! let html = ctx.content_tag("p", &Html::text("a < b"), &attrs).unwrap();
//! assert_eq!(html.as_str(), r#"<p class="note">a &lt; b</p>"#);
//! ```

mod attributes;
mod context;
mod html;
mod number;
mod standard;

pub use attributes::Attributes;
pub use context::{HostError, TemplateContext};
pub use html::{Html, escape_html};
pub use number::format_currency;
pub use standard::StandardContext;
