//! HTML view builders for lists, record detail views, CRUD pages and forms.
//!
//! A page is rendered by a builder bound to a [`vb_html::TemplateContext`].
//! Each builder kind delegates per-node markup to a renderer (the variant),
//! so switching from a table layout to a list of `div`s is a matter of
//! changing the registry default:
//!
//! | Kind       | Renderer trait         | Variants                                   |
//! |------------|------------------------|--------------------------------------------|
//! | list       | [`ListRenderer`]       | [`BasicList`], [`CompactList`], [`TabularList`] |
//! | show       | [`ShowRenderer`]       | [`SimpleShow`], [`TabularShow`], [`ExtraShow`]  |
//! | CRUD page  | [`CrudPageRenderer`]   | [`SimpleCrudPage`]                         |
//! | form       | [`FormRenderer`]       | [`SimpleForm`]                             |
//!
//! Every content-taking operation has a literal form that returns markup and
//! a block form (`*_with`) that captures the closure's output, renders it and
//! writes it into the surrounding buffer. See [`capture`].
//!
//! # Example
//!
//! ```
//! use vb_builders::{BuilderRegistry, ListOptions, RowOptions, ViewHelpers};
//! use vb_html::{Attributes, Html, StandardContext};
//!
//! let registry = BuilderRegistry::new();
//! let helpers = ViewHelpers::new(&registry);
//! let mut ctx = StandardContext::default();
//!
//! let html = helpers
//!     .list_html_with(&mut ctx, ListOptions::new(), |list| {
//!         list.row_with(RowOptions::new().no_cycle(), |row| {
//!             row.column(Html::text("Ada"), Attributes::new())
//!         })?;
//!         Ok(Html::new())
//!     })
//!     .unwrap();
//! assert_eq!(html.as_str(), r#"<table class="list"><tr><td>Ada</td></tr></table>"#);
//! ```

mod capture;
mod composer;
mod crud_page;
mod error;
mod form;
mod helpers;
mod list;
mod registry;
mod show;
#[cfg(test)]
mod testing;

pub use capture::{BoundBuilder, capture, dispatch_block};
pub use composer::{merge_classes, render_tag};
pub use crud_page::{CrudPageBuilder, CrudPageRenderer, DEFAULT_PAGE_CLASS, SimpleCrudPage};
pub use error::{BuilderError, ConfigurationError, Result};
pub use form::{FieldOptions, FormBuilder, FormRenderer, SelectOption, SimpleForm};
pub use helpers::{
    CrudPageHtmlOptions, FormHtmlOptions, HelperOptions, ListHtmlOptions, ShowHtmlOptions,
    ViewHelpers,
};
pub use list::{
    BasicList, CompactList, ListBuilder, ListOptions, ListRenderer, RowOptions, STRIPE_CLASS,
    TabularList,
};
pub use registry::{BuilderFactory, BuilderKind, BuilderRegistry};
pub use show::{
    AttributeOptions, AttributeRow, DEFAULT_JOIN_TEXT, ExtraShow, FromUntilOptions, ShowBuilder,
    ShowOptions, ShowRenderer, SimpleShow, TabularShow,
};
