//! Default builder selection.
//!
//! The registry holds the current default renderer for each [`BuilderKind`]
//! and a catalog of named renderers that configuration can select from. Slots
//! are read on every helper call, so a change is visible to the next render.
//! Defaults are global to the registry: changing one while renders are in
//! flight on other threads affects them too.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use vb_config::BuildersConfig;

use crate::crud_page::{CrudPageRenderer, SimpleCrudPage};
use crate::error::ConfigurationError;
use crate::form::{FormRenderer, SimpleForm};
use crate::list::{BasicList, CompactList, ListRenderer, TabularList};
use crate::show::{ExtraShow, ShowRenderer, SimpleShow, TabularShow};

/// Output kind a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuilderKind {
    /// Collections: `list_html`.
    List,
    /// Single record detail: `show_for`, `show_html`.
    Show,
    /// Page shell: `crud_page_html`.
    CrudPage,
    /// Form fields: `form_fields_for`.
    Form,
}

impl BuilderKind {
    /// All kinds, in slot order.
    pub const ALL: [Self; 4] = [Self::List, Self::Show, Self::CrudPage, Self::Form];

    /// Configuration name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Show => "show",
            Self::CrudPage => "crud_page",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuilderKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownKind(s.to_owned()))
    }
}

/// A renderer for one builder kind.
#[derive(Clone)]
pub enum BuilderFactory {
    /// List renderer.
    List(Arc<dyn ListRenderer>),
    /// Show renderer.
    Show(Arc<dyn ShowRenderer>),
    /// CRUD page renderer.
    CrudPage(Arc<dyn CrudPageRenderer>),
    /// Form renderer.
    Form(Arc<dyn FormRenderer>),
}

impl BuilderFactory {
    /// Wrap a list renderer.
    pub fn list(renderer: impl ListRenderer + 'static) -> Self {
        Self::List(Arc::new(renderer))
    }

    /// Wrap a show renderer.
    pub fn show(renderer: impl ShowRenderer + 'static) -> Self {
        Self::Show(Arc::new(renderer))
    }

    /// Wrap a CRUD page renderer.
    pub fn crud_page(renderer: impl CrudPageRenderer + 'static) -> Self {
        Self::CrudPage(Arc::new(renderer))
    }

    /// Wrap a form renderer.
    pub fn form(renderer: impl FormRenderer + 'static) -> Self {
        Self::Form(Arc::new(renderer))
    }

    /// Kind of the wrapped renderer.
    #[must_use]
    pub fn kind(&self) -> BuilderKind {
        match self {
            Self::List(_) => BuilderKind::List,
            Self::Show(_) => BuilderKind::Show,
            Self::CrudPage(_) => BuilderKind::CrudPage,
            Self::Form(_) => BuilderKind::Form,
        }
    }

    /// Name reported by the wrapped renderer.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::List(renderer) => renderer.name(),
            Self::Show(renderer) => renderer.name(),
            Self::CrudPage(renderer) => renderer.name(),
            Self::Form(renderer) => renderer.name(),
        }
    }
}

impl fmt::Debug for BuilderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderFactory")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

/// Default renderer per builder kind plus the named catalog.
pub struct BuilderRegistry {
    list: RwLock<Arc<dyn ListRenderer>>,
    show: RwLock<Arc<dyn ShowRenderer>>,
    crud_page: RwLock<Arc<dyn CrudPageRenderer>>,
    form: RwLock<Arc<dyn FormRenderer>>,
    catalog: RwLock<HashMap<(BuilderKind, String), BuilderFactory>>,
}

static GLOBAL: LazyLock<BuilderRegistry> = LazyLock::new(BuilderRegistry::new);

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("list", &self.get_default(BuilderKind::List).name())
            .field("show", &self.get_default(BuilderKind::Show).name())
            .field("crud_page", &self.get_default(BuilderKind::CrudPage).name())
            .field("form", &self.get_default(BuilderKind::Form).name())
            .finish_non_exhaustive()
    }
}

impl BuilderRegistry {
    /// Registry with the built-in catalog and defaults: tabular list,
    /// tabular show, simple CRUD page, simple form.
    #[must_use]
    pub fn new() -> Self {
        let registry = Self {
            list: RwLock::new(Arc::new(TabularList)),
            show: RwLock::new(Arc::new(TabularShow)),
            crud_page: RwLock::new(Arc::new(SimpleCrudPage)),
            form: RwLock::new(Arc::new(SimpleForm)),
            catalog: RwLock::new(HashMap::new()),
        };

        for factory in [
            BuilderFactory::list(BasicList),
            BuilderFactory::list(CompactList),
            BuilderFactory::list(TabularList),
            BuilderFactory::show(SimpleShow),
            BuilderFactory::show(TabularShow),
            BuilderFactory::show(ExtraShow),
            BuilderFactory::crud_page(SimpleCrudPage),
            BuilderFactory::form(SimpleForm),
        ] {
            let name = factory.name().to_owned();
            registry.register_named(name, factory);
        }

        registry
    }

    /// Registry with defaults selected by configuration.
    pub fn from_config(config: &BuildersConfig) -> Result<Self, ConfigurationError> {
        let registry = Self::new();
        registry.apply_config(config)?;
        Ok(registry)
    }

    /// The process-wide registry used by [`ViewHelpers::global`](crate::ViewHelpers::global).
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Current default list renderer.
    pub fn default_list(&self) -> Arc<dyn ListRenderer> {
        Arc::clone(&self.list.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Current default show renderer.
    pub fn default_show(&self) -> Arc<dyn ShowRenderer> {
        Arc::clone(&self.show.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Current default CRUD page renderer.
    pub fn default_crud_page(&self) -> Arc<dyn CrudPageRenderer> {
        Arc::clone(&self.crud_page.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Current default form renderer.
    pub fn default_form(&self) -> Arc<dyn FormRenderer> {
        Arc::clone(&self.form.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Current default for a kind.
    pub fn get_default(&self, kind: BuilderKind) -> BuilderFactory {
        match kind {
            BuilderKind::List => BuilderFactory::List(self.default_list()),
            BuilderKind::Show => BuilderFactory::Show(self.default_show()),
            BuilderKind::CrudPage => BuilderFactory::CrudPage(self.default_crud_page()),
            BuilderKind::Form => BuilderFactory::Form(self.default_form()),
        }
    }

    /// Replace the default for the factory's kind.
    pub fn set_default(&self, factory: BuilderFactory) {
        tracing::info!(kind = %factory.kind(), builder = factory.name(), "Default builder changed");
        match factory {
            BuilderFactory::List(renderer) => {
                *self.list.write().unwrap_or_else(PoisonError::into_inner) = renderer;
            }
            BuilderFactory::Show(renderer) => {
                *self.show.write().unwrap_or_else(PoisonError::into_inner) = renderer;
            }
            BuilderFactory::CrudPage(renderer) => {
                *self.crud_page.write().unwrap_or_else(PoisonError::into_inner) = renderer;
            }
            BuilderFactory::Form(renderer) => {
                *self.form.write().unwrap_or_else(PoisonError::into_inner) = renderer;
            }
        }
    }

    /// Replace the default for `kind`, rejecting a factory of another kind.
    pub fn set_default_for(
        &self,
        kind: BuilderKind,
        factory: BuilderFactory,
    ) -> Result<(), ConfigurationError> {
        if factory.kind() != kind {
            return Err(ConfigurationError::KindMismatch {
                expected: kind,
                found: factory.kind(),
            });
        }
        self.set_default(factory);
        Ok(())
    }

    /// Add a renderer to the catalog, replacing any previous entry with the
    /// same kind and name.
    pub fn register_named(&self, name: impl Into<String>, factory: BuilderFactory) {
        let name = name.into();
        tracing::debug!(kind = %factory.kind(), name = %name, "Registered builder");
        self.catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((factory.kind(), name), factory);
    }

    /// Look up a catalog entry.
    pub fn resolve_named(
        &self,
        kind: BuilderKind,
        name: &str,
    ) -> Result<BuilderFactory, ConfigurationError> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(kind, name.to_owned()))
            .cloned()
            .ok_or_else(|| ConfigurationError::UnknownBuilder {
                kind,
                name: name.to_owned(),
            })
    }

    /// Names registered for a kind, sorted.
    pub fn names(&self, kind: BuilderKind) -> Vec<String> {
        let mut names: Vec<String> = self
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .filter(|(entry_kind, _)| *entry_kind == kind)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Make the catalog entry `name` the default for `kind`.
    pub fn set_default_named(&self, kind: BuilderKind, name: &str) -> Result<(), ConfigurationError> {
        let factory = self.resolve_named(kind, name)?;
        self.set_default(factory);
        Ok(())
    }

    /// Select every default from configuration.
    ///
    /// All names are resolved before any default changes, so an unknown name
    /// leaves the registry untouched.
    pub fn apply_config(&self, config: &BuildersConfig) -> Result<(), ConfigurationError> {
        let factories = [
            (BuilderKind::List, config.list.as_str()),
            (BuilderKind::Show, config.show.as_str()),
            (BuilderKind::CrudPage, config.crud_page.as_str()),
            (BuilderKind::Form, config.form.as_str()),
        ]
        .into_iter()
        .map(|(kind, name)| self.resolve_named(kind, name))
        .collect::<Result<Vec<_>, _>>()?;

        for factory in factories {
            self.set_default(factory);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_kind_round_trips_names() {
        for kind in BuilderKind::ALL {
            assert_eq!(kind.as_str().parse::<BuilderKind>().unwrap(), kind);
        }
        assert_eq!(BuilderKind::CrudPage.to_string(), "crud_page");
        assert_eq!(
            "page".parse::<BuilderKind>(),
            Err(ConfigurationError::UnknownKind("page".to_owned()))
        );
    }

    #[test]
    fn test_initial_defaults() {
        let registry = BuilderRegistry::new();
        assert_eq!(registry.default_list().name(), "tabular");
        assert_eq!(registry.default_show().name(), "tabular");
        assert_eq!(registry.default_crud_page().name(), "simple");
        assert_eq!(registry.default_form().name(), "simple");
    }

    #[test]
    fn test_builtin_catalog() {
        let registry = BuilderRegistry::new();
        assert_eq!(
            registry.names(BuilderKind::List),
            vec!["basic", "compact", "tabular"]
        );
        assert_eq!(
            registry.names(BuilderKind::Show),
            vec!["extra", "simple", "tabular"]
        );
        assert_eq!(registry.names(BuilderKind::CrudPage), vec!["simple"]);
        assert_eq!(registry.names(BuilderKind::Form), vec!["simple"]);
    }

    #[test]
    fn test_set_default_last_write_wins() {
        let registry = BuilderRegistry::new();
        registry.set_default(BuilderFactory::list(BasicList));
        registry.set_default(BuilderFactory::list(CompactList));
        assert_eq!(registry.get_default(BuilderKind::List).name(), "compact");
        assert_eq!(registry.default_show().name(), "tabular");
    }

    #[test]
    fn test_set_default_for_rejects_kind_mismatch() {
        let registry = BuilderRegistry::new();
        let err = registry
            .set_default_for(BuilderKind::Show, BuilderFactory::list(BasicList))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::KindMismatch {
                expected: BuilderKind::Show,
                found: BuilderKind::List,
            }
        );
        assert_eq!(registry.default_show().name(), "tabular");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = BuilderRegistry::new();
        let err = registry.resolve_named(BuilderKind::List, "fancy").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownBuilder {
                kind: BuilderKind::List,
                name: "fancy".to_owned(),
            }
        );
        assert_eq!(err.to_string(), r#"Unknown list builder: "fancy""#);
    }

    #[test]
    fn test_names_are_per_kind() {
        let registry = BuilderRegistry::new();
        assert!(registry.resolve_named(BuilderKind::Form, "tabular").is_err());
        registry.register_named("plain", BuilderFactory::form(SimpleForm));
        registry.set_default_named(BuilderKind::Form, "plain").unwrap();
        assert_eq!(registry.default_form().name(), "simple");
    }

    #[test]
    fn test_apply_config() {
        let registry = BuilderRegistry::new();
        let config = BuildersConfig {
            list: "compact".to_owned(),
            show: "extra".to_owned(),
            crud_page: "simple".to_owned(),
            form: "simple".to_owned(),
        };
        registry.apply_config(&config).unwrap();
        assert_eq!(registry.default_list().name(), "compact");
        assert_eq!(registry.default_show().name(), "extra");
    }

    #[test]
    fn test_apply_config_is_all_or_nothing() {
        let config = BuildersConfig {
            list: "basic".to_owned(),
            show: "missing".to_owned(),
            ..BuildersConfig::default()
        };
        let registry = BuilderRegistry::new();
        assert!(registry.apply_config(&config).is_err());
        assert_eq!(registry.default_list().name(), "tabular");
        assert!(BuilderRegistry::from_config(&config).is_err());
    }

    #[test]
    fn test_factory_debug() {
        let factory = BuilderFactory::show(ExtraShow);
        assert_eq!(
            format!("{factory:?}"),
            r#"BuilderFactory { kind: Show, name: "extra" }"#
        );
    }
}
