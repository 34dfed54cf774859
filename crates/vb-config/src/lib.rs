//! Configuration management for view builders.
//!
//! Parses `viewbuilders.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The file has three optional sections:
//!
//! - `[builders]` - the default builder variant per kind (`list`, `show`,
//!   `crud_page`, `form`), by registered name
//! - `[show]` - show builder defaults such as `blank_text`
//! - `[locale]` - settings for the reference template context: currency
//!   formatting, named date/time formats and translations
//!
//! Named formats and translations missing from the file fall back to the
//! built-in defaults, so a `[locale.date_formats]` table only needs the
//! entries it overrides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "viewbuilders.toml";

/// Largest accepted `locale.currency_precision`.
const MAX_CURRENCY_PRECISION: usize = 10;

/// Built-in named date formats (strftime patterns).
const DEFAULT_DATE_FORMATS: &[(&str, &str)] = &[
    ("default", "%Y-%m-%d"),
    ("short", "%b %d"),
    ("long", "%B %d, %Y"),
];

/// Built-in named date-time formats (strftime patterns).
const DEFAULT_TIME_FORMATS: &[(&str, &str)] = &[
    ("default", "%Y-%m-%d %H:%M"),
    ("short", "%d %b %H:%M"),
    ("long", "%B %d, %Y %H:%M"),
];

/// Built-in translations.
const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[("true", "Yes"), ("false", "No")];

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default builder variant per kind.
    pub builders: BuildersConfig,
    /// Show builder defaults.
    pub show: ShowConfig,
    /// Locale settings for the reference template context.
    pub locale: LocaleConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Default builder variant names, one per builder kind.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildersConfig {
    /// List builder variant (`basic`, `compact`, `tabular`).
    pub list: String,
    /// Show builder variant (`simple`, `tabular`, `extra`).
    pub show: String,
    /// CRUD page builder variant (`simple`).
    pub crud_page: String,
    /// Form builder variant (`simple`).
    pub form: String,
}

impl Default for BuildersConfig {
    fn default() -> Self {
        Self {
            list: "tabular".to_owned(),
            show: "tabular".to_owned(),
            crud_page: "simple".to_owned(),
            form: "simple".to_owned(),
        }
    }
}

/// Show builder defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShowConfig {
    /// Text rendered in place of blank attribute values.
    pub blank_text: Option<String>,
}

/// Locale settings used by the reference template context.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleConfig {
    /// Currency unit placed before the amount.
    pub currency_unit: String,
    /// Digits after the decimal separator.
    pub currency_precision: usize,
    /// Thousands delimiter.
    pub delimiter: String,
    /// Decimal separator.
    pub separator: String,
    /// Named date formats, overriding the built-in ones.
    pub date_formats: HashMap<String, String>,
    /// Named date-time formats, overriding the built-in ones.
    pub time_formats: HashMap<String, String>,
    /// Translations, overriding the built-in ones.
    pub translations: HashMap<String, String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_unit: "$".to_owned(),
            currency_precision: 2,
            delimiter: ",".to_owned(),
            separator: ".".to_owned(),
            date_formats: HashMap::new(),
            time_formats: HashMap::new(),
            translations: HashMap::new(),
        }
    }
}

impl LocaleConfig {
    /// Look up a named date format, falling back to the built-in table.
    #[must_use]
    pub fn date_format(&self, name: &str) -> Option<&str> {
        lookup(&self.date_formats, DEFAULT_DATE_FORMATS, name)
    }

    /// Look up a named date-time format, falling back to the built-in table.
    #[must_use]
    pub fn time_format(&self, name: &str) -> Option<&str> {
        lookup(&self.time_formats, DEFAULT_TIME_FORMATS, name)
    }

    /// Look up a translation, falling back to the built-in table.
    #[must_use]
    pub fn translation(&self, key: &str) -> Option<&str> {
        lookup(&self.translations, DEFAULT_TRANSLATIONS, key)
    }
}

fn lookup<'a>(
    overrides: &'a HashMap<String, String>,
    defaults: &'static [(&'static str, &'static str)],
    name: &str,
) -> Option<&'a str> {
    overrides.get(name).map(String::as_str).or_else(|| {
        defaults
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    })
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string field to be a well-formed strftime pattern.
fn require_strftime(pattern: &str, field: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Validation(format!(
            "{field} is not a valid strftime pattern: {pattern:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `viewbuilders.toml` in current directory and
    /// parents, falling back to the defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or parsing or
    /// validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(path = %path.display(), "Loaded view builder configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after parsing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_builders()?;
        self.validate_locale()?;
        Ok(())
    }

    fn validate_builders(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.builders.list, "builders.list")?;
        require_non_empty(&self.builders.show, "builders.show")?;
        require_non_empty(&self.builders.crud_page, "builders.crud_page")?;
        require_non_empty(&self.builders.form, "builders.form")?;
        Ok(())
    }

    fn validate_locale(&self) -> Result<(), ConfigError> {
        let locale = &self.locale;

        if locale.currency_precision > MAX_CURRENCY_PRECISION {
            return Err(ConfigError::Validation(format!(
                "locale.currency_precision cannot exceed {MAX_CURRENCY_PRECISION}"
            )));
        }

        for (name, pattern) in &locale.date_formats {
            require_strftime(pattern, &format!("locale.date_formats.{name}"))?;
        }
        for (name, pattern) in &locale.time_formats {
            require_strftime(pattern, &format!("locale.time_formats.{name}"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.builders.list, "tabular");
        assert_eq!(config.builders.show, "tabular");
        assert_eq!(config.builders.crud_page, "simple");
        assert_eq!(config.builders.form, "simple");
        assert!(config.show.blank_text.is_none());
        assert_eq!(config.locale.currency_unit, "$");
        assert_eq!(config.locale.currency_precision, 2);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.builders, BuildersConfig::default());
        assert_eq!(config.locale, LocaleConfig::default());
    }

    #[test]
    fn test_parse_builders_config() {
        let toml = r#"
[builders]
list = "compact"
show = "extra"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.builders.list, "compact");
        assert_eq!(config.builders.show, "extra");
        assert_eq!(config.builders.crud_page, "simple");
        assert_eq!(config.builders.form, "simple");
    }

    #[test]
    fn test_parse_show_config() {
        let toml = r#"
[show]
blank_text = "n/a"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.show.blank_text.as_deref(), Some("n/a"));
    }

    #[test]
    fn test_parse_locale_config() {
        let toml = r#"
[locale]
currency_unit = "EUR "
currency_precision = 1
delimiter = "."
separator = ","

[locale.date_formats]
short = "%d.%m."

[locale.translations]
true = "Ja"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        let locale = &config.locale;
        assert_eq!(locale.currency_unit, "EUR ");
        assert_eq!(locale.currency_precision, 1);
        assert_eq!(locale.delimiter, ".");
        assert_eq!(locale.separator, ",");
        assert_eq!(locale.date_format("short"), Some("%d.%m."));
        assert_eq!(locale.translation("true"), Some("Ja"));
    }

    #[test]
    fn test_locale_falls_back_to_builtin_entries() {
        let toml = r#"
[locale.date_formats]
short = "%d.%m."
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.locale.date_format("default"), Some("%Y-%m-%d"));
        assert_eq!(config.locale.time_format("default"), Some("%Y-%m-%d %H:%M"));
        assert_eq!(config.locale.translation("false"), Some("No"));
        assert_eq!(config.locale.date_format("missing"), None);
        assert_eq!(config.locale.translation("missing"), None);
    }

    fn assert_validation_error(toml: &str, expected_substrings: &[&str]) {
        let err = Config::from_toml_str(toml).unwrap_err();
        let ConfigError::Validation(message) = err else {
            panic!("expected validation error, got {err:?}");
        };
        for expected in expected_substrings {
            assert!(
                message.contains(expected),
                "error {message:?} does not mention {expected:?}"
            );
        }
    }

    #[test]
    fn test_validate_empty_builder_name() {
        assert_validation_error("[builders]\nlist = \"\"\n", &["builders.list"]);
        assert_validation_error("[builders]\nform = \"  \"\n", &["builders.form"]);
    }

    #[test]
    fn test_validate_currency_precision_too_high() {
        assert_validation_error(
            "[locale]\ncurrency_precision = 11\n",
            &["locale.currency_precision", "10"],
        );
    }

    #[test]
    fn test_validate_invalid_date_format() {
        assert_validation_error(
            "[locale.date_formats]\nbroken = \"%Q\"\n",
            &["locale.date_formats.broken"],
        );
    }

    #[test]
    fn test_validate_invalid_time_format() {
        assert_validation_error(
            "[locale.time_formats]\nbroken = \"%\"\n",
            &["locale.time_formats.broken"],
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("[builders\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[builders]\nlist = \"basic\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.builders.list, "basic");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app/views/users");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let discovered = Config::discover_from(&nested).unwrap();
        assert_eq!(discovered, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_prefers_nearest_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        let discovered = Config::discover_from(&nested).unwrap();
        assert_eq!(discovered, nested.join(CONFIG_FILENAME));
    }
}
