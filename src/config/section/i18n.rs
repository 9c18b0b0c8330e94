//! `[[i18n.locales]]` configuration.
//!
//! Locales form an ordered list. Routes for the default locale carry no
//! prefix; all other locales are prefixed with their code (`en/blog/...`).
//! The default is either the single entry with `default = true` or, when
//! none is marked, the first listed locale.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// A single locale descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale code used in directory names and URL prefixes (e.g., "ja").
    pub code: String,
    /// Human-readable name (e.g., "日本語").
    pub name: String,
    /// Whether this locale is the unprefixed default.
    pub default: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            default: false,
        }
    }
}

/// `[i18n]` section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Ordered list of supported locales. Iteration order is declaration
    /// order and determines route output order.
    pub locales: Vec<LocaleConfig>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec![
                LocaleConfig {
                    code: "ja".into(),
                    name: "日本語".into(),
                    default: true,
                },
                LocaleConfig {
                    code: "en".into(),
                    name: "English".into(),
                    default: false,
                },
            ],
        }
    }
}

impl I18nConfig {
    /// The default (unprefixed) locale.
    ///
    /// Falls back to the first listed locale when no entry is marked
    /// `default = true`. Validation guarantees the list is non-empty and
    /// at most one entry is marked.
    pub fn default_locale(&self) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|l| l.default)
            .or_else(|| self.locales.first())
            .expect("validated config has at least one locale")
    }

    /// Whether `code` is the default locale's code.
    pub fn is_default(&self, code: &str) -> bool {
        self.default_locale().code == code
    }

    /// Validate the locale list.
    ///
    /// # Checks
    /// - at least one locale is configured
    /// - locale codes are non-empty and unique
    /// - at most one locale is marked `default = true`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error("i18n.locales", "no locales configured");
            return;
        }

        let mut seen = Vec::with_capacity(self.locales.len());
        for locale in &self.locales {
            if locale.code.is_empty() {
                diag.error("i18n.locales", "locale with empty code");
            } else if seen.contains(&locale.code.as_str()) {
                diag.error(
                    "i18n.locales",
                    format!("duplicate locale code `{}`", locale.code),
                );
            } else {
                seen.push(locale.code.as_str());
            }
        }

        let defaults = self.locales.iter().filter(|l| l.default).count();
        if defaults > 1 {
            diag.error_with_hint(
                "i18n.locales",
                format!("{defaults} locales marked as default"),
                "mark at most one locale with `default = true`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_builtin_defaults() {
        let config = test_parse_config("");
        let codes: Vec<_> = config.i18n.locales.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["ja", "en"]);
        assert_eq!(config.i18n.default_locale().code, "ja");
        assert!(config.i18n.is_default("ja"));
        assert!(!config.i18n.is_default("en"));
    }

    #[test]
    fn test_explicit_locales_preserve_order() {
        let config = test_parse_config(
            "[[i18n.locales]]\ncode = \"fr\"\nname = \"Français\"\n\
             [[i18n.locales]]\ncode = \"de\"\nname = \"Deutsch\"\n",
        );
        let codes: Vec<_> = config.i18n.locales.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["fr", "de"]);
        // No explicit default: first listed wins
        assert_eq!(config.i18n.default_locale().code, "fr");
    }

    #[test]
    fn test_explicit_default_marker() {
        let config = test_parse_config(
            "[[i18n.locales]]\ncode = \"ja\"\n\
             [[i18n.locales]]\ncode = \"en\"\ndefault = true\n",
        );
        assert_eq!(config.i18n.default_locale().code, "en");
    }

    #[test]
    fn test_validate_duplicate_codes() {
        let config = test_parse_config(
            "[[i18n.locales]]\ncode = \"ja\"\n[[i18n.locales]]\ncode = \"ja\"\n",
        );
        let mut diag = ConfigDiagnostics::new();
        config.i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_multiple_defaults() {
        let config = test_parse_config(
            "[[i18n.locales]]\ncode = \"ja\"\ndefault = true\n\
             [[i18n.locales]]\ncode = \"en\"\ndefault = true\n",
        );
        let mut diag = ConfigDiagnostics::new();
        config.i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_empty_list() {
        let i18n = I18nConfig { locales: vec![] };
        let mut diag = ConfigDiagnostics::new();
        i18n.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
