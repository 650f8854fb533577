//! Theme registry for embedded and inline theme sources.
//!
//! [`ThemeRegistry`] maps theme names to their source text. Sources are
//! usually compile-time embedded `(file name, content)` pairs; tests and
//! callers can also register pre-built themes or inline YAML, which shadow
//! sources with the same name.
//!
//! # Supported Extensions
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 (highest) | `.yaml` | YAML |
//! | 2 | `.yml` | YAML |
//! | 3 (lowest) | `.json` | JSON |
//!
//! If two sources share a base name (`nord.yaml` and `nord.json`), the
//! higher-priority extension wins regardless of registration order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::theme::{Theme, ThemeFormat};
use crate::error::RenderError;
use crate::util::{base_name, split_extension};

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

#[derive(Debug, Clone)]
struct ThemeSource {
    content: String,
    format: ThemeFormat,
    priority: usize,
}

/// Registry resolving theme names to parsed [`Theme`]s.
#[derive(Debug, Default, Clone)]
pub struct ThemeRegistry {
    sources: BTreeMap<String, ThemeSource>,
    inline: HashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from embedded `(file name, content)` pairs.
    pub fn from_embedded(entries: &[(&str, &str)]) -> Self {
        let mut registry = Self::new();
        registry.add_embedded(entries);
        registry
    }

    /// Registers every embedded `(file name, content)` pair.
    pub fn add_embedded(&mut self, entries: &[(&str, &str)]) {
        for &(file_name, content) in entries {
            self.add_source(file_name, content);
        }
    }

    /// Registers a theme source by file name.
    ///
    /// Returns `false` (and registers nothing) when the file name has no
    /// recognized extension. The source is not parsed until requested.
    pub fn add_source(&mut self, file_name: &str, content: impl Into<String>) -> bool {
        let Some((base, priority)) = split_extension(file_name, THEME_EXTENSIONS) else {
            tracing::debug!(file_name, "ignoring theme source with unknown extension");
            return false;
        };
        let Some(format) = ThemeFormat::from_extension(THEME_EXTENSIONS[priority]) else {
            return false;
        };

        if let Some(existing) = self.sources.get(base) {
            if existing.priority < priority {
                tracing::debug!(file_name, "shadowed by higher-priority theme source");
                return true;
            }
        }

        self.sources.insert(
            base.to_string(),
            ThemeSource {
                content: content.into(),
                format,
                priority,
            },
        );
        true
    }

    /// Parses and registers an inline YAML theme.
    ///
    /// Inline themes shadow file sources with the same name.
    pub fn add_inline(&mut self, name: impl Into<String>, yaml: &str) -> Result<(), RenderError> {
        let name = name.into();
        let theme = Theme::from_yaml(name.clone(), yaml)?;
        self.inline.insert(name, theme);
        Ok(())
    }

    /// Registers a pre-built theme under its own name.
    pub fn add_theme(&mut self, theme: Theme) {
        self.inline.insert(theme.name().to_string(), theme);
    }

    /// Looks up and parses a theme.
    ///
    /// `name` may carry a recognized extension (`"nord.yaml"`).
    ///
    /// # Errors
    ///
    /// [`RenderError::ThemeNotFound`] if nothing is registered under the name,
    /// [`RenderError::ThemeParse`] if the registered source is malformed.
    pub fn get(&self, name: &str) -> Result<Theme, RenderError> {
        let name = base_name(name, THEME_EXTENSIONS);

        if let Some(theme) = self.inline.get(name) {
            return Ok(theme.clone());
        }

        let source = self
            .sources
            .get(name)
            .ok_or_else(|| RenderError::ThemeNotFound(name.to_string()))?;
        Theme::parse(name, &source.content, source.format)
    }

    /// Whether a theme is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        let name = base_name(name, THEME_EXTENSIONS);
        self.inline.contains_key(name) || self.sources.contains_key(name)
    }

    /// All registered theme names, without extension, sorted and unique.
    pub fn names(&self) -> Vec<String> {
        self.sources
            .keys()
            .chain(self.inline.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.inline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORD_YAML: &str = "background: \"#2e3440\"\n";
    const NORD_JSON: &str = r##"{"background": "#000000"}"##;

    #[test]
    fn test_get_by_bare_name_and_file_name() {
        let registry = ThemeRegistry::from_embedded(&[("nord.yaml", NORD_YAML)]);
        assert_eq!(registry.get("nord").unwrap().get("background"), Some("#2e3440"));
        assert_eq!(
            registry.get("nord.yaml").unwrap().get("background"),
            Some("#2e3440")
        );
    }

    #[test]
    fn test_get_unknown_theme() {
        let registry = ThemeRegistry::from_embedded(&[("nord.yaml", NORD_YAML)]);
        let err = registry.get("solarized").unwrap_err();
        assert!(matches!(err, RenderError::ThemeNotFound(ref n) if n == "solarized"));
    }

    #[test]
    fn test_get_malformed_theme() {
        let registry = ThemeRegistry::from_embedded(&[("broken.yaml", "- not\n- a map\n")]);
        assert!(registry.contains("broken"));
        assert!(matches!(
            registry.get("broken"),
            Err(RenderError::ThemeParse { .. })
        ));
    }

    #[test]
    fn test_extension_priority_independent_of_order() {
        let mut registry = ThemeRegistry::new();
        registry.add_source("nord.json", NORD_JSON);
        registry.add_source("nord.yaml", NORD_YAML);
        assert_eq!(registry.get("nord").unwrap().get("background"), Some("#2e3440"));

        let mut registry = ThemeRegistry::new();
        registry.add_source("nord.yaml", NORD_YAML);
        registry.add_source("nord.json", NORD_JSON);
        assert_eq!(registry.get("nord").unwrap().get("background"), Some("#2e3440"));
    }

    #[test]
    fn test_unknown_extension_is_ignored() {
        let mut registry = ThemeRegistry::new();
        assert!(!registry.add_source("nord.toml", "background = '#2e3440'"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_inline_shadows_source() {
        let mut registry = ThemeRegistry::from_embedded(&[("nord.yaml", NORD_YAML)]);
        registry
            .add_inline("nord", "background: \"#111111\"\n")
            .unwrap();
        assert_eq!(registry.get("nord").unwrap().get("background"), Some("#111111"));
        assert_eq!(registry.names(), vec!["nord"]);
    }

    #[test]
    fn test_names_sorted_without_extension() {
        let registry = ThemeRegistry::from_embedded(&[
            ("nord.yaml", NORD_YAML),
            ("dracula.json", NORD_JSON),
            ("gruvbox.yml", NORD_YAML),
            ("nord.json", NORD_JSON),
        ]);
        assert_eq!(registry.names(), vec!["dracula", "gruvbox", "nord"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_theme() {
        let mut registry = ThemeRegistry::new();
        registry.add_theme(Theme::new("mono").with_role("background", "#000"));
        assert!(registry.contains("mono"));
        assert_eq!(registry.get("mono").unwrap().len(), 1);
    }
}
