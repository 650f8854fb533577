//! The [`Theme`] type and its source formats.

use std::collections::BTreeMap;

use crate::error::RenderError;

/// Serialization format of a theme source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Yaml,
    Json,
}

impl ThemeFormat {
    /// Picks the format for a recognized theme file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".yaml" | ".yml" => Some(ThemeFormat::Yaml),
            ".json" => Some(ThemeFormat::Json),
            _ => None,
        }
    }
}

/// A named set of color role assignments.
///
/// Roles are kept sorted so that iterating a theme, or serializing it into a
/// template context, is deterministic.
///
/// # Example
///
/// ```rust
/// use themepark_render::Theme;
///
/// let theme = Theme::new("mono")
///     .with_role("background", "#000000")
///     .with_role("foreground", "#ffffff");
///
/// assert_eq!(theme.name(), "mono");
/// assert_eq!(theme.get("foreground"), Some("#ffffff"));
/// assert_eq!(theme.get("cursor"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    roles: BTreeMap<String, String>,
}

impl Theme {
    /// Creates an empty theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeMap::new(),
        }
    }

    /// Adds a role, replacing any previous value for it.
    pub fn with_role(mut self, role: impl Into<String>, value: impl Into<String>) -> Self {
        self.roles.insert(role.into(), value.into());
        self
    }

    /// Parses a theme from YAML source.
    ///
    /// The document must be a mapping of role names to scalar values; nested
    /// mappings and sequences are rejected. Color strings starting with `#`
    /// must be quoted in YAML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themepark_render::Theme;
    ///
    /// let theme = Theme::from_yaml("nord", r##"
    /// background: "#2e3440"
    /// foreground: "#d8dee9"
    /// "##).unwrap();
    /// assert_eq!(theme.len(), 2);
    /// ```
    pub fn from_yaml(name: impl Into<String>, yaml: &str) -> Result<Self, RenderError> {
        let name = name.into();
        match serde_yaml::from_str::<BTreeMap<String, String>>(yaml) {
            Ok(roles) => Ok(Self { name, roles }),
            Err(err) => Err(RenderError::ThemeParse {
                name,
                message: err.to_string(),
            }),
        }
    }

    /// Parses a theme from a JSON object of strings.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, RenderError> {
        let name = name.into();
        match serde_json::from_str::<BTreeMap<String, String>>(json) {
            Ok(roles) => Ok(Self { name, roles }),
            Err(err) => Err(RenderError::ThemeParse {
                name,
                message: err.to_string(),
            }),
        }
    }

    /// Parses a theme from source in the given format.
    pub fn parse(
        name: impl Into<String>,
        source: &str,
        format: ThemeFormat,
    ) -> Result<Self, RenderError> {
        match format {
            ThemeFormat::Yaml => Self::from_yaml(name, source),
            ThemeFormat::Json => Self::from_json(name, source),
        }
    }

    /// The theme's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color assigned to `role`.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    /// All role assignments, sorted by role name.
    pub fn roles(&self) -> &BTreeMap<String, String> {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let theme = Theme::from_yaml(
            "dracula",
            "background: \"#282a36\"\nforeground: \"#f8f8f2\"\n",
        )
        .unwrap();
        assert_eq!(theme.name(), "dracula");
        assert_eq!(theme.get("background"), Some("#282a36"));
        assert_eq!(theme.get("foreground"), Some("#f8f8f2"));
        assert_eq!(theme.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let theme =
            Theme::from_json("dracula", r##"{"background": "#282a36", "color0": "#21222c"}"##)
                .unwrap();
        assert_eq!(theme.get("color0"), Some("#21222c"));
    }

    #[test]
    fn test_from_yaml_rejects_nested_mapping() {
        let err = Theme::from_yaml("broken", "background:\n  dark: \"#000000\"\n").unwrap_err();
        match err {
            RenderError::ThemeParse { name, .. } => assert_eq!(name, "broken"),
            other => panic!("expected ThemeParse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_rejects_invalid_syntax() {
        let result = Theme::from_yaml("broken", "background: [unclosed\n");
        assert!(matches!(result, Err(RenderError::ThemeParse { .. })));
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let result = Theme::from_json("broken", r#"{"background": 40}"#);
        assert!(matches!(result, Err(RenderError::ThemeParse { .. })));
    }

    #[test]
    fn test_roles_are_sorted() {
        let theme = Theme::new("t")
            .with_role("foreground", "#fff")
            .with_role("background", "#000")
            .with_role("cursor", "#888");
        let keys: Vec<_> = theme.roles().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["background", "cursor", "foreground"]);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ThemeFormat::from_extension(".yml"), Some(ThemeFormat::Yaml));
        assert_eq!(ThemeFormat::from_extension(".json"), Some(ThemeFormat::Json));
        assert_eq!(ThemeFormat::from_extension(".toml"), None);
    }
}
