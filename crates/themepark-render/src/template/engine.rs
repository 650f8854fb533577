//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which lets the renderer
//! work with different template backends. The default implementation is
//! [`MiniJinjaEngine`].

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::error::RenderError;

/// What happens when a template references a role the theme does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRole {
    /// The placeholder renders as an empty string.
    #[default]
    Empty,
    /// Rendering fails with [`RenderError::Template`].
    Error,
}

impl MissingRole {
    fn undefined_behavior(self) -> UndefinedBehavior {
        match self {
            MissingRole::Empty => UndefinedBehavior::Lenient,
            MissingRole::Error => UndefinedBehavior::Strict,
        }
    }
}

/// A template engine that can render templates with data.
///
/// Engines handle template compilation, caching of named templates and
/// variable substitution.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and renders a template string in one step.
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;

    /// Compiles and renders a template string, using `name` in error messages.
    fn render_source(
        &self,
        name: &str,
        source: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    ///
    /// The template is compiled and cached for [`render_named`](Self::render_named).
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Templates keep their trailing newline, so a rendered config file ends the
/// same way its template does. Auto-escaping is off for every template name.
///
/// # Example
///
/// ```rust
/// use themepark_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("background = {{ background }}", &json!({"background": "#282a36"}))
///     .unwrap();
/// assert_eq!(output, "background = #282a36");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an engine that renders missing roles as empty strings.
    pub fn new() -> Self {
        Self::with_missing_role(MissingRole::default())
    }

    /// Creates an engine with the given missing-role policy.
    pub fn with_missing_role(policy: MissingRole) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(policy.undefined_behavior());
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        Ok(self.env.render_str(template, Value::from_serialize(data))?)
    }

    fn render_source(
        &self,
        name: &str,
        source: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let tmpl = self.env.template_from_named_str(name, source)?;
        Ok(tmpl.render(Value::from_serialize(data))?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(Value::from_serialize(data))?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("fg={{ foreground }}", &json!({"foreground": "#f8f8f2"}))
            .unwrap();
        assert_eq!(output, "fg=#f8f8f2");
    }

    #[test]
    fn test_keeps_trailing_newline() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("a = {{ a }}\n", &json!({"a": "1"}))
            .unwrap();
        assert_eq!(output, "a = 1\n");
    }

    #[test]
    fn test_missing_role_renders_empty_by_default() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_template("cursor = {{ cursor }};", &json!({}))
            .unwrap();
        assert_eq!(output, "cursor = ;");
    }

    #[test]
    fn test_missing_role_errors_when_strict() {
        let engine = MiniJinjaEngine::with_missing_role(MissingRole::Error);
        let result = engine.render_template("cursor = {{ cursor }}", &json!({}));
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_syntax_error() {
        let engine = MiniJinjaEngine::new();
        let result = engine.render_template("{{ unclosed", &json!({}));
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_render_source_names_template_in_errors() {
        let engine = MiniJinjaEngine::new();
        let err = engine
            .render_source("ghostty", "{% if %}", &json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("ghostty"));
    }

    #[test]
    fn test_named_template() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("nvim", "bg={{ background }}").unwrap();
        assert!(engine.has_template("nvim"));
        assert!(!engine.has_template("ghostty"));

        let output = engine
            .render_named("nvim", &json!({"background": "#000"}))
            .unwrap();
        assert_eq!(output, "bg=#000");
    }

    #[test]
    fn test_render_named_unknown() {
        let engine = MiniJinjaEngine::new();
        let result = engine.render_named("missing", &json!({}));
        assert!(matches!(result, Err(RenderError::TemplateNotFound(_))));
    }
}
