//! Renders templates against a theme.

use serde_json::{Map, Value};

use super::engine::{MiniJinjaEngine, MissingRole, TemplateEngine};
use crate::error::RenderError;
use crate::theme::Theme;

/// Context key holding the theme's name.
///
/// Theme roles win over this key if a theme defines a role with the same name.
pub const THEME_NAME_KEY: &str = "theme_name";

/// Substitutes theme roles into template placeholders.
///
/// Every role becomes a top-level template variable, so a template line
/// `background = {{ background }}` renders as `background = #282a36` for a
/// theme whose `background` role is `#282a36`.
///
/// # Example
///
/// ```rust
/// use themepark_render::{Renderer, Theme};
///
/// let theme = Theme::new("dracula").with_role("background", "#282a36");
/// let renderer = Renderer::new();
///
/// let output = renderer
///     .render_str("ghostty", "background = {{ background }}\n", &theme)
///     .unwrap();
/// assert_eq!(output, "background = #282a36\n");
/// ```
pub struct Renderer<E: TemplateEngine = MiniJinjaEngine> {
    engine: E,
}

impl Renderer {
    /// Creates a renderer that renders missing roles as empty strings.
    pub fn new() -> Self {
        Self::with_missing_role(MissingRole::default())
    }

    /// Creates a renderer with the given missing-role policy.
    pub fn with_missing_role(policy: MissingRole) -> Self {
        Self::with_engine(MiniJinjaEngine::with_missing_role(policy))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TemplateEngine> Renderer<E> {
    /// Creates a renderer on top of a custom engine.
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Compiles and caches a named template for [`render`](Self::render).
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.engine.add_template(name, source)
    }

    /// Renders a template previously added with [`add_template`](Self::add_template).
    pub fn render(&self, name: &str, theme: &Theme) -> Result<String, RenderError> {
        self.engine.render_named(name, &theme_context(theme))
    }

    /// Compiles and renders template source in one step.
    ///
    /// `name` only appears in error messages.
    pub fn render_str(&self, name: &str, source: &str, theme: &Theme) -> Result<String, RenderError> {
        let output = self
            .engine
            .render_source(name, source, &theme_context(theme))?;
        tracing::debug!(template = name, theme = theme.name(), bytes = output.len(), "rendered");
        Ok(output)
    }
}

/// Builds the template context for a theme: its name plus every role.
fn theme_context(theme: &Theme) -> Value {
    let mut context = Map::new();
    context.insert(THEME_NAME_KEY.to_string(), Value::from(theme.name()));
    for (role, color) in theme.roles() {
        context.insert(role.clone(), Value::from(color.as_str()));
    }
    Value::Object(context)
}
