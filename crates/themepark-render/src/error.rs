//! Error types for theme loading and template rendering.
//!
//! [`RenderError`] is the single error type returned by the stores and the
//! renderer. It hides the template engine's own error type behind a stable
//! set of variants.

use thiserror::Error;

/// Error type for theme, template and rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No theme is registered under this name.
    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    /// No template is registered under this name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The theme source is not a flat mapping of role names to strings.
    #[error("malformed theme `{name}`: {message}")]
    ThemeParse { name: String, message: String },

    /// Template syntax error or a failed substitution.
    #[error("template error: {0}")]
    Template(String),
}

impl RenderError {
    /// Whether this error means a name did not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RenderError::ThemeNotFound(_) | RenderError::TemplateNotFound(_)
        )
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => {
                RenderError::TemplateNotFound(err.to_string())
            }
            _ => RenderError::Template(err.to_string()),
        }
    }
}
