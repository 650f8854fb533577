//! Template registry for embedded and inline templates.
//!
//! [`TemplateRegistry`] resolves template names to their source text. Names
//! can be given with or without extension: both `"ghostty"` and
//! `"ghostty.jinja"` resolve.
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.jinja` |
//! | 2 | `.jinja2` |
//! | 3 | `.j2` |
//! | 4 (lowest) | `.txt` |
//!
//! Inline templates (added via [`TemplateRegistry::add_inline`]) have the
//! highest priority of all.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::RenderError;
use crate::util::{base_name, split_extension};

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".jinja", ".jinja2", ".j2", ".txt"];

/// Registry resolving template names to source text.
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    /// Base name to (priority, content).
    files: BTreeMap<String, (usize, String)>,
    inline: HashMap<String, String>,
}

impl TemplateRegistry {
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
    ///
    /// Entries without a recognized extension are registered under their
    /// full name.
    pub fn add_embedded(&mut self, entries: &[(&str, &str)]) {
        for &(file_name, content) in entries {
            let (base, priority) = split_extension(file_name, TEMPLATE_EXTENSIONS)
                .unwrap_or((file_name, TEMPLATE_EXTENSIONS.len()));

            let shadowed =
                matches!(self.files.get(base), Some((existing, _)) if *existing < priority);
            if !shadowed {
                self.files
                    .insert(base.to_string(), (priority, content.to_string()));
            }
        }
    }

    /// Adds an inline template, shadowing any embedded one of the same name.
    pub fn add_inline(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.inline.insert(name.into(), content.into());
    }

    /// Returns the source text of a template.
    ///
    /// # Errors
    ///
    /// [`RenderError::TemplateNotFound`] if no template has this name.
    pub fn get_content(&self, name: &str) -> Result<&str, RenderError> {
        if let Some(content) = self.inline.get(name) {
            return Ok(content.as_str());
        }
        let base = base_name(name, TEMPLATE_EXTENSIONS);
        self.inline
            .get(base)
            .or_else(|| self.files.get(base).map(|(_, content)| content))
            .map(String::as_str)
            .ok_or_else(|| RenderError::TemplateNotFound(name.to_string()))
    }

    /// Whether a template resolves under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get_content(name).is_ok()
    }

    /// All registered template names, without extension, sorted.
    pub fn names(&self) -> Vec<String> {
        self.files
            .keys()
            .chain(self.inline.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.inline.is_empty()
    }
}
