//! The themepark application: bundled stores plus resolved configuration.

use std::fs;
use std::path::PathBuf;

use themepark_render::{Renderer, TemplateRegistry, ThemeRegistry};

use crate::assets::{BUNDLED_TEMPLATES, BUNDLED_THEMES};
use crate::config::Config;
use crate::error::Error;
use crate::target::{self, Target, TARGETS};

/// One target's rendered file contents, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub target: &'static Target,
    pub contents: String,
}

/// Result of a successful [`Themepark::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub theme: String,
    /// Written files, in target order.
    pub written: Vec<PathBuf>,
}

/// Theme and template stores, the renderer, and where output goes.
///
/// Built once per process; every operation borrows it immutably.
///
/// ```rust,no_run
/// use themepark::{Config, Themepark};
///
/// let app = Themepark::bundled(Config::new("/tmp/themepark"));
/// let applied = app.apply("dracula")?;
/// assert_eq!(applied.written.len(), 2);
/// # Ok::<(), themepark::Error>(())
/// ```
pub struct Themepark {
    themes: ThemeRegistry,
    templates: TemplateRegistry,
    renderer: Renderer,
    config: Config,
}

impl Themepark {
    /// Creates an application over the given stores.
    pub fn new(themes: ThemeRegistry, templates: TemplateRegistry, config: Config) -> Self {
        let renderer = Renderer::with_missing_role(config.missing_role);
        Self {
            themes,
            templates,
            renderer,
            config,
        }
    }

    /// Creates an application over the themes and templates compiled into
    /// the binary.
    pub fn bundled(config: Config) -> Self {
        Self::new(
            ThemeRegistry::from_embedded(BUNDLED_THEMES),
            TemplateRegistry::from_embedded(BUNDLED_TEMPLATES),
            config,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every available theme name, sorted.
    pub fn theme_names(&self) -> Vec<String> {
        self.themes.names()
    }

    /// Names of the themes compiled into the binary, without building an
    /// application or resolving any configuration.
    pub fn bundled_theme_names() -> Vec<String> {
        ThemeRegistry::from_embedded(BUNDLED_THEMES).names()
    }

    /// Absolute path of a target's output file.
    ///
    /// Touches neither the filesystem nor the theme and template stores.
    pub fn locate(&self, target_name: &str) -> Result<PathBuf, Error> {
        let target =
            target::find(target_name).ok_or_else(|| Error::UnknownTarget(target_name.to_string()))?;
        Ok(target.output_path(&self.config.output_dir))
    }

    /// Renders every target for a theme without writing anything.
    pub fn render_all(&self, theme_name: &str) -> Result<Vec<RenderedOutput>, Error> {
        let theme = self.themes.get(theme_name)?;
        tracing::debug!(theme = theme.name(), roles = theme.len(), "loaded theme");

        TARGETS
            .iter()
            .map(|target| -> Result<RenderedOutput, Error> {
                let source = self.templates.get_content(target.template)?;
                let contents = self
                    .renderer
                    .render_str(target.template, source, &theme)
                    .map_err(|source| Error::Render {
                        target: target.name.to_string(),
                        source,
                    })?;
                Ok(RenderedOutput { target, contents })
            })
            .collect()
    }

    /// Renders every target for a theme and writes the results.
    ///
    /// All targets are rendered before the output directory is created, so
    /// an unknown theme or a broken template writes nothing. A write failure
    /// part way through leaves earlier files in place.
    pub fn apply(&self, theme_name: &str) -> Result<Applied, Error> {
        let outputs = self.render_all(theme_name)?;

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(outputs.len());
        for output in outputs {
            let path = output.target.output_path(dir);
            fs::write(&path, output.contents).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(name = output.target.name, path = %path.display(), "wrote target");
            written.push(path);
        }

        tracing::info!(theme = theme_name, files = written.len(), "theme switched");
        Ok(Applied {
            theme: theme_name.to_string(),
            written,
        })
    }
}
