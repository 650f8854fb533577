//! Runtime configuration.
//!
//! The output directory defaults to `~/.themepark`. It can be overridden with
//! `--dir` or the `THEMEPARK_DIR` environment variable (both handled by the
//! command-line parser and passed to [`Config::resolve`]).

use std::path::{Path, PathBuf};

use themepark_render::MissingRole;

use crate::error::Error;

/// Directory name, under the home directory, that receives rendered files.
pub const OUTPUT_DIR_NAME: &str = ".themepark";

/// Environment variable overriding the output directory.
pub const DIR_ENV: &str = "THEMEPARK_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute directory receiving every target's file.
    pub output_dir: PathBuf,
    /// How templates treat roles a theme does not define.
    pub missing_role: MissingRole,
}

impl Config {
    /// Creates a configuration writing to `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            missing_role: MissingRole::default(),
        }
    }

    pub fn with_missing_role(mut self, missing_role: MissingRole) -> Self {
        self.missing_role = missing_role;
        self
    }

    /// Resolves the configuration from command-line values.
    ///
    /// A relative `dir_override` is made absolute against the current
    /// directory. Without an override the home directory is required.
    pub fn resolve(dir_override: Option<&Path>, strict: bool) -> Result<Self, Error> {
        let output_dir = match dir_override {
            Some(dir) => std::path::absolute(dir)?,
            None => default_output_dir()?,
        };
        let missing_role = if strict {
            MissingRole::Error
        } else {
            MissingRole::Empty
        };
        tracing::debug!(output_dir = %output_dir.display(), ?missing_role, "resolved config");
        Ok(Self::new(output_dir).with_missing_role(missing_role))
    }
}

/// `~/.themepark`.
pub fn default_output_dir() -> Result<PathBuf, Error> {
    dirs::home_dir()
        .map(|home| home.join(OUTPUT_DIR_NAME))
        .ok_or(Error::NoHomeDir)
}
