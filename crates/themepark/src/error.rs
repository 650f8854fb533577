//! Error type for themepark operations.

use std::io;
use std::path::PathBuf;

use themepark_render::RenderError;
use thiserror::Error;

/// Error type for applying, listing and locating.
#[derive(Debug, Error)]
pub enum Error {
    /// The theme name is not bundled.
    #[error("Theme {0} not found! Try `themepark list`?")]
    ThemeNotFound(String),

    /// The target name is not in the target table.
    #[error("Unknown target: {0}")]
    UnknownTarget(String),

    /// No output directory override and no home directory.
    #[error("could not determine the home directory; set THEMEPARK_DIR or pass --dir")]
    NoHomeDir,

    /// Rendering one target's template failed.
    #[error("failed to render {target}: {source}")]
    Render {
        target: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other theme or template store failure, e.g. a malformed theme.
    #[error(transparent)]
    Store(RenderError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether a theme or target name did not resolve.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ThemeNotFound(_) | Error::UnknownTarget(_) => true,
            Error::Store(err) => err.is_not_found(),
            _ => false,
        }
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::ThemeNotFound(name) => Error::ThemeNotFound(name),
            other => Error::Store(other),
        }
    }
}
