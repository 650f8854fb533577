//! Named color themes.
//!
//! A [`Theme`] is a flat mapping from color role (`background`, `color4`, ...)
//! to a color value string. Themes are kept as source text in a
//! [`ThemeRegistry`] and parsed each time they are requested:
//!
//! ```rust
//! use themepark_render::theme::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::new();
//! registry.add_source("dracula.yaml", "background: \"#282a36\"\n");
//!
//! let theme = registry.get("dracula").unwrap();
//! assert_eq!(theme.get("background"), Some("#282a36"));
//! ```
//!
//! Sources are YAML (`.yaml`, `.yml`) or JSON (`.json`). A theme resolves by
//! its bare name or by its file name.

mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use registry::{ThemeRegistry, THEME_EXTENSIONS};
pub use theme::{Theme, ThemeFormat};
