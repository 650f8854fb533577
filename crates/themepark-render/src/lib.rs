//! Theme and template stores with MiniJinja rendering.
//!
//! `themepark-render` turns a named color theme and a target template into the
//! text of a configuration file. It has three parts:
//!
//! - [`theme`]: [`Theme`] (role → color) and [`ThemeRegistry`]
//! - [`template`]: [`TemplateRegistry`] and [`Renderer`]
//! - [`RenderError`]: the error type shared by both
//!
//! # Example
//!
//! ```rust
//! use themepark_render::{Renderer, TemplateRegistry, ThemeRegistry};
//!
//! let themes = ThemeRegistry::from_embedded(&[
//!     ("dracula.yaml", "background: \"#282a36\"\n"),
//! ]);
//! let templates = TemplateRegistry::from_embedded(&[
//!     ("ghostty.jinja", "background = {{ background }}\n"),
//! ]);
//!
//! let theme = themes.get("dracula").unwrap();
//! let source = templates.get_content("ghostty").unwrap();
//! let output = Renderer::new().render_str("ghostty", source, &theme).unwrap();
//!
//! assert_eq!(output, "background = #282a36\n");
//! ```

pub mod error;
pub mod template;
pub mod theme;
mod util;

pub use error::RenderError;
pub use template::{MissingRole, Renderer, TemplateRegistry};
pub use theme::{Theme, ThemeRegistry};
