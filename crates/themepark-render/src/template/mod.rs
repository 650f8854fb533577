//! Template storage and rendering.
//!
//! Templates are MiniJinja source. Theme roles are exposed as top-level
//! variables, plus `theme_name`:
//!
//! ```text
//! Template: background = {{ background }}   # {{ theme_name }}
//! After:    background = #282a36   # dracula
//! ```
//!
//! ## Key Types
//!
//! - [`TemplateRegistry`]: template source lookup by name
//! - [`Renderer`]: substitutes a [`Theme`](crate::Theme) into template source
//! - [`TemplateEngine`]: backend seam, implemented by [`MiniJinjaEngine`]
//! - [`MissingRole`]: what an undefined role renders as

mod engine;
pub mod registry;
mod renderer;

pub use engine::{MiniJinjaEngine, MissingRole, TemplateEngine};
pub use registry::{TemplateRegistry, TEMPLATE_EXTENSIONS};
pub use renderer::{Renderer, THEME_NAME_KEY};
