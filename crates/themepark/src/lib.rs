//! Apply a color theme to terminal and editor configuration files.
//!
//! `themepark` renders one bundled theme into every target's template and
//! writes the results to a fixed directory (`~/.themepark` by default):
//!
//! | target | file |
//! |--------|------|
//! | `ghostty` | `ghostty.conf` |
//! | `nvim` | `nvim.lua` |
//!
//! Point each application at its file once; `themepark use <theme>` then
//! switches all of them together.
//!
//! The binary is a thin wrapper over [`cli::execute`]. Library users can
//! drive [`Themepark`] directly.

pub mod app;
pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod target;

pub use app::{Applied, RenderedOutput, Themepark};
pub use config::Config;
pub use error::Error;
pub use target::{Target, TARGETS};
