//! Output targets.
//!
//! Each target is a downstream application with one template and one fixed
//! output file name. Other tools read those files by name, so entries here
//! must not be renamed.

use std::path::{Path, PathBuf};

/// A downstream application whose configuration file is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Name used on the command line (`themepark where ghostty`).
    pub name: &'static str,
    /// Template rendered for this target.
    pub template: &'static str,
    /// File written inside the output directory.
    pub file_name: &'static str,
}

impl Target {
    /// Path of this target's file inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name)
    }
}

/// Every built-in target, in the order `use` writes them.
pub const TARGETS: &[Target] = &[
    Target {
        name: "ghostty",
        template: "ghostty",
        file_name: "ghostty.conf",
    },
    Target {
        name: "nvim",
        template: "nvim",
        file_name: "nvim.lua",
    },
];

/// Looks up a built-in target by name.
pub fn find(name: &str) -> Option<&'static Target> {
    TARGETS.iter().find(|target| target.name == name)
}
