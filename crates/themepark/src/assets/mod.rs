//! Themes and templates compiled into the binary.
//!
//! Entries are `(file name, content)` pairs for registration with
//! [`ThemeRegistry`](themepark_render::ThemeRegistry) and
//! [`TemplateRegistry`](themepark_render::TemplateRegistry). Registries make
//! them available both with and without extension.

/// Bundled theme sources.
pub const BUNDLED_THEMES: &[(&str, &str)] = &[
    (
        "catppuccin-mocha.yaml",
        include_str!("../../themes/catppuccin-mocha.yaml"),
    ),
    ("dracula.yaml", include_str!("../../themes/dracula.yaml")),
    ("gruvbox.yaml", include_str!("../../themes/gruvbox.yaml")),
    ("nord.yaml", include_str!("../../themes/nord.yaml")),
    ("tokyonight.yaml", include_str!("../../themes/tokyonight.yaml")),
];

/// Bundled target templates.
pub const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    ("ghostty.jinja", include_str!("../../templates/ghostty.jinja")),
    ("nvim.jinja", include_str!("../../templates/nvim.jinja")),
];
