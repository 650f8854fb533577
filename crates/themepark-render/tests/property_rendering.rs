use proptest::prelude::*;
use themepark_render::{MissingRole, Renderer, Theme};

fn hex_color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

// Keywords, loop state, engine globals and the injected theme name.
const RESERVED: &[&str] = &[
    "true", "false", "none", "and", "or", "not", "in", "is", "if", "else", "loop", "self",
    "super", "caller", "varargs", "kwargs", "range", "dict", "debug", "namespace",
    "theme_name",
];

fn role_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_filter("reserved word", |name| !RESERVED.contains(&name.as_str()))
}

// A template with one `key = {{ role }}` line per role.
fn template_for(roles: &[String]) -> String {
    roles
        .iter()
        .map(|role| format!("{role} = {{{{ {role} }}}}\n"))
        .collect()
}

proptest! {
    #[test]
    fn test_complete_theme_leaves_no_placeholders(
        roles in prop::collection::btree_map(role_name(), hex_color(), 1..24)
    ) {
        let theme = roles
            .iter()
            .fold(Theme::new("generated"), |theme, (role, color)| theme.with_role(role, color));
        let names: Vec<String> = roles.keys().cloned().collect();

        let output = Renderer::with_missing_role(MissingRole::Error)
            .render_str("generated", &template_for(&names), &theme)
            .unwrap();

        prop_assert!(!output.contains("{{"));
        prop_assert!(!output.contains("}}"));
        for (role, color) in &roles {
            let expected = format!("{role} = {color}\n");
            prop_assert!(output.contains(&expected));
        }
    }

    #[test]
    fn test_missing_roles_render_empty(
        roles in prop::collection::btree_set(role_name(), 1..8)
    ) {
        let names: Vec<String> = roles.into_iter().collect();
        let output = Renderer::new()
            .render_str("generated", &template_for(&names), &Theme::new("empty"))
            .unwrap();

        for role in &names {
            let expected = format!("{role} = \n");
            prop_assert!(output.contains(&expected));
        }
    }
}

#[test]
fn test_dracula_background_line() {
    let theme = Theme::from_yaml("dracula", "background: \"#282a36\"\n").unwrap();
    let output = Renderer::new()
        .render_str("ghostty", "background = {{ background }}", &theme)
        .unwrap();
    assert_eq!(output, "background = #282a36");
}
