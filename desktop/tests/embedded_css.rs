#![cfg(test)]
//! The desktop build inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "embedded theme is empty");
}

#[test]
fn embedded_css_defines_palette() {
    for token in ["--color-bg", "--color-success", "--color-neutral", "body {", ".button--primary"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}
