#![cfg(test)]
//! Selector lint for the shared theme embedded by the desktop build.
//!
//! Components in `ui` emit these class names; dropping one from the theme
//! leaves part of the report unstyled. Update the list together with the
//! markup when renaming.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Lookup page
    ".page-lookup",
    ".page-lookup__title",
    ".lookup-form",
    ".lookup-form__input",
    ".lookup-form__submit",
    ".lookup-form__alert",
    // Report layout
    ".report__status",
    ".report__status--error",
    ".report__header",
    ".report__title",
    ".report__nav",
    ".report__nav-link",
    ".report__info",
    ".report__info-grid",
    ".report__info-item",
    ".report__footer",
    ".report-section",
    ".report-section__heading",
    ".report-section__intro",
    ".report-section__chart",
    ".report-section__commentary",
    // Pace bands
    ".pace--notably-slow",
    ".pace--slightly-slow",
    ".pace--normal",
    ".pace--slightly-fast",
    ".pace--notably-fast",
    // Charts and table
    ".chart {",
    ".chart--gauge",
    ".chart--aging-speed",
    ".chart--radar",
    ".risk-table",
    ".risk-table__value",
    ".risk-table__row--negative",
    // Sharing
    ".share {",
    ".share__button",
    ".share__notice",
    ".share__notice--ok",
    ".share__notice--error",
    // Responsive block
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required selectors in the shared theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "navbar.css is missing:\n{}", missing.join("\n"));
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
