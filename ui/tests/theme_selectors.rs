/*!
Theme selector lint.

The sidebar controller and dropdowns toggle class names at runtime; if the theme drops or
renames one of them the page silently stops responding. These checks pin the selectors in
`ui/assets/theme/main.css` to the names the code actually uses.

A plain substring check is enough as an early warning. If a selector is renamed on purpose,
update the component markup, `SidebarConfig` defaults and this list together.
*/

use ui::core::config::SidebarConfig;
use ui::dropdown;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page__header",
    ".card {",
    ".stats-grid",
    ".stat-card__change--down",
    ".charts-grid",
    ".chart-card__canvas",
    ".admin-sidebar__brand",
    ".admin-header__actions",
    "@media (max-width: 767px)",
];

/// Custom properties the chart palette reads.
const CHART_PROPERTIES: &[&str] = &[
    "--color-primary:",
    "--color-secondary:",
    "--color-accent:",
    "--color-dark:",
    "--color-success:",
    "--color-warning:",
    "--color-danger:",
    "--color-info:",
    "--color-gray-600:",
];

#[test]
fn theme_has_layout_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !THEME_CSS.contains(*selector))
        .collect();
    assert!(missing.is_empty(), "theme is missing selectors: {missing:?}");
}

#[test]
fn theme_styles_every_controller_class() {
    let config = SidebarConfig::default();
    let class_selector = |selector: &str| selector.trim_start_matches('.').to_string();
    let sidebar = class_selector(&config.sidebar_selector);
    let main = class_selector(&config.main_selector);

    let expected = [
        format!(".{sidebar}.{} ", config.collapsed_class),
        format!(".{main}.{} ", config.main_collapsed_class),
        format!(".{sidebar}.{} ", config.mobile_open_class),
        format!(".{} {{", config.overlay_class),
        format!(".{}.{} ", config.overlay_class, config.overlay_active_class),
        format!("{} {{", config.toggle_selector),
        format!("{} {{", config.nav_link_selector),
        format!(".{} {{", config.nav_link_active_class),
    ];
    for selector in &expected {
        assert!(THEME_CSS.contains(selector.as_str()), "missing `{selector}`");
    }
}

#[test]
fn theme_styles_open_dropdowns() {
    assert!(THEME_CSS.contains(&format!("{} {{", dropdown::OPEN_MENU_SELECTOR)));
}

#[test]
fn theme_defines_chart_palette() {
    for property in CHART_PROPERTIES {
        assert!(THEME_CSS.contains(property), "missing `{property}`");
    }
}

#[test]
fn mobile_breakpoint_matches_media_query() {
    let breakpoint = SidebarConfig::default().mobile_breakpoint_px as u32;
    assert!(THEME_CSS.contains(&format!("(max-width: {}px)", breakpoint - 1)));
}
