//! Tunables for the admin shell. Every field has a default matching the shipped markup and
//! theme, so pages only override what they change:
//!
//! ```ignore
//! let config = SidebarConfig::from_json(r#"{ "debounceMs": 100 }"#)?;
//! assert_eq!(config.storage_key, "sidebarCollapsed");
//! ```

use serde::{Deserialize, Serialize};

use super::viewport::MOBILE_BREAKPOINT_PX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    pub sidebar_selector: String,
    pub main_selector: String,
    pub toggle_selector: String,
    /// Queried inside the sidebar element, not the whole document.
    pub nav_link_selector: String,

    pub collapsed_class: String,
    pub main_collapsed_class: String,
    pub mobile_open_class: String,
    pub overlay_class: String,
    pub overlay_active_class: String,
    pub nav_link_active_class: String,

    pub mobile_breakpoint_px: f64,
    pub debounce_ms: u64,
    pub storage_key: String,
    /// Substituted for an empty last path segment (e.g. `/admin/`).
    pub landing_page: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_selector: ".admin-sidebar".into(),
            main_selector: ".admin-main".into(),
            toggle_selector: ".admin-header__toggle".into(),
            nav_link_selector: ".admin-sidebar__link".into(),
            collapsed_class: "collapsed".into(),
            main_collapsed_class: "sidebar-collapsed".into(),
            mobile_open_class: "mobile-open".into(),
            overlay_class: "mobile-overlay".into(),
            overlay_active_class: "active".into(),
            nav_link_active_class: "admin-sidebar__link--active".into(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            debounce_ms: 250,
            storage_key: "sidebarCollapsed".into(),
            landing_page: "index.html".into(),
        }
    }
}

impl SidebarConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_markup() {
        let config = SidebarConfig::default();
        assert_eq!(config.sidebar_selector, ".admin-sidebar");
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.storage_key, "sidebarCollapsed");
        assert_eq!(config.landing_page, "index.html");
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config =
            SidebarConfig::from_json(r#"{ "debounceMs": 100, "landingPage": "home.html" }"#)
                .expect("valid override");
        assert_eq!(config.debounce_ms, 100);
        assert_eq!(config.landing_page, "home.html");
        assert_eq!(config.toggle_selector, ".admin-header__toggle");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(SidebarConfig::from_json("{ debounceMs: }").is_err());
    }
}
