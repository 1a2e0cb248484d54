use thiserror::Error;

use crate::core::config::SidebarConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SidebarError {
    #[error("required {role} element `{selector}` not found")]
    MissingElement {
        role: &'static str,
        selector: String,
    },
    #[error("could not create the mobile overlay")]
    OverlayUnavailable,
}

/// A live element the controller can restyle.
pub trait ElementHandle: Clone {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Page access for the sidebar controller and dropdowns.
pub trait ViewBinder {
    type Element: ElementHandle;

    /// First element in the document matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// Every element in the document matching `selector`.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Every descendant of `root` matching `selector`.
    fn query_all_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Create the overlay node, attach it to the page and return it.
    fn create_overlay(&self, class_name: &str, active_class: &str) -> Option<Self::Element>;

    /// Set `document.body.style.overflow`; the empty string restores the default.
    fn set_body_overflow(&self, value: &str);
    fn viewport_width(&self) -> f64;
    fn location_pathname(&self) -> String;
}

/// Typed handles to every node the controller manages.
#[derive(Debug, Clone)]
pub struct SidebarElements<E> {
    pub sidebar: E,
    pub main_content: E,
    pub toggle_button: E,
    pub overlay: E,
    pub nav_links: Vec<E>,
}

/// Resolve the required nodes and create the overlay. The overlay is only created once
/// the three required nodes are known to exist.
pub fn bind_elements<B: ViewBinder>(
    binder: &B,
    config: &SidebarConfig,
) -> Result<SidebarElements<B::Element>, SidebarError> {
    let require = |role: &'static str, selector: &str| {
        binder
            .query(selector)
            .ok_or_else(|| SidebarError::MissingElement {
                role,
                selector: selector.to_string(),
            })
    };

    let sidebar = require("sidebar", &config.sidebar_selector)?;
    let main_content = require("main content", &config.main_selector)?;
    let toggle_button = require("toggle button", &config.toggle_selector)?;

    let overlay = binder
        .create_overlay(&config.overlay_class, &config.overlay_active_class)
        .ok_or(SidebarError::OverlayUnavailable)?;
    let nav_links = binder.query_all_within(&sidebar, &config.nav_link_selector);

    Ok(SidebarElements {
        sidebar,
        main_content,
        toggle_button,
        overlay,
        nav_links,
    })
}
