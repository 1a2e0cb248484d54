use dioxus_logger::tracing::{debug, error, warn};

use super::state::SidebarState;
use super::view::{bind_elements, ElementHandle, SidebarElements, SidebarError, ViewBinder};
use crate::core::config::SidebarConfig;
use crate::core::storage::{self, KeyValueStore};
use crate::core::viewport::ViewportMode;

/// What a resize pass did to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    Unchanged,
    MobileToDesktop,
    DesktopToMobile,
}

/// Owns the sidebar state and is the only writer of the classes and body style it manages.
pub struct SidebarController<B: ViewBinder, S: KeyValueStore> {
    binder: B,
    store: S,
    config: SidebarConfig,
    elements: SidebarElements<B::Element>,
    state: SidebarState,
}

impl<B: ViewBinder, S: KeyValueStore> SidebarController<B, S> {
    /// Bind to the page and apply the initial layout: viewport mode, the remembered
    /// desktop preference and active-link highlighting.
    pub fn try_initialize(binder: B, store: S, config: SidebarConfig) -> Result<Self, SidebarError> {
        let elements = bind_elements(&binder, &config)?;
        let mode = ViewportMode::from_width(binder.viewport_width(), config.mobile_breakpoint_px);

        let mut controller = Self {
            binder,
            store,
            config,
            elements,
            state: SidebarState::new(mode),
        };

        if !mode.is_mobile() {
            controller.restore_preference();
        }
        controller.set_active_page();

        debug!(
            "sidebar bound: mode={:?} collapsed={} links={}",
            controller.state.mode,
            controller.state.collapsed,
            controller.elements.nav_links.len()
        );
        Ok(controller)
    }

    /// Like [`Self::try_initialize`], but a page without the admin layout just disables
    /// the sidebar with a warning.
    pub fn initialize(binder: B, store: S, config: SidebarConfig) -> Option<Self> {
        match Self::try_initialize(binder, store, config) {
            Ok(controller) => Some(controller),
            Err(err) => {
                warn!("Admin panel elements not found, sidebar disabled: {err}");
                None
            }
        }
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn binder(&self) -> &B {
        &self.binder
    }

    pub fn elements(&self) -> &SidebarElements<B::Element> {
        &self.elements
    }

    /// Toggle-button entry point.
    pub fn toggle_sidebar(&mut self) {
        if self.state.is_mobile() {
            self.toggle_mobile_sidebar();
        } else {
            self.toggle_desktop_sidebar();
        }
    }

    pub fn toggle_desktop_sidebar(&mut self) {
        self.state.collapsed = !self.state.collapsed;
        self.apply_collapsed(self.state.collapsed);
        storage::save_flag(&self.store, &self.config.storage_key, self.state.collapsed);
    }

    /// Must only be called in mobile mode; [`Self::toggle_sidebar`] dispatches correctly.
    pub fn toggle_mobile_sidebar(&mut self) {
        debug_assert!(
            self.state.is_mobile(),
            "toggle_mobile_sidebar called in desktop mode"
        );
        if !self.state.is_mobile() {
            error!("toggle_mobile_sidebar called in desktop mode; ignoring");
            return;
        }
        self.set_mobile_open(!self.state.mobile_open);
    }

    pub fn close_mobile_sidebar(&mut self) {
        if self.state.mobile_open {
            self.set_mobile_open(false);
        }
    }

    /// Mark the nav link whose `href` equals the current page, and only that link.
    pub fn set_active_page(&self) {
        let pathname = self.binder.location_pathname();
        let page = current_page(&pathname, &self.config.landing_page);
        let active_class = &self.config.nav_link_active_class;

        for link in &self.elements.nav_links {
            let is_current = link.attribute("href").as_deref() == Some(page);
            link.set_class(active_class, is_current);
        }
    }

    pub fn handle_resize(&mut self) -> ModeTransition {
        let was_mobile = self.state.is_mobile();
        self.state.mode = ViewportMode::from_width(
            self.binder.viewport_width(),
            self.config.mobile_breakpoint_px,
        );

        let transition = match (was_mobile, self.state.is_mobile()) {
            (true, false) => {
                self.close_mobile_sidebar();
                self.elements
                    .sidebar
                    .remove_class(&self.config.mobile_open_class);
                self.restore_preference();
                ModeTransition::MobileToDesktop
            }
            (false, true) => {
                self.apply_collapsed(false);
                ModeTransition::DesktopToMobile
            }
            _ => ModeTransition::Unchanged,
        };

        if transition != ModeTransition::Unchanged {
            debug!("sidebar mode change: {transition:?}");
        }
        transition
    }

    /// Reload the stored desktop preference and reapply the class pair. Without a stored
    /// value the in-memory flag is reapplied so classes and state stay in step.
    fn restore_preference(&mut self) {
        if let Some(saved) = storage::load_flag(&self.store, &self.config.storage_key) {
            self.state.collapsed = saved;
        }
        self.apply_collapsed(self.state.collapsed);
    }

    fn apply_collapsed(&self, collapsed: bool) {
        self.elements
            .sidebar
            .set_class(&self.config.collapsed_class, collapsed);
        self.elements
            .main_content
            .set_class(&self.config.main_collapsed_class, collapsed);
    }

    fn set_mobile_open(&mut self, open: bool) {
        self.state.mobile_open = open;
        self.elements
            .sidebar
            .set_class(&self.config.mobile_open_class, open);
        self.elements
            .overlay
            .set_class(&self.config.overlay_active_class, open);
        self.binder
            .set_body_overflow(if open { "hidden" } else { "" });
    }
}

/// Last segment of `pathname`, or `landing` when that segment is empty.
pub fn current_page<'a>(pathname: &'a str, landing: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => landing,
    }
}
