//! Shared crate for the Axis admin panel: the responsive sidebar, dashboard charts,
//! header dropdowns and the Dioxus shell that hosts them.

pub mod charts;
pub mod core;
pub mod dropdown;
pub mod i18n;
pub mod sidebar;
pub mod views;

pub mod components {
    // Sidebar, header and content frame shared by every page (components/admin_shell.rs)
    pub mod admin_shell;
    pub use admin_shell::{AdminShell, NavItem, NAV_ITEMS};
}

#[cfg(test)]
mod tests;
