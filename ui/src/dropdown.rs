//! Header dropdown menus.
//!
//! A trigger carries `data-dropdown-toggle="<menu id>"`; clicking it flips the menu's `show`
//! class. Any other click in the document closes every open menu.

use crate::sidebar::{ElementHandle, ViewBinder};

pub const TOGGLE_ATTRIBUTE: &str = "data-dropdown-toggle";
pub const TOGGLE_SELECTOR: &str = "[data-dropdown-toggle]";
pub const OPEN_CLASS: &str = "show";
pub const OPEN_MENU_SELECTOR: &str = ".dropdown-menu.show";

/// Flip the menu with id `target_id`. Returns the new open state, or `None` if no such
/// menu exists.
pub fn toggle<B: ViewBinder>(binder: &B, target_id: &str) -> Option<bool> {
    let menu = binder.element_by_id(target_id)?;
    let open = !menu.has_class(OPEN_CLASS);
    menu.set_class(OPEN_CLASS, open);
    Some(open)
}

/// Close every open menu; returns how many were closed.
pub fn close_all<B: ViewBinder>(binder: &B) -> usize {
    let open = binder.query_all(OPEN_MENU_SELECTOR);
    for menu in &open {
        menu.remove_class(OPEN_CLASS);
    }
    open.len()
}
