use crate::core::viewport::ViewportMode;

/// Mutable sidebar state. `collapsed` only has a visible effect in desktop mode and
/// `mobile_open` only in mobile mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub mobile_open: bool,
    pub mode: ViewportMode,
}

impl SidebarState {
    pub fn new(mode: ViewportMode) -> Self {
        Self {
            collapsed: false,
            mobile_open: false,
            mode,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mode.is_mobile()
    }
}
