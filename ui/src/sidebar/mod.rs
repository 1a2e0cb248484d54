//! Responsive sidebar: desktop collapse with a remembered preference, a mobile slide-over
//! with a scroll-locking overlay, and active-link highlighting.
//!
//! The controller only talks to the page through [`ViewBinder`], and only learns about user
//! input through [`SidebarEvent`]s, so the whole state machine runs on the host against a
//! fake DOM. [`dom`] supplies the browser binder and event source.

mod controller;
pub mod dom;
mod events;
mod state;
mod view;

pub use controller::{current_page, ModeTransition, SidebarController};
pub use dom::install;
pub use events::{run_event_loop, EventSink, EventSource, SidebarEvent, SidebarRuntime};
pub use state::SidebarState;
pub use view::{bind_elements, ElementHandle, SidebarElements, SidebarError, ViewBinder};
