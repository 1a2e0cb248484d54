use dioxus_logger::tracing::debug;
use futures::future::{self, Either};
use futures::StreamExt;
use futures_channel::mpsc::{UnboundedReceiver, UnboundedSender};

use super::controller::{ModeTransition, SidebarController};
use super::view::{SidebarElements, ViewBinder};
use crate::core::storage::KeyValueStore;
use crate::core::timing::{Clock, Debouncer};
use crate::dropdown;

/// Everything that can change the sidebar or dropdowns, as delivered by an event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    ToggleClicked,
    OverlayClicked,
    NavLinkClicked,
    KeyDown(String),
    Resized,
    /// Wake-up with no input of its own; lets a pending debounce fire.
    Tick,
    /// Programmatic close (public handle).
    CloseRequested,
    /// Programmatic re-highlight (public handle).
    RefreshActivePage,
    DropdownToggleClicked(String),
    DocumentClicked,
}

pub type EventSink = UnboundedSender<SidebarEvent>;

/// Something that turns page input into [`SidebarEvent`]s. `attach` is called once, after
/// the controller has bound its elements, and must register each listener exactly once.
pub trait EventSource {
    type Element;

    fn attach(&self, elements: &SidebarElements<Self::Element>, sink: EventSink);
}

/// Controller plus the resize debouncer. All input goes through [`Self::dispatch`] with the
/// time it happened at.
pub struct SidebarRuntime<B: ViewBinder, S: KeyValueStore> {
    controller: SidebarController<B, S>,
    resize: Debouncer,
}

impl<B: ViewBinder, S: KeyValueStore> SidebarRuntime<B, S> {
    pub fn new(controller: SidebarController<B, S>) -> Self {
        let resize = Debouncer::new(controller.config().debounce_ms);
        Self { controller, resize }
    }

    pub fn controller(&self) -> &SidebarController<B, S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SidebarController<B, S> {
        &mut self.controller
    }

    pub fn into_controller(self) -> SidebarController<B, S> {
        self.controller
    }

    /// Deliver one event. A debounced resize that fell due before `now_ms` runs first; its
    /// outcome is returned.
    pub fn dispatch(&mut self, event: SidebarEvent, now_ms: u64) -> Option<ModeTransition> {
        let fired = self.advance_to(now_ms);
        let controller = &mut self.controller;

        match event {
            SidebarEvent::ToggleClicked => controller.toggle_sidebar(),
            SidebarEvent::OverlayClicked | SidebarEvent::CloseRequested => {
                controller.close_mobile_sidebar()
            }
            SidebarEvent::NavLinkClicked => {
                if controller.state().is_mobile() {
                    controller.close_mobile_sidebar();
                }
            }
            SidebarEvent::KeyDown(key) => {
                if key == "Escape" && controller.state().mobile_open {
                    controller.close_mobile_sidebar();
                }
            }
            SidebarEvent::Resized => self.resize.schedule(now_ms),
            SidebarEvent::Tick => {}
            SidebarEvent::RefreshActivePage => controller.set_active_page(),
            SidebarEvent::DropdownToggleClicked(target) => {
                if dropdown::toggle(controller.binder(), &target).is_none() {
                    debug!("no dropdown menu `{target}`; toggle ignored");
                }
            }
            SidebarEvent::DocumentClicked => {
                dropdown::close_all(controller.binder());
            }
        }

        fired
    }

    /// Run the debounced resize if it is due at `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) -> Option<ModeTransition> {
        if self.resize.take_due(now_ms) {
            Some(self.controller.handle_resize())
        } else {
            None
        }
    }

    /// Time until the pending resize is due, if one is pending.
    pub fn pending_wait(&self, now_ms: u64) -> Option<u64> {
        self.resize.remaining(now_ms)
    }
}

/// Drive `runtime` from `events` until the channel closes, firing the debounced resize when
/// its quiet window elapses. A newly arrived event cancels the in-flight sleep.
pub async fn run_event_loop<B, S, C>(
    mut runtime: SidebarRuntime<B, S>,
    mut events: UnboundedReceiver<SidebarEvent>,
    clock: C,
) -> SidebarRuntime<B, S>
where
    B: ViewBinder,
    S: KeyValueStore,
    C: Clock,
{
    loop {
        let now = clock.now_ms();
        runtime.advance_to(now);

        let next = match runtime.pending_wait(now) {
            Some(wait) => match future::select(events.next(), clock.sleep(wait)).await {
                Either::Left((event, _)) => event,
                Either::Right(((), _)) => Some(SidebarEvent::Tick),
            },
            None => events.next().await,
        };

        match next {
            Some(event) => {
                runtime.dispatch(event, clock.now_ms());
            }
            None => break,
        }
    }

    runtime
}
