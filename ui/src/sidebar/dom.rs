//! Browser wiring for the sidebar: a `web-sys` [`ViewBinder`], the DOM [`EventSource`], and
//! the `window.AdminPanel` handle.
//!
//! `install` is the only entry point the rest of the app needs. It is a no-op (returning
//! `false`) off the browser, and on pages without the admin layout.

use std::sync::Once;

use crate::core::config::SidebarConfig;

static INSTALL: Once = Once::new();

/// Bind the sidebar to the current page, register its listeners and start its event loop.
/// Only the first call per page does anything.
pub fn install(config: SidebarConfig) -> bool {
    let mut installed = false;
    INSTALL.call_once(|| installed = browser::install_once(config));
    installed
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use crate::core::config::SidebarConfig;

    pub(super) fn install_once(_config: SidebarConfig) -> bool {
        dioxus_logger::tracing::debug!("sidebar install skipped: no browser document");
        false
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{AdminPanel, DomBinder, DomElement, DomEventSource};

#[cfg(target_arch = "wasm32")]
mod browser {
    use futures_channel::mpsc;
    use dioxus_logger::tracing::{info, warn};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, EventTarget, KeyboardEvent, NodeList};

    use crate::core::config::SidebarConfig;
    use crate::core::platform;
    use crate::core::storage::BrowserStorage;
    use crate::core::timing::BrowserClock;
    use crate::dropdown;
    use crate::sidebar::events::{run_event_loop, EventSink, EventSource, SidebarEvent, SidebarRuntime};
    use crate::sidebar::view::{ElementHandle, SidebarElements, ViewBinder};
    use crate::sidebar::SidebarController;

    const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
        background-color: rgba(0, 0, 0, 0.5); z-index: 999; display: none; opacity: 0; \
        transition: opacity 0.3s ease;";

    #[derive(Debug, Clone)]
    pub struct DomElement(pub Element);

    impl ElementHandle for DomElement {
        fn add_class(&self, class: &str) {
            let _ = self.0.class_list().add_1(class);
        }

        fn remove_class(&self, class: &str) {
            let _ = self.0.class_list().remove_1(class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.class_list().contains(class)
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get_attribute(name)
        }
    }

    /// Binds against `window.document`, resolved per call.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomBinder;

    fn elements_of(list: Result<NodeList, JsValue>) -> Vec<DomElement> {
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomElement)
            .collect()
    }

    impl ViewBinder for DomBinder {
        type Element = DomElement;

        fn query(&self, selector: &str) -> Option<DomElement> {
            platform::document()?
                .query_selector(selector)
                .ok()
                .flatten()
                .map(DomElement)
        }

        fn query_all(&self, selector: &str) -> Vec<DomElement> {
            platform::document()
                .map(|document| elements_of(document.query_selector_all(selector)))
                .unwrap_or_default()
        }

        fn query_all_within(&self, root: &DomElement, selector: &str) -> Vec<DomElement> {
            elements_of(root.0.query_selector_all(selector))
        }

        fn element_by_id(&self, id: &str) -> Option<DomElement> {
            platform::document()?.get_element_by_id(id).map(DomElement)
        }

        fn create_overlay(&self, class_name: &str, active_class: &str) -> Option<DomElement> {
            let document = platform::document()?;
            let overlay = document.create_element("div").ok()?;
            overlay.set_class_name(class_name);
            overlay.set_attribute("style", OVERLAY_STYLE).ok()?;
            document.body()?.append_child(&overlay).ok()?;

            if let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) {
                style.set_text_content(Some(&format!(
                    ".{class_name}.{active_class} {{ display: block; opacity: 1; }}"
                )));
                let _ = head.append_child(&style);
            }

            Some(DomElement(overlay))
        }

        fn set_body_overflow(&self, value: &str) {
            if let Some(body) = platform::document().and_then(|document| document.body()) {
                let _ = body.style().set_property("overflow", value);
            }
        }

        fn viewport_width(&self) -> f64 {
            web_sys::window()
                .and_then(|window| window.inner_width().ok())
                .and_then(|width| width.as_f64())
                .unwrap_or(0.0)
        }

        fn location_pathname(&self) -> String {
            web_sys::window()
                .and_then(|window| window.location().pathname().ok())
                .unwrap_or_default()
        }
    }

    /// Page-lifetime DOM listeners feeding the sidebar event loop.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomEventSource;

    fn listen<F>(target: &EventTarget, kind: &str, mut handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| handler(event));
        if let Err(err) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            warn!("Could not register `{kind}` listener: {err:?}");
        }
        // Listeners live as long as the page.
        closure.forget();
    }

    fn forward(sink: &EventSink, event: SidebarEvent) {
        let _ = sink.unbounded_send(event);
    }

    impl EventSource for DomEventSource {
        type Element = DomElement;

        fn attach(&self, elements: &SidebarElements<DomElement>, sink: EventSink) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };

            let tx = sink.clone();
            listen(elements.toggle_button.0.as_ref(), "click", move |_| {
                forward(&tx, SidebarEvent::ToggleClicked)
            });

            let tx = sink.clone();
            listen(elements.overlay.0.as_ref(), "click", move |_| {
                forward(&tx, SidebarEvent::OverlayClicked)
            });

            for link in &elements.nav_links {
                let tx = sink.clone();
                listen(link.0.as_ref(), "click", move |_| {
                    forward(&tx, SidebarEvent::NavLinkClicked)
                });
            }

            let tx = sink.clone();
            listen(window.as_ref(), "resize", move |_| {
                forward(&tx, SidebarEvent::Resized)
            });

            let tx = sink.clone();
            listen(document.as_ref(), "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                    forward(&tx, SidebarEvent::KeyDown(key_event.key()));
                }
            });

            for trigger in DomBinder.query_all(dropdown::TOGGLE_SELECTOR) {
                let Some(target) = trigger.attribute(dropdown::TOGGLE_ATTRIBUTE) else {
                    continue;
                };
                let tx = sink.clone();
                listen(trigger.0.as_ref(), "click", move |event| {
                    event.stop_propagation();
                    forward(&tx, SidebarEvent::DropdownToggleClicked(target.clone()));
                });
            }

            listen(document.as_ref(), "click", move |_| {
                forward(&sink, SidebarEvent::DocumentClicked)
            });
        }
    }

    /// Script-facing handle published as `window.AdminPanel`.
    #[wasm_bindgen]
    pub struct AdminPanel {
        events: EventSink,
    }

    #[wasm_bindgen]
    impl AdminPanel {
        #[wasm_bindgen(js_name = toggleSidebar)]
        pub fn toggle_sidebar(&self) {
            forward(&self.events, SidebarEvent::ToggleClicked);
        }

        #[wasm_bindgen(js_name = closeMobileSidebar)]
        pub fn close_mobile_sidebar(&self) {
            forward(&self.events, SidebarEvent::CloseRequested);
        }

        #[wasm_bindgen(js_name = setActivePage)]
        pub fn set_active_page(&self) {
            forward(&self.events, SidebarEvent::RefreshActivePage);
        }
    }

    pub(super) fn install_once(config: SidebarConfig) -> bool {
        let Some(controller) = SidebarController::initialize(DomBinder, BrowserStorage, config)
        else {
            return false;
        };

        let (tx, rx) = mpsc::unbounded();
        DomEventSource.attach(controller.elements(), tx.clone());

        if let Some(window) = web_sys::window() {
            let panel = JsValue::from(AdminPanel { events: tx });
            if let Err(err) = js_sys::Reflect::set(&window, &JsValue::from_str("AdminPanel"), &panel)
            {
                warn!("Could not publish window.AdminPanel: {err:?}");
            }
        }

        let runtime = SidebarRuntime::new(controller);
        platform::spawn_future(async move {
            let _ = run_event_loop(runtime, rx, BrowserClock).await;
        });

        info!("admin sidebar installed");
        true
    }
}
