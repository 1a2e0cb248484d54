//! Secondary admin pages. They share the shell and exist so the sidebar has real
//! destinations to highlight.

use dioxus::prelude::*;

use crate::t;

#[component]
fn PlaceholderPage(modifier: &'static str, title: String, body: String) -> Element {
    rsx! {
        section { class: "page page-{modifier}",
            header { class: "page__header",
                h1 { class: "page__title", "{title}" }
            }
            div { class: "card",
                p { class: "card__placeholder", "{body}" }
            }
        }
    }
}

#[component]
pub fn Reports() -> Element {
    rsx! {
        PlaceholderPage { modifier: "reports", title: t!("reports-title"), body: t!("reports-body") }
    }
}

#[component]
pub fn Users() -> Element {
    rsx! {
        PlaceholderPage { modifier: "users", title: t!("users-title"), body: t!("users-body") }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PlaceholderPage { modifier: "settings", title: t!("settings-title"), body: t!("settings-body") }
    }
}
