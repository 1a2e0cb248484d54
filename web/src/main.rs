use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use ui::components::AdminShell;
use ui::views::{Dashboard, Reports, Settings, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/", Dashboard)]
    Root {},
    #[route("/index.html")]
    Dashboard {},
    #[route("/reports.html")]
    Reports {},
    #[route("/users.html")]
    Users {},
    #[route("/settings.html")]
    Settings {},
}

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        Router::<Route> {}
    }
}

/// The shared admin frame around the web `Route` outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        AdminShell {
            Outlet::<Route> {}
        }
    }
}
