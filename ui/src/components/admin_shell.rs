use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::core::config::SidebarConfig;
use crate::i18n;
use crate::{sidebar, t};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// One sidebar entry. `href` is the bare page name the sidebar matches against the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "index.html", icon: "▦" },
    NavItem { href: "reports.html", icon: "▤" },
    NavItem { href: "users.html", icon: "☺" },
    NavItem { href: "settings.html", icon: "⚙" },
];

fn nav_label(href: &str) -> String {
    match href {
        "reports.html" => t!("nav-reports"),
        "users.html" => t!("nav-users"),
        "settings.html" => t!("nav-settings"),
        _ => t!("nav-dashboard"),
    }
}

/// Page frame: sidebar, header with the sidebar toggle and account dropdown, and the page
/// body in `children`. The sidebar controller is installed once, after the first mount.
#[component]
pub fn AdminShell(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    use_effect(|| {
        sidebar::install(SidebarConfig::default());
    });

    let on_lang_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => current_lang.set(tag),
            Err(err) => warn!("Could not switch language to {tag}: {err}"),
        }
    };

    // Labels are re-read on every render so a language switch shows up immediately.
    let lang_marker = current_lang();
    let account_menu_id = "account-menu";

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "admin-layout", "data-lang": "{lang_marker}",
            aside { class: "admin-sidebar",
                div { class: "admin-sidebar__brand",
                    span { class: "admin-sidebar__brand-mark", aria_hidden: "true" }
                    div { class: "admin-sidebar__brand-text",
                        span { class: "admin-sidebar__brand-name", {t!("brand-name")} }
                        span { class: "admin-sidebar__brand-subtitle", {t!("brand-subtitle")} }
                    }
                }
                nav { class: "admin-sidebar__nav",
                    span { class: "admin-sidebar__section", {t!("nav-section-main")} }
                    for item in NAV_ITEMS {
                        a {
                            key: "{item.href}",
                            class: "admin-sidebar__link",
                            href: item.href,
                            span { class: "admin-sidebar__icon", aria_hidden: "true", "{item.icon}" }
                            span { class: "admin-sidebar__label", {nav_label(item.href)} }
                        }
                    }
                }
            }

            div { class: "admin-main",
                header { class: "admin-header",
                    button {
                        class: "admin-header__toggle",
                        r#type: "button",
                        aria_label: t!("header-toggle-label"),
                        span { class: "admin-header__toggle-bar" }
                        span { class: "admin-header__toggle-bar" }
                        span { class: "admin-header__toggle-bar" }
                    }

                    div { class: "admin-header__actions",
                        if show_switcher {
                            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
                            select {
                                id: "locale-select",
                                class: "admin-header__locale",
                                value: "{current_lang()}",
                                oninput: on_lang_change,
                                for code in langs() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }

                        div { class: "dropdown",
                            button {
                                class: "dropdown__trigger",
                                r#type: "button",
                                "data-dropdown-toggle": account_menu_id,
                                {t!("header-account")}
                            }
                            ul { id: account_menu_id, class: "dropdown-menu",
                                li { a { class: "dropdown-menu__item", href: "settings.html", {t!("account-profile")} } }
                                li { a { class: "dropdown-menu__item", href: "index.html", {t!("account-sign-out")} } }
                            }
                        }
                    }
                }

                main { class: "admin-content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SidebarConfig;

    #[test]
    fn nav_hrefs_are_bare_page_names() {
        let landing = SidebarConfig::default().landing_page;
        assert_eq!(NAV_ITEMS[0].href, landing);
        for item in NAV_ITEMS {
            assert_eq!(sidebar::current_page(item.href, &landing), item.href);
        }
    }

    #[test]
    fn every_nav_item_has_its_own_label() {
        i18n::init();
        let mut labels: Vec<String> = NAV_ITEMS.iter().map(|item| nav_label(item.href)).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), NAV_ITEMS.len());
    }
}
