use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::charts::{REVENUE_CANVAS_ID, SALES_CANVAS_ID, TRAFFIC_CANVAS_ID};
use crate::t;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

/// How long to wait for the CDN script before giving up: 50 polls, 100 ms apart.
pub const LIBRARY_POLL_ATTEMPTS: u32 = 50;
pub const LIBRARY_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatCard {
    value: &'static str,
    change_percent: i32,
    modifier: &'static str,
}

const STATS: [StatCard; 4] = [
    StatCard { value: "$48,392", change_percent: 12, modifier: "revenue" },
    StatCard { value: "2,847", change_percent: 8, modifier: "users" },
    StatCard { value: "1,423", change_percent: 5, modifier: "orders" },
    StatCard { value: "3.24%", change_percent: -2, modifier: "conversion" },
];

fn stat_label(modifier: &str) -> String {
    match modifier {
        "users" => t!("stat-users"),
        "orders" => t!("stat-orders"),
        "conversion" => t!("stat-conversion"),
        _ => t!("stat-revenue"),
    }
}

fn change_class(percent: i32) -> &'static str {
    if percent < 0 {
        "stat-card__change stat-card__change--down"
    } else {
        "stat-card__change"
    }
}

#[component]
pub fn Dashboard() -> Element {
    use_effect(render_charts);

    rsx! {
        document::Script { src: CHART_JS_CDN }

        section { class: "page page-dashboard",
            header { class: "page__header",
                h1 { class: "page__title", {t!("dashboard-title")} }
                p { class: "page__subtitle", {t!("dashboard-subtitle")} }
            }

            div { class: "stats-grid",
                for stat in STATS {
                    div { key: "{stat.modifier}", class: "stat-card stat-card--{stat.modifier}",
                        span { class: "stat-card__label", {stat_label(stat.modifier)} }
                        strong { class: "stat-card__value", "{stat.value}" }
                        span { class: change_class(stat.change_percent),
                            {t!("stat-change", percent = stat.change_percent)}
                        }
                    }
                }
            }

            div { class: "charts-grid",
                div { class: "card chart-card chart-card--wide",
                    h2 { class: "card__title", {t!("chart-revenue-title")} }
                    div { class: "chart-card__canvas", canvas { id: REVENUE_CANVAS_ID } }
                }
                div { class: "card chart-card",
                    h2 { class: "card__title", {t!("chart-traffic-title")} }
                    div { class: "chart-card__canvas", canvas { id: TRAFFIC_CANVAS_ID } }
                }
                div { class: "card chart-card",
                    h2 { class: "card__title", {t!("chart-sales-title")} }
                    div { class: "chart-card__canvas", canvas { id: SALES_CANVAS_ID } }
                }
            }
        }
    }
}

/// Wait for the Chart.js global, publish `window.DashboardCharts`, then render every chart
/// whose canvas is mounted.
fn render_charts() {
    if !crate::core::platform::has_document() {
        tracing::debug!("no browser document; dashboard charts skipped");
        return;
    }

    #[cfg(target_arch = "wasm32")]
    crate::core::platform::spawn_future(async {
        use crate::charts::{
            init_dashboard_charts, publish_dashboard_charts, wait_for_library, ChartJs, ComputedStyle,
        };
        use crate::core::timing::BrowserClock;

        let loaded = wait_for_library(
            &ChartJs,
            &BrowserClock,
            LIBRARY_POLL_ATTEMPTS,
            LIBRARY_POLL_INTERVAL_MS,
        )
        .await;
        if !loaded {
            tracing::warn!(
                "Chart.js still missing after {} ms",
                u64::from(LIBRARY_POLL_ATTEMPTS) * LIBRARY_POLL_INTERVAL_MS
            );
        }
        publish_dashboard_charts();
        if let Ok(rendered) = init_dashboard_charts(&ChartJs, &ComputedStyle) {
            tracing::info!("rendered {rendered} dashboard chart(s)");
        }
    });
}
