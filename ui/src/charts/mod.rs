//! Dashboard charts rendered by Chart.js.
//!
//! - `palette`: theme colors read from CSS custom properties, with literal fallbacks
//! - `specs`: the three dashboard chart configurations as JSON plus JS formatter hooks
//! - `bridge`: the `ChartLibrary` seam, the Chart.js binding, the initializers and the
//!   `window.DashboardCharts` handle

mod bridge;
mod palette;
mod specs;

pub use bridge::{
    init_dashboard_charts, render_dashboard_chart, wait_for_library, ChartError, ChartLibrary,
};
#[cfg(target_arch = "wasm32")]
pub use bridge::{publish_dashboard_charts, ChartJs, DashboardCharts};
pub use palette::{ChartColors, StyleSource};
#[cfg(target_arch = "wasm32")]
pub use palette::ComputedStyle;
pub use specs::{
    dashboard_charts, ChartKind, ChartSpec, Formatter, DEFAULT_TEXT_COLOR, FONT_FAMILY,
    REVENUE_CANVAS_ID, SALES_CANVAS_ID, TRAFFIC_CANVAS_ID,
};
