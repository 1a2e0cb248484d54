use dioxus_logger::tracing::{debug, error, warn};
use thiserror::Error;

use super::palette::{ChartColors, StyleSource};
use super::specs::{dashboard_charts, ChartSpec, DEFAULT_TEXT_COLOR, FONT_FAMILY};
use crate::core::timing::Clock;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Chart.js not loaded")]
    LibraryMissing,
    #[error("failed to build chart `{canvas_id}`: {reason}")]
    Construct { canvas_id: String, reason: String },
    #[error("no dashboard chart renders into `{0}`")]
    UnknownChart(String),
}

/// The charting library as seen from Rust.
pub trait ChartLibrary {
    fn is_available(&self) -> bool;
    fn apply_defaults(&self, font_family: &str, text_color: &str) -> Result<(), ChartError>;
    fn has_canvas(&self, canvas_id: &str) -> bool;
    fn render(&self, spec: &ChartSpec) -> Result<(), ChartError>;
}

/// Render every dashboard chart whose canvas is on the page. Returns how many rendered.
///
/// A missing library aborts the whole pass; a missing canvas or a failing chart only
/// skips that chart.
pub fn init_dashboard_charts<L, S>(library: &L, styles: &S) -> Result<usize, ChartError>
where
    L: ChartLibrary + ?Sized,
    S: StyleSource + ?Sized,
{
    prepare(library)?;

    let colors = ChartColors::resolve(styles);
    let mut rendered = 0;
    for spec in dashboard_charts(&colors) {
        if !library.has_canvas(spec.canvas_id) {
            debug!("no #{} on this page; skipping", spec.canvas_id);
            continue;
        }
        match library.render(&spec) {
            Ok(()) => rendered += 1,
            Err(err) => warn!("{err}"),
        }
    }

    Ok(rendered)
}

/// Render the single dashboard chart bound to `canvas_id`. `Ok(false)` means its canvas is
/// not on this page.
pub fn render_dashboard_chart<L, S>(library: &L, styles: &S, canvas_id: &str) -> Result<bool, ChartError>
where
    L: ChartLibrary + ?Sized,
    S: StyleSource + ?Sized,
{
    prepare(library)?;

    let spec = dashboard_charts(&ChartColors::resolve(styles))
        .into_iter()
        .find(|spec| spec.canvas_id == canvas_id)
        .ok_or_else(|| ChartError::UnknownChart(canvas_id.to_string()))?;
    if !library.has_canvas(spec.canvas_id) {
        debug!("no #{canvas_id} on this page; skipping");
        return Ok(false);
    }
    library.render(&spec).map(|()| true)
}

fn prepare<L: ChartLibrary + ?Sized>(library: &L) -> Result<(), ChartError> {
    if !library.is_available() {
        error!("Chart.js not loaded; dashboard charts disabled");
        return Err(ChartError::LibraryMissing);
    }
    if let Err(err) = library.apply_defaults(FONT_FAMILY, DEFAULT_TEXT_COLOR) {
        warn!("Could not set chart defaults: {err}");
    }
    Ok(())
}

/// Poll until the library's global is defined, for scripts loaded asynchronously.
pub async fn wait_for_library<L, C>(library: &L, clock: &C, attempts: u32, interval_ms: u64) -> bool
where
    L: ChartLibrary + ?Sized,
    C: Clock,
{
    for _ in 0..attempts {
        if library.is_available() {
            return true;
        }
        clock.sleep(interval_ms).await;
    }
    library.is_available()
}

/// The global `Chart` constructor.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

#[cfg(target_arch = "wasm32")]
pub use chart_js::{publish_dashboard_charts, DashboardCharts};

#[cfg(target_arch = "wasm32")]
mod chart_js {
    use dioxus_logger::tracing::warn;
    use js_sys::{Array, Function, Reflect, JSON};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{init_dashboard_charts, render_dashboard_chart, ChartError, ChartJs, ChartLibrary};
    use crate::charts::palette::ComputedStyle;
    use crate::charts::specs::{ChartSpec, REVENUE_CANVAS_ID, SALES_CANVAS_ID, TRAFFIC_CANVAS_ID};

    fn get(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn constructor() -> Option<Function> {
        let window = web_sys::window()?;
        get(&window, "Chart")?.dyn_into::<Function>().ok()
    }

    fn construct_error(spec: &ChartSpec, reason: impl std::fmt::Debug) -> ChartError {
        ChartError::Construct {
            canvas_id: spec.canvas_id.to_string(),
            reason: format!("{reason:?}"),
        }
    }

    impl ChartLibrary for ChartJs {
        fn is_available(&self) -> bool {
            constructor().is_some()
        }

        fn apply_defaults(&self, font_family: &str, text_color: &str) -> Result<(), ChartError> {
            let ctor = constructor().ok_or(ChartError::LibraryMissing)?;
            let defaults = get(&ctor, "defaults").ok_or(ChartError::LibraryMissing)?;
            if let Some(font) = get(&defaults, "font") {
                let _ = Reflect::set(&font, &"family".into(), &font_family.into());
            }
            let _ = Reflect::set(&defaults, &"color".into(), &text_color.into());
            Ok(())
        }

        fn has_canvas(&self, canvas_id: &str) -> bool {
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(canvas_id))
                .is_some()
        }

        fn render(&self, spec: &ChartSpec) -> Result<(), ChartError> {
            let ctor = constructor().ok_or(ChartError::LibraryMissing)?;
            let canvas = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(spec.canvas_id))
                .ok_or_else(|| construct_error(spec, "canvas missing"))?;

            let json = serde_json::to_string(&spec.config).map_err(|err| construct_error(spec, err))?;
            let config = JSON::parse(&json).map_err(|err| construct_error(spec, err))?;

            for (path, formatter) in &spec.formatters {
                let Some((last, parents)) = path.split_last() else {
                    continue;
                };
                let mut node = config.clone();
                for key in parents {
                    node = get(&node, key).ok_or_else(|| construct_error(spec, path))?;
                }
                let (args, body) = formatter.js_source();
                Reflect::set(&node, &JsValue::from_str(last), &Function::new_with_args(args, body))
                    .map_err(|err| construct_error(spec, err))?;
            }

            Reflect::construct(&ctor, &Array::of2(&canvas, &config))
                .map(|_| ())
                .map_err(|err| construct_error(spec, err))
        }
    }

    /// Script-facing chart entry points, published as `window.DashboardCharts`.
    #[wasm_bindgen]
    #[derive(Debug, Default)]
    pub struct DashboardCharts {
        styles: ComputedStyle,
    }

    #[wasm_bindgen]
    impl DashboardCharts {
        /// Render every chart whose canvas is present; returns how many rendered.
        #[wasm_bindgen(js_name = initCharts)]
        pub fn init_charts(&self) -> u32 {
            init_dashboard_charts(&ChartJs, &self.styles)
                .map(|rendered| u32::try_from(rendered).unwrap_or(u32::MAX))
                .unwrap_or(0)
        }

        #[wasm_bindgen(js_name = initRevenueChart)]
        pub fn init_revenue_chart(&self) -> bool {
            self.render_one(REVENUE_CANVAS_ID)
        }

        #[wasm_bindgen(js_name = initTrafficChart)]
        pub fn init_traffic_chart(&self) -> bool {
            self.render_one(TRAFFIC_CANVAS_ID)
        }

        #[wasm_bindgen(js_name = initSalesChart)]
        pub fn init_sales_chart(&self) -> bool {
            self.render_one(SALES_CANVAS_ID)
        }
    }

    impl DashboardCharts {
        fn render_one(&self, canvas_id: &str) -> bool {
            match render_dashboard_chart(&ChartJs, &self.styles, canvas_id) {
                Ok(rendered) => rendered,
                Err(err) => {
                    warn!("{err}");
                    false
                }
            }
        }
    }

    /// Expose [`DashboardCharts`] as `window.DashboardCharts`.
    pub fn publish_dashboard_charts() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = JsValue::from(DashboardCharts::default());
        if let Err(err) = Reflect::set(&window, &JsValue::from_str("DashboardCharts"), &handle) {
            warn!("Could not publish window.DashboardCharts: {err:?}");
        }
    }
}
