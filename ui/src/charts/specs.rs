use serde_json::{json, Value};

use super::palette::ChartColors;

pub const FONT_FAMILY: &str = "'Inter', sans-serif";
pub const DEFAULT_TEXT_COLOR: &str = "#6c757d";

pub const REVENUE_CANVAS_ID: &str = "revenueChart";
pub const TRAFFIC_CANVAS_ID: &str = "trafficChart";
pub const SALES_CANVAS_ID: &str = "salesChart";

const REVENUE_TICK_CALLBACK: &[&str] = &["options", "scales", "y", "ticks", "callback"];
const TRAFFIC_LABEL_CALLBACK: &[&str] = &["options", "plugins", "tooltip", "callbacks", "label"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Doughnut => "doughnut",
            Self::Bar => "bar",
        }
    }
}

/// JS callbacks Chart.js needs that JSON cannot carry. The bridge installs them at `path`
/// inside the parsed config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// `$12,500` axis ticks.
    CurrencyTicks,
    /// `Direct: 35%` tooltip labels.
    PercentLabel,
}

impl Formatter {
    /// `(argument list, function body)` for `new Function`.
    pub fn js_source(self) -> (&'static str, &'static str) {
        match self {
            Self::CurrencyTicks => ("value", "return '$' + value.toLocaleString();"),
            Self::PercentLabel => (
                "context",
                "return (context.label || '') + ': ' + (context.parsed || 0) + '%';",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub canvas_id: &'static str,
    pub kind: ChartKind,
    /// Complete `{ type, data, options }` object for the `Chart` constructor.
    pub config: Value,
    pub formatters: Vec<(&'static [&'static str], Formatter)>,
}

/// The three dashboard charts, in render order.
pub fn dashboard_charts(colors: &ChartColors) -> Vec<ChartSpec> {
    vec![
        revenue_chart(colors),
        traffic_chart(colors),
        sales_chart(colors),
    ]
}

fn font(size: u32) -> Value {
    json!({ "family": FONT_FAMILY, "size": size })
}

fn base_options() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "display": true,
                "position": "bottom",
                "labels": { "padding": 15, "font": font(12) }
            },
            "tooltip": {
                "backgroundColor": "rgba(0, 0, 0, 0.8)",
                "padding": 12,
                "cornerRadius": 8,
                "titleFont": { "family": FONT_FAMILY, "size": 14, "weight": "600" },
                "bodyFont": font(13)
            }
        }
    })
}

/// Deep-merge `patch` into `target`: objects merge key by key, anything else replaces.
fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, patch) => *target = patch,
    }
}

fn options_with(patch: Value) -> Value {
    let mut options = base_options();
    merge(&mut options, patch);
    options
}

fn cartesian_scales(y_ticks: Value) -> Value {
    json!({
        "y": {
            "beginAtZero": true,
            "ticks": y_ticks,
            "grid": { "color": "rgba(0, 0, 0, 0.05)", "drawBorder": false }
        },
        "x": {
            "grid": { "display": false, "drawBorder": false },
            "ticks": { "font": font(11) }
        }
    })
}

fn revenue_chart(colors: &ChartColors) -> ChartSpec {
    let series = |label: &str, data: Value, color: &str, fill: &str, width: u32, radius: u32| {
        json!({
            "label": label,
            "data": data,
            "borderColor": color,
            "backgroundColor": fill,
            "borderWidth": width,
            "fill": true,
            "tension": 0.4,
            "pointRadius": radius,
            "pointHoverRadius": radius + 2,
            "pointBackgroundColor": color,
            "pointBorderColor": "#fff",
            "pointBorderWidth": 2
        })
    };

    let data = json!({
        "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
        "datasets": [
            series(
                "Revenue 2024",
                json!([12500, 19200, 15800, 22400, 28900, 32100, 29500, 35800, 41200, 38900, 45600, 48392]),
                &colors.secondary,
                "rgba(95, 201, 243, 0.1)",
                3,
                4,
            ),
            series(
                "Revenue 2023",
                json!([10200, 15800, 13200, 18900, 22100, 25800, 23400, 28900, 32500, 30100, 35200, 38100]),
                &colors.accent,
                "rgba(46, 121, 186, 0.05)",
                2,
                3,
            ),
        ]
    });

    let options = options_with(json!({
        "scales": cartesian_scales(json!({ "font": font(11) })),
        "interaction": { "intersect": false, "mode": "index" }
    }));

    ChartSpec {
        canvas_id: REVENUE_CANVAS_ID,
        kind: ChartKind::Line,
        config: json!({ "type": ChartKind::Line.as_str(), "data": data, "options": options }),
        formatters: vec![(REVENUE_TICK_CALLBACK, Formatter::CurrencyTicks)],
    }
}

fn traffic_chart(colors: &ChartColors) -> ChartSpec {
    let data = json!({
        "labels": ["Direct", "Organic Search", "Social Media", "Referral", "Email"],
        "datasets": [{
            "data": [35, 28, 18, 12, 7],
            "backgroundColor": [
                colors.primary,
                colors.secondary,
                colors.accent,
                colors.success,
                colors.warning
            ],
            "borderWidth": 0,
            "hoverOffset": 10
        }]
    });

    let options = options_with(json!({
        "cutout": "65%",
        "plugins": {
            "legend": { "position": "right" },
            "tooltip": { "callbacks": {} }
        }
    }));

    ChartSpec {
        canvas_id: TRAFFIC_CANVAS_ID,
        kind: ChartKind::Doughnut,
        config: json!({ "type": ChartKind::Doughnut.as_str(), "data": data, "options": options }),
        formatters: vec![(TRAFFIC_LABEL_CALLBACK, Formatter::PercentLabel)],
    }
}

fn sales_chart(colors: &ChartColors) -> ChartSpec {
    let data = json!({
        "labels": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        "datasets": [{
            "label": "Sales",
            "data": [65, 78, 90, 81, 95, 105, 88],
            "backgroundColor": colors.secondary,
            "borderColor": colors.secondary,
            "borderWidth": 0,
            "borderRadius": 6,
            "barThickness": 30
        }]
    });

    let options = options_with(json!({
        "scales": cartesian_scales(json!({ "font": font(11) }))
    }));

    ChartSpec {
        canvas_id: SALES_CANVAS_ID,
        kind: ChartKind::Bar,
        config: json!({ "type": ChartKind::Bar.as_str(), "data": data, "options": options }),
        formatters: Vec::new(),
    }
}
