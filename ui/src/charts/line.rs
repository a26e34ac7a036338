use api::SeriesPoint;
use dioxus::prelude::*;

use super::geometry::{label_indices, nice_ticks, polyline_points, LinearScale};
use crate::core::dates::format_axis_date;
use crate::core::format::format_quantity;
use crate::t;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;
const MAX_DATE_LABELS: usize = 6;
/// Point markers are only drawn when they stay legible.
const MAX_MARKERS: usize = 45;

/// Planned vs. actual totals per date.
#[component]
pub fn LineChart(series: Vec<SeriesPoint>) -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { class: "dashboard-chart__title", {t!("chart-line-title")} }
                div { class: "dashboard-chart__legend",
                    span { class: "dashboard-chart__legend-item",
                        span { class: "dashboard-chart__legend-swatch dashboard-chart__legend-swatch--planned" }
                        {t!("chart-line-planned")}
                    }
                    span { class: "dashboard-chart__legend-item",
                        span { class: "dashboard-chart__legend-swatch dashboard-chart__legend-swatch--actual" }
                        {t!("chart-line-actual")}
                    }
                }
            }

            if series.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("chart-empty")} }
            } else {
                {render_plot(&series)}
            }
        }
    }
}

fn render_plot(series: &[SeriesPoint]) -> Element {
    let days = day_offsets(series);
    let planned: Vec<(f64, f64)> = days
        .iter()
        .zip(series)
        .map(|(day, p)| (*day, p.planned as f64))
        .collect();
    let actual: Vec<(f64, f64)> = days
        .iter()
        .zip(series)
        .map(|(day, p)| (*day, p.actual as f64))
        .collect();
    let max = planned
        .iter()
        .chain(actual.iter())
        .map(|(_, value)| *value)
        .fold(0.0, f64::max);

    let ticks = nice_ticks(max, 5);
    let top = ticks.last().copied().unwrap_or(1.0);
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let plot_right = WIDTH - MARGIN_RIGHT;

    let span = days.last().copied().unwrap_or(0.0);
    let x = LinearScale::new((0.0, span), (MARGIN_LEFT, plot_right));
    let y = LinearScale::new((0.0, top), (plot_bottom, MARGIN_TOP));

    let planned_points = polyline_points(&planned, &x, &y);
    let actual_points = polyline_points(&actual, &x, &y);

    let y_ticks: Vec<AxisTick> = ticks
        .iter()
        .map(|tick| {
            let pos = y.map(*tick);
            AxisTick {
                line: format!("{pos:.1}"),
                anchor: format!("{:.1}", pos + 4.0),
                label: format_quantity(*tick as i64),
            }
        })
        .collect();
    let x_labels: Vec<(String, String)> = label_indices(series.len(), MAX_DATE_LABELS)
        .into_iter()
        .map(|i| (format!("{:.1}", x.map(days[i])), format_axis_date(series[i].date)))
        .collect();
    let markers: Vec<(String, String, String)> = if series.len() <= MAX_MARKERS {
        (0..series.len())
            .map(|i| {
                (
                    format!("{:.1}", x.map(days[i])),
                    format!("{:.1}", y.map(planned[i].1)),
                    format!("{:.1}", y.map(actual[i].1)),
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let tick_x = MARGIN_LEFT - 8.0;
    let date_y = plot_bottom + 22.0;
    let axis_label_x = -(MARGIN_TOP + plot_bottom) / 2.0;
    let axis_label = t!("chart-line-axis");

    rsx! {
        svg {
            class: "dashboard-chart__plot",
            view_box: "{view_box}",
            role: "img",
            preserve_aspect_ratio: "xMidYMid meet",

            for tick in y_ticks {
                line { class: "dashboard-chart__grid", x1: "{MARGIN_LEFT}", x2: "{plot_right}", y1: "{tick.line}", y2: "{tick.line}" }
                text { class: "dashboard-chart__tick", x: "{tick_x}", y: "{tick.anchor}", text_anchor: "end", "{tick.label}" }
            }
            text {
                class: "dashboard-chart__axis-label",
                transform: "rotate(-90)",
                x: "{axis_label_x}",
                y: "14",
                text_anchor: "middle",
                "{axis_label}"
            }
            for (pos, label) in x_labels {
                text { class: "dashboard-chart__tick", x: "{pos}", y: "{date_y}", text_anchor: "middle", "{label}" }
            }
            line { class: "dashboard-chart__axis", x1: "{MARGIN_LEFT}", x2: "{plot_right}", y1: "{plot_bottom}", y2: "{plot_bottom}" }

            polyline { class: "dashboard-chart__line dashboard-chart__line--planned", points: "{planned_points}" }
            polyline { class: "dashboard-chart__line dashboard-chart__line--actual", points: "{actual_points}" }

            for (cx, planned_y, actual_y) in markers {
                circle { class: "dashboard-chart__marker dashboard-chart__marker--planned", cx: "{cx}", cy: "{planned_y}", r: "3" }
                circle { class: "dashboard-chart__marker dashboard-chart__marker--actual", cx: "{cx}", cy: "{actual_y}", r: "3" }
            }
        }
    }
}

struct AxisTick {
    line: String,
    anchor: String,
    label: String,
}

/// Calendar days since the first point, so gaps in the selection keep their
/// width on the time axis.
fn day_offsets(series: &[SeriesPoint]) -> Vec<f64> {
    let Some(first) = series.first().map(|p| p.date) else {
        return Vec::new();
    };
    series
        .iter()
        .map(|p| (p.date - first).whole_days() as f64)
        .collect()
}
