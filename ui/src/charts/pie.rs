use api::CategoryShare;
use dioxus::prelude::*;

use super::geometry::slice_path;
use crate::core::format::{format_percent, format_quantity};
use crate::dashboard::labels::category_label;
use crate::t;

const SIZE: f64 = 240.0;
const RADIUS: f64 = 110.0;

/// Share of actual output per category.
#[component]
pub fn PieChart(shares: Vec<CategoryShare>) -> Element {
    let total: i64 = shares.iter().map(|s| s.actual).sum();

    rsx! {
        section { class: "dashboard-card dashboard-chart dashboard-pie",
            div { class: "dashboard-card__header",
                h2 { class: "dashboard-chart__title", {t!("chart-pie-title")} }
            }

            if total <= 0 {
                p { class: "dashboard-card__placeholder", {t!("chart-empty")} }
            } else {
                {render_pie(&shares)}
            }
        }
    }
}

struct Slice {
    key: &'static str,
    path: String,
    label: String,
    value: String,
    percent: String,
}

fn slices(shares: &[CategoryShare]) -> Vec<Slice> {
    let center = SIZE / 2.0;
    let mut cursor = 0.0;
    shares
        .iter()
        .filter(|share| share.fraction > 0.0)
        .map(|share| {
            let start = cursor;
            cursor += share.fraction;
            Slice {
                key: share.category.key(),
                path: slice_path(center, center, RADIUS, start, cursor),
                label: category_label(share.category),
                value: format_quantity(share.actual),
                percent: format_percent(share.fraction),
            }
        })
        .collect()
}

fn render_pie(shares: &[CategoryShare]) -> Element {
    let slices = slices(shares);
    let view_box = format!("0 0 {SIZE} {SIZE}");

    rsx! {
        div { class: "dashboard-pie__body",
            svg {
                class: "dashboard-pie__plot",
                view_box: "{view_box}",
                role: "img",
                for slice in slices.iter() {
                    path {
                        key: "{slice.key}",
                        class: "dashboard-pie__slice dashboard-pie__slice--{slice.key}",
                        d: "{slice.path}",
                    }
                }
            }
            ul { class: "dashboard-pie__legend",
                for slice in slices.iter() {
                    li { key: "{slice.key}", class: "dashboard-pie__legend-item",
                        span { class: "dashboard-pie__swatch dashboard-pie__slice--{slice.key}" }
                        span { class: "dashboard-pie__legend-label", "{slice.label}" }
                        span { class: "dashboard-pie__legend-value", "{slice.value} · {slice.percent}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Category;

    #[test]
    fn slices_are_contiguous_and_skip_empty_categories() {
        let shares = vec![
            CategoryShare { category: Category::Switches, actual: 90, fraction: 0.25 },
            CategoryShare { category: Category::RepairKits, actual: 0, fraction: 0.0 },
            CategoryShare { category: Category::Frogs, actual: 270, fraction: 0.75 },
        ];
        let slices = slices(&shares);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].key, "switches");
        assert_eq!(slices[0].percent, "25.0%");
        assert_eq!(slices[1].path, slice_path(120.0, 120.0, RADIUS, 0.25, 1.0));
    }
}
