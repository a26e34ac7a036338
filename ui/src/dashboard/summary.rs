use api::Summary;
use dioxus::prelude::*;

use crate::core::format::{format_quantity, format_signed};
use crate::t;

#[component]
pub fn SummaryTable(summary: Summary) -> Element {
    let deviation_class = deviation_class(summary.deviation);

    rsx! {
        section { class: "dashboard-card dashboard-summary",
            div { class: "dashboard-card__header",
                h2 { {t!("summary-title")} }
            }
            table { class: "dashboard-summary__table",
                thead {
                    tr {
                        th { {t!("summary-indicator")} }
                        th { {t!("summary-value")} }
                    }
                }
                tbody {
                    tr {
                        td { {t!("summary-planned")} }
                        td { class: "dashboard-summary__value", "{format_quantity(summary.planned)}" }
                    }
                    tr {
                        td { {t!("summary-actual")} }
                        td { class: "dashboard-summary__value", "{format_quantity(summary.actual)}" }
                    }
                    tr {
                        td { {t!("summary-deviation")} }
                        td { class: "dashboard-summary__value {deviation_class}", "{format_signed(summary.deviation)}" }
                    }
                }
            }
        }
    }
}

/// Shortfall (plan above actual) is flagged; overproduction is not.
fn deviation_class(deviation: i64) -> &'static str {
    match deviation {
        d if d > 0 => "dashboard-summary__value--shortfall",
        d if d < 0 => "dashboard-summary__value--surplus",
        _ => "",
    }
}
