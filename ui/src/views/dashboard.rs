use api::{DashboardFilters, FilterOptions};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::charts::{LineChart, PieChart};
use crate::dashboard::{ExportPanel, FilterPanel, SummaryTable};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to the global language code (if provided) so the page re-renders on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    debug!(lang = %lang_marker, "dashboard render");

    let options = use_resource(|| async move { api::dashboard_options().await });

    let body = match &*options.read_unchecked() {
        None => rsx! {
            p { class: "dashboard-card__placeholder", {t!("dashboard-loading")} }
        },
        Some(Err(err)) => rsx! {
            p { class: "dashboard-card__placeholder dashboard-card__placeholder--error",
                {t!("dashboard-error", error = err.to_string())}
            }
        },
        Some(Ok(options)) => match initial_filters(options) {
            Some(initial) => rsx! {
                DashboardPanels { options: options.clone(), initial }
            },
            None => rsx! {
                p { class: "dashboard-card__placeholder", {t!("dashboard-no-data")} }
            },
        },
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { {t!("dashboard-intro")} }
            {body}
        }
    }
}

/// Full span with every option selected, selections kept sorted.
fn initial_filters(options: &FilterOptions) -> Option<DashboardFilters> {
    let mut filters = DashboardFilters::full_range(options)?;
    filters.categories.sort();
    filters.workshops.sort();
    Some(filters)
}

#[component]
fn DashboardPanels(options: FilterOptions, initial: DashboardFilters) -> Element {
    let filters = use_signal(move || initial);

    // Re-runs whenever `filters` changes; a stale request is dropped.
    let view = use_resource(move || async move { api::load_dashboard(filters()).await });

    let (content, matching_rows) = match &*view.read_unchecked() {
        None => (
            rsx! {
                p { class: "dashboard-card__placeholder", {t!("dashboard-loading")} }
            },
            None,
        ),
        Some(Err(err)) => (
            rsx! {
                p { class: "dashboard-card__placeholder dashboard-card__placeholder--error",
                    {t!("dashboard-error", error = err.to_string())}
                }
            },
            None,
        ),
        Some(Ok(view)) => (
            rsx! {
                div { class: "dashboard__charts",
                    LineChart { series: view.series.clone() }
                    PieChart { shares: view.shares.clone() }
                }
                div { class: "dashboard__panels",
                    SummaryTable { summary: view.summary }
                    ExportPanel { view: view.clone() }
                }
            },
            Some(view.records.len()),
        ),
    };

    rsx! {
        div { class: "dashboard__layout",
            FilterPanel { options, filters, matching_rows }
            div { class: "dashboard__content", {content} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Category, Workshop};
    use time::macros::date;

    #[test]
    fn initial_filters_select_everything_sorted() {
        let options = FilterOptions {
            min_date: Some(date!(2024 - 07 - 01)),
            max_date: Some(date!(2024 - 11 - 30)),
            categories: vec![Category::Frogs, Category::Switches],
            workshops: vec![Workshop::MechanicalFabrication, Workshop::MechanicalAssembly],
        };
        let filters = initial_filters(&options).unwrap();
        assert_eq!(filters.start, date!(2024 - 07 - 01));
        assert_eq!(filters.end, date!(2024 - 11 - 30));
        assert_eq!(filters.categories, vec![Category::Switches, Category::Frogs]);
        assert_eq!(filters.workshops, Workshop::ALL.to_vec());
    }

    #[test]
    fn empty_options_have_no_initial_filters() {
        assert!(initial_filters(&FilterOptions::default()).is_none());
    }
}
