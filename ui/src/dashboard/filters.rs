use api::{Category, DashboardFilters, FilterOptions, Workshop};
use dioxus::prelude::*;

use crate::core::dates::{format_input_date, parse_input_date};
use crate::dashboard::labels::{category_label, workshop_label};
use crate::dashboard::toggle;
use crate::t;

/// Date range and multi-select controls. Writes straight into `filters`;
/// anything reading that signal re-runs on change.
#[component]
pub fn FilterPanel(
    options: FilterOptions,
    filters: Signal<DashboardFilters>,
    #[props(!optional)] matching_rows: Option<usize>,
) -> Element {
    let mut filters = filters;
    let current = filters();
    let start_value = format_input_date(current.start);
    let end_value = format_input_date(current.end);
    let min_value = options.min_date.map(format_input_date).unwrap_or_default();
    let max_value = options.max_date.map(format_input_date).unwrap_or_default();

    let on_start = move |evt: FormEvent| {
        if let Some(date) = parse_input_date(&evt.value()) {
            filters.with_mut(|f| f.start = date);
        }
    };
    let on_end = move |evt: FormEvent| {
        if let Some(date) = parse_input_date(&evt.value()) {
            filters.with_mut(|f| f.end = date);
        }
    };

    let all_categories = options.categories.clone();
    let all_workshops = options.workshops.clone();

    rsx! {
        section { class: "dashboard-card dashboard-filters",
            div { class: "dashboard-card__header",
                h2 { {t!("filters-title")} }
                if let Some(count) = matching_rows {
                    span { class: "dashboard-card__meta", {t!("filters-rows", count = count)} }
                }
            }

            fieldset { class: "dashboard-filters__group",
                legend { {t!("filters-period")} }
                div { class: "dashboard-filters__dates",
                    label { class: "dashboard-filters__date",
                        span { {t!("filters-start")} }
                        input {
                            r#type: "date",
                            value: "{start_value}",
                            min: "{min_value}",
                            max: "{max_value}",
                            oninput: on_start,
                        }
                    }
                    label { class: "dashboard-filters__date",
                        span { {t!("filters-end")} }
                        input {
                            r#type: "date",
                            value: "{end_value}",
                            min: "{min_value}",
                            max: "{max_value}",
                            oninput: on_end,
                        }
                    }
                }
            }

            fieldset { class: "dashboard-filters__group",
                legend { {t!("filters-categories")} }
                {shortcut_buttons(
                    move |_| filters.with_mut(|f| f.categories = sorted(&all_categories)),
                    move |_| filters.with_mut(|f| f.categories.clear()),
                )}
                div { class: "dashboard-filters__choices",
                    for category in options.categories.iter().copied() {
                        {category_choice(category, current.categories.contains(&category), filters)}
                    }
                }
            }

            fieldset { class: "dashboard-filters__group",
                legend { {t!("filters-workshops")} }
                {shortcut_buttons(
                    move |_| filters.with_mut(|f| f.workshops = sorted(&all_workshops)),
                    move |_| filters.with_mut(|f| f.workshops.clear()),
                )}
                div { class: "dashboard-filters__choices",
                    for workshop in options.workshops.iter().copied() {
                        {workshop_choice(workshop, current.workshops.contains(&workshop), filters)}
                    }
                }
            }
        }
    }
}

fn shortcut_buttons(
    on_all: impl FnMut(MouseEvent) + 'static,
    on_clear: impl FnMut(MouseEvent) + 'static,
) -> Element {
    rsx! {
        div { class: "dashboard-filters__shortcuts",
            button { r#type: "button", class: "button button--ghost", onclick: on_all, {t!("filters-select-all")} }
            button { r#type: "button", class: "button button--ghost", onclick: on_clear, {t!("filters-clear")} }
        }
    }
}

fn category_choice(
    category: Category,
    checked: bool,
    mut filters: Signal<DashboardFilters>,
) -> Element {
    rsx! {
        label { key: "{category.key()}", class: "dashboard-filters__choice",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |evt: FormEvent| {
                    let on = evt.checked();
                    filters.with_mut(|f| toggle(&mut f.categories, category, on));
                },
            }
            span { "{category_label(category)}" }
        }
    }
}

fn workshop_choice(
    workshop: Workshop,
    checked: bool,
    mut filters: Signal<DashboardFilters>,
) -> Element {
    rsx! {
        label { key: "{workshop.key()}", class: "dashboard-filters__choice",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |evt: FormEvent| {
                    let on = evt.checked();
                    filters.with_mut(|f| toggle(&mut f.workshops, workshop, on));
                },
            }
            span { "{workshop_label(workshop)}" }
        }
    }
}

fn sorted<T: Ord + Copy>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort();
    out
}
