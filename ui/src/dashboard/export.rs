use api::{DashboardView, ProductionRecord};
use dioxus::prelude::*;

use crate::core::dates::format_input_date;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportOutcome {
    Saved(String),
    Failed(String),
}

/// Result of the last export together with the view it was taken from.
#[derive(Clone, Debug, PartialEq)]
struct LastExport {
    view: DashboardView,
    outcome: ExportOutcome,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ExportFormat {
    Csv,
    Json,
}

#[component]
pub fn ExportPanel(view: DashboardView) -> Element {
    let last = use_signal(|| None::<LastExport>);
    let row_count = view.records.len();

    let feedback = match outcome_for(last.read().as_ref(), &view) {
        None => None,
        Some(ExportOutcome::Saved(file)) => Some((
            "dashboard-card__meta dashboard-card__meta--success",
            t!("export-done", file = file.clone()),
        )),
        Some(ExportOutcome::Failed(err)) => Some((
            "dashboard-card__meta dashboard-card__meta--error",
            err.clone(),
        )),
    };

    let csv_handler = export_handler(ExportFormat::Csv, view.clone(), last);
    let json_handler = export_handler(ExportFormat::Json, view, last);

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { {t!("export-title")} }
            }

            if row_count == 0 {
                p { class: "dashboard-card__placeholder", {t!("export-empty")} }
            } else {
                p { {t!("export-intro")} }

                div { class: "dashboard-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: csv_handler,
                        {t!("export-csv")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: json_handler,
                        {t!("export-json")}
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

/// Feedback is only shown while the exported view is still on screen.
fn outcome_for<'a>(last: Option<&'a LastExport>, view: &DashboardView) -> Option<&'a ExportOutcome> {
    last.filter(|last| last.view == *view).map(|last| &last.outcome)
}

fn export_handler(
    format: ExportFormat,
    view: DashboardView,
    mut last: Signal<Option<LastExport>>,
) -> impl FnMut(MouseEvent) + 'static {
    move |_| {
        let result = match format {
            ExportFormat::Csv => {
                let filename = format!("plandash-{}.csv", timestamp_slug());
                download_bytes(&filename, "text/csv", build_csv(&view.records).into_bytes())
                    .map(|_| filename)
            }
            ExportFormat::Json => {
                let filename = format!("plandash-{}.json", timestamp_slug());
                serde_json::to_string_pretty(&view)
                    .map_err(|err| err.to_string())
                    .and_then(|json| {
                        download_bytes(&filename, "application/json", json.into_bytes())
                    })
                    .map(|_| filename)
            }
        };
        let outcome = match result {
            Ok(file) => ExportOutcome::Saved(file),
            Err(err) => ExportOutcome::Failed(err),
        };
        last.set(Some(LastExport {
            view: view.clone(),
            outcome,
        }));
    }
}

const CSV_HEADER: [&str; 7] = [
    "date", "category", "workshop", "planned", "actual", "project", "market",
];

/// Rows use the same stable keys as the JSON export, independent of the UI
/// language.
fn build_csv(records: &[ProductionRecord]) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');

    for record in records {
        let row = [
            format_input_date(record.date),
            record.category.key().to_string(),
            record.workshop.key().to_string(),
            record.planned.to_string(),
            record.actual.to_string(),
            record.project.clone(),
            record.market.key().to_string(),
        ];
        let line = row
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}{:02}{:02}_{:02}{:02}{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date(),
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds()
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use time::{macros::format_description, OffsetDateTime};

        OffsetDateTime::now_utc()
            .format(&format_description!(
                "[year][month][day]_[hour][minute][second]"
            ))
            .unwrap_or_else(|_| "export".into())
    }
}

#[cfg(target_arch = "wasm32")]
fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|_| "Failed to create blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create download".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Unable to create anchor")?
        .dyn_into()
        .map_err(|_| "Anchor cast failed")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    document
        .body()
        .ok_or("Missing body")?
        .append_child(&anchor)
        .ok();
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).ok();

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn download_bytes(_filename: &str, _mime: &str, _bytes: Vec<u8>) -> Result<(), String> {
    Err(t!("export-unsupported"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Category, Market, Workshop};
    use time::macros::date;

    fn record(project: &str) -> ProductionRecord {
        ProductionRecord {
            date: date!(2024 - 07 - 01),
            category: Category::Switches,
            workshop: Workshop::MechanicalAssembly,
            planned: 100,
            actual: 90,
            project: project.to_string(),
            market: Market::Rzd,
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_record() {
        let csv = build_csv(&[record("Project A"), record("Project B")]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,category,workshop,planned,actual,project,market");
        assert_eq!(lines[1], "2024-07-01,switches,mechanical_assembly,100,90,Project A,rzd");
    }

    #[test]
    fn csv_values_match_json_keys() {
        let record = record("Project A");
        let json = serde_json::to_value(&record).unwrap();
        let csv = build_csv(std::slice::from_ref(&record));
        let fields: Vec<&str> = csv.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(json["category"], fields[1]);
        assert_eq!(json["workshop"], fields[2]);
        assert_eq!(json["market"], fields[6]);
    }

    fn view_of(records: Vec<ProductionRecord>) -> DashboardView {
        DashboardView {
            records,
            ..DashboardView::default()
        }
    }

    #[test]
    fn feedback_is_dropped_once_the_view_changes() {
        let exported = view_of(vec![record("Project A")]);
        let last = LastExport {
            view: exported.clone(),
            outcome: ExportOutcome::Saved("plandash-1.csv".into()),
        };

        assert_eq!(
            outcome_for(Some(&last), &exported),
            Some(&ExportOutcome::Saved("plandash-1.csv".into()))
        );
        assert_eq!(outcome_for(Some(&last), &view_of(Vec::new())), None);
        assert_eq!(outcome_for(None, &exported), None);
    }

    #[test]
    fn csv_quotes_fields_with_separators() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        let csv = build_csv(&[record("Project, phase 2")]);
        assert!(csv.contains("\"Project, phase 2\""));
    }

    #[test]
    fn native_download_is_unsupported() {
        assert!(download_bytes("x.csv", "text/csv", Vec::new()).is_err());
    }
}
