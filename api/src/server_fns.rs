//! Server functions the dashboard UI calls.

use dioxus::prelude::*;

use crate::dashboard::{DashboardFilters, DashboardView, FilterOptions};

#[cfg(feature = "server")]
fn dataset() -> Result<std::sync::Arc<crate::model::ProductionTable>, ServerFnError> {
    dataset_from(crate::store::global())
}

#[cfg(feature = "server")]
fn dataset_from(
    slot: &crate::store::DatasetSlot,
) -> Result<std::sync::Arc<crate::model::ProductionTable>, ServerFnError> {
    slot.get()
        .ok_or_else(|| ServerFnError::new("dataset not initialised"))
}

/// Date bounds and distinct categories / workshops for the filter controls.
#[server]
pub async fn dashboard_options() -> Result<FilterOptions, ServerFnError> {
    let table = dataset()?;
    Ok(FilterOptions::from_table(&table))
}

/// Runs the filter-and-aggregate handler against the installed dataset.
#[server]
pub async fn load_dashboard(filters: DashboardFilters) -> Result<DashboardView, ServerFnError> {
    let table = dataset()?;
    let view = crate::dashboard::update_dashboard(&table, &filters);
    dioxus::logger::tracing::debug!(
        rows = view.records.len(),
        start = %filters.start,
        end = %filters.end,
        "dashboard view computed"
    );
    Ok(view)
}
