//! Data, handlers and server plumbing for the production plan dashboard.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod model;

mod server_fns;
pub use server_fns::*;

#[cfg(feature = "server")]
mod store;
#[cfg(feature = "server")]
pub use store::{install_dataset, installed_dataset, DatasetSlot};

#[cfg(feature = "server")]
pub mod server;

pub use dashboard::{
    update_dashboard, CategoryShare, DashboardFilters, DashboardView, FilterOptions, SeriesPoint,
    Summary,
};
pub use model::{Category, Market, ProductionRecord, ProductionTable, Workshop};
