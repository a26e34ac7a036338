//! Write-once slot holding the dataset the server functions read.

use std::sync::Arc;

use dioxus::logger::tracing::{info, warn};
use once_cell::sync::OnceCell;

use crate::model::ProductionTable;

/// A table that can be installed exactly once.
#[derive(Debug, Default)]
pub struct DatasetSlot {
    cell: OnceCell<Arc<ProductionTable>>,
}

impl DatasetSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Only the first call has any effect; later calls are logged and
    /// return `false`.
    pub fn install(&self, table: Arc<ProductionTable>) -> bool {
        let rows = table.len();
        match self.cell.set(table) {
            Ok(()) => {
                info!(rows, "production dataset installed");
                true
            }
            Err(_) => {
                warn!("production dataset already installed; ignoring replacement");
                false
            }
        }
    }

    pub fn get(&self) -> Option<Arc<ProductionTable>> {
        self.cell.get().cloned()
    }
}

static DATASET: DatasetSlot = DatasetSlot::new();

/// The process-wide slot behind the server functions.
pub(crate) fn global() -> &'static DatasetSlot {
    &DATASET
}

pub fn install_dataset(table: Arc<ProductionTable>) -> bool {
    DATASET.install(table)
}

pub fn installed_dataset() -> Option<Arc<ProductionTable>> {
    DATASET.get()
}
