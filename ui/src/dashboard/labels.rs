//! Localized display names for the typed data values.

use api::{Category, Workshop};

use crate::t;

/// Page name used by the platform crates for navigation links.
pub fn dashboard_title() -> String {
    t!("dashboard-title")
}

pub fn category_label(category: Category) -> String {
    match category {
        Category::Switches => t!("category-switches"),
        Category::RepairKits => t!("category-repair-kits"),
        Category::Frogs => t!("category-frogs"),
    }
}

pub fn workshop_label(workshop: Workshop) -> String {
    match workshop {
        Workshop::MechanicalAssembly => t!("workshop-mechanical-assembly"),
        Workshop::MechanicalFabrication => t!("workshop-mechanical-fabrication"),
    }
}
