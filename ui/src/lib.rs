//! Shared UI crate for the production plan dashboard. Views, charts and
//! filter controls live here; platform crates only provide routing and launch.

use dioxus::prelude::*;

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Unified theme shared by every platform crate.
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod translation_keys;
}
