//! Shared UI crate for LUCY: report model and metrics, charts, views and
//! localization used by both the web and desktop shells.

pub mod charts;
pub mod config;
pub mod core;
pub mod i18n;
pub mod report;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

use dioxus::prelude::*;

/// Shared theme stylesheet.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Bundled mock dataset, served as a static file on the web.
pub const MOCK_DATA: Asset = asset!("/assets/mockdata/mock-data.json");
