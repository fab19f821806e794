#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::config::{self, ReportConfig};
use ui::views::{Home, Report};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Lookup {},
    #[route("/report/:id")]
    Report { id: String },
}

// Shared theme, inlined so packaged builds need no asset directory for styling.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn install_config() {
    // Bundled dataset unless LUCY_DATA_FILE / LUCY_FETCH_TIMEOUT_MS say otherwise.
    config::register(ReportConfig::default().with_env_overrides());
}

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    install_config();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("LUCY – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1100.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    install_config();
    LaunchBuilder::server().launch(App);
}

fn nav_lookup(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Lookup {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { lookup: nav_lookup });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts with fresh copy.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: shared navbar above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

/// Lookup page; a match navigates to its report.
#[component]
fn Lookup() -> Element {
    let nav = navigator();
    rsx! {
        Home {
            on_found: move |id: String| {
                nav.push(Route::Report { id });
            },
        }
    }
}
