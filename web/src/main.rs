use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::config::{self, ReportConfig};
use ui::core::fetch::DataSource;
use ui::views::{Home, Report};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Lookup {},
    #[route("/report/:id")]
    Report { id: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_lookup(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Lookup {},
        "{label}"
    })
}

fn data_source() -> DataSource {
    #[cfg(target_arch = "wasm32")]
    {
        DataSource::Url(ui::MOCK_DATA.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DataSource::Embedded(config::BUNDLED_REPORTS)
    }
}

fn main() {
    dioxus::logger::initialize_default();
    config::register(ReportConfig::default().with_data_source(data_source()));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { lookup: nav_lookup });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
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
