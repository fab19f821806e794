use dioxus::prelude::*;

use crate::report::LookupForm;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    tracing::trace!(lang, "lookup page render");
}

/// Landing page: title and the sample-ID form.
#[component]
pub fn Home(on_found: EventHandler<String>) -> Element {
    // Subscribe to the platform's language signal (if any) so copy refreshes on switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    #[cfg(debug_assertions)]
    log_home_render(&lang_current);

    rsx! {
        section { class: "page page-lookup",
            div { style: "display:none", "{lang_current}" }
            h1 { class: "page-lookup__title", {crate::t!("lookup-title")} }
            LookupForm { on_found }
        }
    }
}
