use dioxus::prelude::*;

use crate::report::ReportDisplay;

/// `/report/:id`.
#[component]
pub fn Report(id: ReadOnlySignal<String>) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { class: "page-report",
            div { style: "display:none", "{lang_current}" }
            ReportDisplay { sample_id: id }
        }
    }
}
