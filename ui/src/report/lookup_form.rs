use dioxus::prelude::*;

use crate::core::error::ReportError;
use crate::core::fetch;
use crate::core::lookup::{LookupState, MissCause, ReportLookup};
use crate::core::storage;
use crate::t;

/// Sample-ID form on the landing page.
///
/// Looks the ID up in the configured collection, parks the match in the
/// selected-report slot and hands the ID to `on_found` (the platform crate
/// navigates from there). Misses and data-source failures stay on the form as
/// an inline message.
#[component]
pub fn LookupForm(on_found: EventHandler<String>) -> Element {
    let mut sample_id = use_signal(String::new);
    let mut lookup = use_signal(ReportLookup::new);
    let mut empty_input = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = sample_id.read().trim().to_string();
        if id.is_empty() {
            empty_input.set(true);
            return;
        }
        empty_input.set(false);

        let Some(ticket) = lookup.write().begin(&id) else {
            return;
        };
        spawn(async move {
            let resolved = fetch::load_configured().await.and_then(|collection| {
                collection
                    .find_by_sample_id(ticket.sample_id())
                    .cloned()
                    .ok_or_else(|| ReportError::NotFound {
                        sample_id: ticket.sample_id().to_string(),
                    })
            });

            let found = lookup
                .write()
                .settle(&ticket, resolved)
                .report()
                .map(|loaded| loaded.raw.clone());
            if let Some(raw) = found {
                if let Err(err) = storage::store_selected(&raw) {
                    tracing::warn!(%err, "selected report not cached; report view will refetch");
                }
                on_found.call(raw.sample_id);
            }
        });
    };

    let state = lookup.read().state().clone();
    let busy = state.is_loading();
    let message = if empty_input() {
        Some(t!("lookup-empty"))
    } else {
        match &state {
            LookupState::NotFound {
                cause: MissCause::NoMatch,
                ..
            } => Some(t!("lookup-not-found")),
            LookupState::NotFound {
                cause: MissCause::Unavailable(_),
                ..
            } => Some(t!("lookup-unavailable")),
            _ => None,
        }
    };

    rsx! {
        form { class: "lookup-form", onsubmit: submit,
            label { class: "visually-hidden", r#for: "sample-id", {t!("lookup-placeholder")} }
            input {
                id: "sample-id",
                class: "lookup-form__input",
                r#type: "text",
                autocomplete: "off",
                placeholder: t!("lookup-placeholder"),
                value: "{sample_id}",
                oninput: move |evt| sample_id.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "button button--primary lookup-form__submit",
                disabled: busy,
                if busy {
                    {t!("lookup-busy")}
                } else {
                    {t!("lookup-submit")}
                }
            }
            if let Some(message) = message {
                p { class: "lookup-form__alert", role: "alert", "{message}" }
            }
        }
    }
}
