use dioxus::prelude::*;

use super::commentary::{age_paragraph, pace_band_text, pace_summary};
use super::share::ShareButton;
use super::ReportSection;
use crate::charts::{AgingSpeedPlot, DiseaseRisksPlot, DiseaseRisksTable, GaugeChart};
use crate::core::fetch;
use crate::core::format::format_date;
use crate::core::lookup::{LoadedReport, LookupState, MissCause, ReportLookup};
use crate::core::storage;
use crate::t;

/// Report page body for `/report/:id`.
///
/// Uses the record parked by the lookup form when it matches `sample_id`,
/// otherwise loads the collection and resolves the id itself.
#[component]
pub fn ReportDisplay(sample_id: ReadOnlySignal<String>) -> Element {
    let mut lookup = use_signal(ReportLookup::new);

    use_effect(move || {
        let id = sample_id();
        let mut guard = lookup.write();
        guard.cancel();

        if let Some(raw) = storage::selected_for(&id) {
            tracing::debug!(sample_id = %id, "using cached report");
            guard.adopt(raw);
            return;
        }

        let Some(ticket) = guard.begin(&id) else {
            return;
        };
        drop(guard);
        spawn(async move {
            let outcome = fetch::load_configured().await;
            lookup.write().complete(&ticket, outcome);
        });
    });

    let state = lookup.read().state().clone();
    match state {
        LookupState::Idle | LookupState::Loading { .. } => rsx! {
            section { class: "page report report--pending",
                p { class: "report__status", {t!("report-loading")} }
            }
        },
        LookupState::NotFound { sample_id, cause } => {
            let message = match cause {
                MissCause::NoMatch => t!("report-not-found", sample_id = sample_id),
                MissCause::Unavailable(_) => t!("report-unavailable"),
            };
            rsx! {
                section { class: "page report report--missing",
                    p { class: "report__status report__status--error", role: "alert", "{message}" }
                }
            }
        }
        LookupState::Found(loaded) => rsx! {
            ReportBody { report: *loaded }
        },
    }
}

#[component]
fn ReportBody(report: LoadedReport) -> Element {
    let info = report.raw.info();
    let metrics = report.metrics.clone();
    let year = time::OffsetDateTime::now_utc().year();

    rsx! {
        article { class: "page report",
            header { class: "report__header",
                h1 { class: "report__title", {t!("report-title")} }
                nav { class: "report__nav",
                    for section in ReportSection::ALL {
                        a { key: "{section.anchor()}", class: "report__nav-link", href: "#{section.anchor()}",
                            {section.title()}
                        }
                    }
                }
            }

            section { class: "report__info",
                dl { class: "report__info-grid",
                    InfoItem { label: t!("info-name"), value: info.name.clone() }
                    InfoItem { label: t!("info-sample-id"), value: info.sample_id.clone() }
                    InfoItem { label: t!("info-collection-date"), value: format_date(info.collection_date) }
                    InfoItem { label: t!("info-report-date"), value: format_date(info.report_date) }
                }
            }

            ReportSectionFrame { section: ReportSection::BiologicalAge, report: report.clone(),
                p { class: "report-section__intro", {t!("bio-age-intro")} }
                div { class: "report-section__chart",
                    GaugeChart { bio_age: metrics.bio_age, chro_age: metrics.chro_age }
                }
                p { class: "report-section__commentary", {age_paragraph(&metrics.age_commentary)} }
            }

            ReportSectionFrame { section: ReportSection::AgingSpeed, report: report.clone(),
                p { class: "report-section__intro", {t!("aging-speed-intro")} }
                p { class: "report-section__intro", {t!("aging-speed-note")} }
                div { class: "report-section__chart",
                    AgingSpeedPlot { pace_value: metrics.pace_value, pace_pr_inverse: metrics.pace_pr_inverse, width: 450.0 }
                }
                p { class: "report-section__commentary", {pace_summary(&metrics)} }
                p { class: "report-section__commentary pace {metrics.pace_band.css_modifier()}",
                    {pace_band_text(metrics.pace_band)}
                }
            }

            ReportSectionFrame { section: ReportSection::DiseaseRisks, report: report.clone(),
                p { class: "report-section__intro", {t!("disease-risks-intro")} }
                div { class: "report-section__chart",
                    DiseaseRisksPlot { risks: metrics.disease_risks.clone() }
                }
                DiseaseRisksTable { risks: metrics.disease_risks.clone() }
            }

            footer { class: "report__footer",
                {t!("footer-rights", year = year.to_string())}
            }
        }
    }
}

#[component]
fn InfoItem(label: String, value: String) -> Element {
    rsx! {
        div { class: "report__info-item",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}

#[component]
fn ReportSectionFrame(section: ReportSection, report: LoadedReport, children: Element) -> Element {
    rsx! {
        section { id: section.anchor(), class: "report-section report-section--{section.anchor()}",
            div { class: "report-section__heading",
                h2 { {section.title()} }
                ShareButton { section, report }
            }
            {children}
        }
    }
}
