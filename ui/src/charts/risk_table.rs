use dioxus::prelude::*;

use super::labels::{condition_label, scenario_label};
use crate::core::format::format_percent;
use crate::core::metrics::{DiseaseRisks, RiskScenario};

/// Current vs. reduced-pace risk per condition, one row each.
#[component]
pub fn DiseaseRisksTable(risks: DiseaseRisks) -> Element {
    rsx! {
        table { class: "risk-table",
            thead {
                tr {
                    th { scope: "col", {crate::t!("risk-table-condition")} }
                    th { scope: "col", {scenario_label(RiskScenario::Current)} }
                    th { scope: "col", {scenario_label(RiskScenario::Reduced)} }
                }
            }
            tbody {
                for row in risks.rows.iter() {
                    tr { key: "{row.condition.code()}",
                        class: if row.current < 0.0 { "risk-table__row risk-table__row--negative" } else { "risk-table__row" },
                        th { scope: "row", {condition_label(row.condition)} }
                        td { class: "risk-table__value", "{format_percent(row.current)}" }
                        td { class: "risk-table__value", "{format_percent(row.reduced)}" }
                    }
                }
            }
        }
    }
}
