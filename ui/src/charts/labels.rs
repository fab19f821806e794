//! Localized names for disease categories and risk scenarios.

use crate::core::metrics::{Condition, RiskScenario};
use crate::t;

pub fn condition_label(condition: Condition) -> String {
    match condition {
        Condition::AllCauseMortality => t!("condition-acm"),
        Condition::Cardiovascular => t!("condition-cvd"),
        Condition::Diabetes => t!("condition-dm"),
        Condition::Dementia => t!("condition-ad"),
        Condition::Cancer => t!("condition-cancer"),
    }
}

pub fn scenario_label(scenario: RiskScenario) -> String {
    match scenario {
        RiskScenario::Current => t!("risk-scenario-current"),
        RiskScenario::Reduced => t!("risk-scenario-reduced"),
    }
}
