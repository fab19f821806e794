//! Derived report metrics: rounded display values, commentary buckets and the
//! disease-risk table, all computed from a single [`RawReport`].

use serde::{Deserialize, Serialize};

use super::report::RawReport;

/// Population-normal ageing pace (one biological year per calendar year).
pub const NORMAL_PACE: f64 = 1.0;
/// Pace improvement modelled by the "reduced" risk scenario.
pub const PACE_REDUCTION: f64 = 0.05;
/// Age gap (years) under which biological age counts as average.
pub const AVERAGE_AGE_WINDOW: f64 = 2.0;

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to `decimals` places using the exact binary value, ties away from
/// zero. `35.455` is stored just below the tie and rounds to `35.45`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let decimals = decimals.min(fraction.len() - 1);
    let kept = format!("{whole}{}", &fraction[..decimals]);
    let Ok(mut scaled) = kept.parse::<i128>() else {
        // Far beyond display precision already.
        return value;
    };
    if fraction.as_bytes()[decimals] >= b'5' {
        scaled += 1;
    }
    let rounded = scaled as f64 / 10f64.powi(decimals as i32);
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Condition {
    AllCauseMortality,
    Cardiovascular,
    Diabetes,
    Dementia,
    Cancer,
}

impl Condition {
    /// Fixed axis / table order.
    pub const ALL: [Condition; 5] = [
        Condition::AllCauseMortality,
        Condition::Cardiovascular,
        Condition::Diabetes,
        Condition::Dementia,
        Condition::Cancer,
    ];

    /// Risk percentage points per unit of pace above normal.
    pub fn multiplier(self) -> f64 {
        match self {
            Condition::AllCauseMortality => 200.0,
            Condition::Cardiovascular => 195.0,
            Condition::Diabetes => 155.0,
            Condition::Dementia => 200.0,
            Condition::Cancer => 250.0,
        }
    }

    /// Short code used in CSS classes and logs.
    pub fn code(self) -> &'static str {
        match self {
            Condition::AllCauseMortality => "acm",
            Condition::Cardiovascular => "cvd",
            Condition::Diabetes => "dm",
            Condition::Dementia => "ad",
            Condition::Cancer => "cancer",
        }
    }

    /// Linear risk for a given pace delta. Negative deltas give negative risk;
    /// the values are not clamped.
    pub fn risk(self, pace_delta: f64) -> f64 {
        round_to(self.multiplier() * pace_delta, 2)
    }
}

/// The two pace scenarios shown side by side in the table and radar chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskScenario {
    Current,
    Reduced,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiseaseRiskRow {
    pub condition: Condition,
    /// Risk (%) at the measured pace.
    pub current: f64,
    /// Risk (%) if the pace dropped by [`PACE_REDUCTION`].
    pub reduced: f64,
}

impl DiseaseRiskRow {
    pub fn for_delta(condition: Condition, pace_delta: f64) -> Self {
        Self {
            condition,
            current: condition.risk(pace_delta),
            reduced: condition.risk(pace_delta - PACE_REDUCTION),
        }
    }

    pub fn value(&self, scenario: RiskScenario) -> f64 {
        match scenario {
            RiskScenario::Current => self.current,
            RiskScenario::Reduced => self.reduced,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseRisks {
    pub rows: [DiseaseRiskRow; 5],
}

impl DiseaseRisks {
    pub fn from_delta(pace_delta: f64) -> Self {
        Self {
            rows: Condition::ALL.map(|condition| DiseaseRiskRow::for_delta(condition, pace_delta)),
        }
    }

    /// Values for one scenario in [`Condition::ALL`] order.
    pub fn series(&self, scenario: RiskScenario) -> [f64; 5] {
        self.rows.map(|row| row.value(scenario))
    }

    pub fn row(&self, condition: Condition) -> Option<&DiseaseRiskRow> {
        self.rows.iter().find(|row| row.condition == condition)
    }
}

/// Which biological-age paragraph to show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum AgeCommentary {
    /// Within [`AVERAGE_AGE_WINDOW`] of chronological age.
    Average { bio_age: f64 },
    Younger {
        bio_age: f64,
        chro_age: f64,
        diff_age: f64,
    },
    Older {
        bio_age: f64,
        chro_age: f64,
        diff_age: f64,
    },
}

impl AgeCommentary {
    /// Buckets on the unrounded gap; the interpolated values are the rounded ones.
    pub fn classify(raw: &RawReport, bio_age: f64, chro_age: f64, diff_age: f64) -> Self {
        let gap = raw.bio_age - raw.chro_age;
        if gap.abs() < AVERAGE_AGE_WINDOW {
            AgeCommentary::Average { bio_age }
        } else if gap < 0.0 {
            AgeCommentary::Younger {
                bio_age,
                chro_age,
                diff_age,
            }
        } else {
            AgeCommentary::Older {
                bio_age,
                chro_age,
                diff_age,
            }
        }
    }
}

/// Ageing-pace band. The five bands partition the real line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaceBand {
    /// `<= 0.8`
    NotablySlow,
    /// `(0.8, 0.97)`
    SlightlySlow,
    /// `[0.97, 1.03]`
    Normal,
    /// `(1.03, 1.2)`
    SlightlyFast,
    /// `>= 1.2`
    NotablyFast,
}

impl PaceBand {
    pub fn classify(pace_value: f64) -> Self {
        if pace_value >= 1.2 {
            PaceBand::NotablyFast
        } else if pace_value > 1.03 {
            PaceBand::SlightlyFast
        } else if pace_value >= 0.97 {
            PaceBand::Normal
        } else if pace_value > 0.8 {
            PaceBand::SlightlySlow
        } else {
            PaceBand::NotablySlow
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            PaceBand::NotablySlow => "pace--notably-slow",
            PaceBand::SlightlySlow => "pace--slightly-slow",
            PaceBand::Normal => "pace--normal",
            PaceBand::SlightlyFast => "pace--slightly-fast",
            PaceBand::NotablyFast => "pace--notably-fast",
        }
    }
}

/// Everything the report views display, derived from one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    pub bio_age: f64,
    pub chro_age: f64,
    pub pace_value: f64,
    pub diff_age: f64,
    pub pace_delta: f64,
    pub pace_pr: f64,
    /// Share of peers this sample ages slower than.
    pub pace_pr_inverse: f64,
    pub age_commentary: AgeCommentary,
    pub pace_band: PaceBand,
    pub disease_risks: DiseaseRisks,
}

impl DerivedMetrics {
    pub fn from_report(raw: &RawReport) -> Self {
        compute(raw)
    }
}

/// Derive all display metrics. Pure; call again whenever the record changes.
pub fn compute(raw: &RawReport) -> DerivedMetrics {
    let bio_age = round_to(raw.bio_age, 2);
    let chro_age = round_to(raw.chro_age, 1);
    let pace_value = round_to(raw.pace_value, 2);
    let diff_age = round_to(bio_age - chro_age, 2).abs();
    let pace_delta = pace_value - NORMAL_PACE;

    DerivedMetrics {
        bio_age,
        chro_age,
        pace_value,
        diff_age,
        pace_delta,
        pace_pr: raw.pace_pr,
        pace_pr_inverse: 100.0 - raw.pace_pr,
        age_commentary: AgeCommentary::classify(raw, bio_age, chro_age, diff_age),
        pace_band: PaceBand::classify(pace_value),
        disease_risks: DiseaseRisks::from_delta(pace_delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::fixtures::report;

    #[test]
    fn worked_example_rounds_and_buckets() {
        let metrics = compute(&report("LU0001", 35.456, 37.0, 1.05, 60.0));
        assert_eq!(metrics.bio_age, 35.46);
        assert_eq!(metrics.chro_age, 37.0);
        assert_eq!(metrics.diff_age, 1.54);
        assert_eq!(metrics.pace_value, 1.05);
        assert_eq!(metrics.pace_pr_inverse, 40.0);
        assert_eq!(metrics.pace_band, PaceBand::SlightlyFast);
        assert_eq!(
            metrics.age_commentary,
            AgeCommentary::Average { bio_age: 35.46 }
        );
    }

    #[test]
    fn younger_and_older_branches_carry_the_gap() {
        let younger = compute(&report("Y", 30.123, 40.04, 0.9, 80.0));
        match younger.age_commentary {
            AgeCommentary::Younger {
                bio_age,
                chro_age,
                diff_age,
            } => {
                assert_eq!(bio_age, 30.12);
                assert_eq!(chro_age, 40.0);
                assert_eq!(diff_age, 9.88);
            }
            other => panic!("expected younger commentary, got {other:?}"),
        }

        let older = compute(&report("O", 52.1, 47.3, 1.24, 12.0));
        assert!(matches!(
            older.age_commentary,
            AgeCommentary::Older { diff_age, .. } if diff_age == 4.8
        ));
    }

    #[test]
    fn gap_of_exactly_two_is_not_average() {
        let metrics = compute(&report("E", 42.0, 40.0, 1.0, 50.0));
        assert!(matches!(metrics.age_commentary, AgeCommentary::Older { .. }));
    }

    #[test]
    fn pace_band_boundaries() {
        assert_eq!(PaceBand::classify(0.8), PaceBand::NotablySlow);
        assert_eq!(PaceBand::classify(0.81), PaceBand::SlightlySlow);
        assert_eq!(PaceBand::classify(0.96), PaceBand::SlightlySlow);
        assert_eq!(PaceBand::classify(0.97), PaceBand::Normal);
        assert_eq!(PaceBand::classify(1.03), PaceBand::Normal);
        assert_eq!(PaceBand::classify(1.04), PaceBand::SlightlyFast);
        assert_eq!(PaceBand::classify(1.19), PaceBand::SlightlyFast);
        assert_eq!(PaceBand::classify(1.2), PaceBand::NotablyFast);
        assert_eq!(PaceBand::classify(-3.0), PaceBand::NotablySlow);
    }

    #[test]
    fn disease_risks_follow_multipliers() {
        let metrics = compute(&report("R", 50.0, 50.0, 1.2, 20.0));
        let risks = &metrics.disease_risks;
        let expected = [(40.0, 30.0), (39.0, 29.25), (31.0, 23.25), (40.0, 30.0), (50.0, 37.5)];
        for (row, (current, reduced)) in risks.rows.iter().zip(expected) {
            assert!((row.current - current).abs() < 1e-9, "{row:?}");
            assert!((row.reduced - reduced).abs() < 1e-9, "{row:?}");
        }
        assert_eq!(risks.rows[0].condition, Condition::AllCauseMortality);
        assert_eq!(risks.rows[4].condition, Condition::Cancer);
    }

    #[test]
    fn slow_pace_yields_negative_risk() {
        let metrics = compute(&report("N", 30.0, 35.0, 0.8, 95.0));
        let acm = metrics.disease_risks.row(Condition::AllCauseMortality).unwrap();
        assert_eq!(acm.current, -40.0);
        assert_eq!(acm.reduced, -50.0);
    }

    #[test]
    fn compute_is_idempotent() {
        let raw = report("I", 61.987, 58.04, 1.117, 33.0);
        assert_eq!(compute(&raw), compute(&raw));
        assert_eq!(compute(&raw), DerivedMetrics::from_report(&raw));
    }

    #[test]
    fn round_to_matches_display_rounding() {
        assert_eq!(round_to(35.456, 2), 35.46);
        assert_eq!(round_to(37.04, 1), 37.0);
        assert_eq!(round_to(-1.544, 2), -1.54);
        assert_eq!(round_to(1.005, 0), 1.0);
    }

    #[test]
    fn round_to_uses_the_stored_binary_value() {
        assert_eq!(round_to(35.455, 2), 35.45);
        assert_eq!(round_to(1.045, 2), 1.04);
        assert_eq!(round_to(0.015, 2), 0.01);
        assert_eq!(round_to(-1.045, 2), -1.04);
        // Exact binary ties round away from zero.
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn near_tie_inputs_carry_into_derived_values() {
        let metrics = compute(&report("T", 35.455, 37.0, 1.045, 60.0));
        assert_eq!(metrics.bio_age, 35.45);
        assert_eq!(metrics.pace_value, 1.04);
        assert_eq!(metrics.diff_age, 1.55);
        assert_eq!(metrics.pace_band, PaceBand::SlightlyFast);
        let acm = metrics.disease_risks.row(Condition::AllCauseMortality).unwrap();
        assert_eq!(acm.current, 8.0);
    }
}
