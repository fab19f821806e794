//! Disease-risk radar: five condition axes, one polygon per risk scenario.

use std::f64::consts::PI;

use dioxus::prelude::*;

use super::fmt_coord;
use super::labels::{condition_label, scenario_label};
use crate::core::format::format_value;
use crate::core::metrics::{Condition, DiseaseRisks, RiskScenario};

pub const RING_COUNT: usize = 5;

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 380.0;
const CENTER: (f64, f64) = (200.0, 210.0);
const RADIUS: f64 = 120.0;
const LABEL_OFFSET: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarSeries {
    pub scenario: RiskScenario,
    pub values: [f64; 5],
    pub stroke: &'static str,
    pub fill: &'static str,
}

/// Chart input: axes in [`Condition::ALL`] order and the two scenarios.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarDataset {
    pub axes: [Condition; 5],
    pub series: [RadarSeries; 2],
}

impl RadarDataset {
    pub fn from_risks(risks: &DiseaseRisks) -> Self {
        Self {
            axes: Condition::ALL,
            series: [
                RadarSeries {
                    scenario: RiskScenario::Current,
                    values: risks.series(RiskScenario::Current),
                    stroke: "rgb(54, 162, 235)",
                    fill: "rgba(54, 162, 235, 0.2)",
                },
                RadarSeries {
                    scenario: RiskScenario::Reduced,
                    values: risks.series(RiskScenario::Reduced),
                    stroke: "rgb(75, 192, 192)",
                    fill: "rgba(75, 192, 192, 0.2)",
                },
            ],
        }
    }

    /// `[min(0, lowest), max(0, highest)]`, widened by 1 when empty.
    pub fn value_range(&self) -> (f64, f64) {
        let values = self.series.iter().flat_map(|s| s.values.iter().copied());
        let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if hi - lo < f64::EPSILON {
            (lo, lo + 1.0)
        } else {
            (lo, hi)
        }
    }
}

/// Maps dataset values to points around a centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub min: f64,
    pub max: f64,
}

impl RadarGeometry {
    pub fn fit(dataset: &RadarDataset, cx: f64, cy: f64, radius: f64) -> Self {
        let (min, max) = dataset.value_range();
        Self {
            cx,
            cy,
            radius,
            min,
            max,
        }
    }

    /// First axis points straight up; the rest follow clockwise.
    pub fn axis_angle(axis: usize) -> f64 {
        -PI / 2.0 + axis as f64 * 2.0 * PI / 5.0
    }

    pub fn radius_for(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * self.radius
    }

    pub fn point(&self, axis: usize, value: f64) -> (f64, f64) {
        self.polar(axis, self.radius_for(value))
    }

    pub fn polar(&self, axis: usize, r: f64) -> (f64, f64) {
        let angle = Self::axis_angle(axis);
        (self.cx + r * angle.cos(), self.cy + r * angle.sin())
    }

    /// `points` attribute for a five-value polygon.
    pub fn polygon(&self, values: &[f64; 5]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(axis, v)| {
                let (x, y) = self.point(axis, *v);
                format!("{},{}", fmt_coord(x), fmt_coord(y))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Evenly spaced grid values from `min` to `max`.
    pub fn ring_values(&self) -> [f64; RING_COUNT] {
        let step = (self.max - self.min) / (RING_COUNT - 1) as f64;
        std::array::from_fn(|i| self.min + i as f64 * step)
    }

    /// Pentagon outline at the radius of `value`.
    pub fn ring(&self, value: f64) -> String {
        self.polygon(&[value; 5])
    }

    pub fn zero_ring(&self) -> String {
        self.ring(0.0)
    }
}

#[component]
pub fn DiseaseRisksPlot(risks: DiseaseRisks) -> Element {
    let dataset = RadarDataset::from_risks(&risks);
    let geometry = RadarGeometry::fit(&dataset, CENTER.0, CENTER.1, RADIUS);
    let rings = geometry.ring_values();

    rsx! {
        svg {
            class: "chart chart--radar",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid meet",

            g { class: "chart-radar__legend",
                for (i, series) in dataset.series.iter().enumerate() {
                    g { key: "{i}", transform: "translate(20, {18.0 + i as f64 * 18.0})",
                        rect { x: "0", y: "-9", width: "24", height: "10", fill: series.fill, stroke: series.stroke }
                        text { x: "30", y: "0", font_size: "11", {scenario_label(series.scenario)} }
                    }
                }
            }

            g { class: "chart-radar__grid",
                for (i, value) in rings.iter().enumerate() {
                    polygon { key: "ring-{i}", points: "{geometry.ring(*value)}", fill: "none", stroke: "#ddd", stroke_width: "1" }
                }
                polygon { points: "{geometry.zero_ring()}", fill: "none", stroke: "#888", stroke_width: "2" }
                for (axis, _) in dataset.axes.iter().enumerate() {
                    {
                        let (x, y) = geometry.polar(axis, geometry.radius);
                        rsx! {
                            line { key: "axis-{axis}", x1: "{geometry.cx}", y1: "{geometry.cy}", x2: "{x}", y2: "{y}", stroke: "#ddd" }
                        }
                    }
                }
                for (i, value) in rings.iter().enumerate() {
                    text { key: "tick-{i}",
                        x: "{geometry.cx + 4.0}",
                        y: "{geometry.cy - geometry.radius_for(*value)}",
                        font_size: "9",
                        fill: "#666",
                        "{format_value((*value * 10.0).round() / 10.0)}"
                    }
                }
            }

            for series in dataset.series.iter() {
                polygon {
                    key: "{series.stroke}",
                    class: "chart-radar__series",
                    points: "{geometry.polygon(&series.values)}",
                    fill: series.fill,
                    stroke: series.stroke,
                    stroke_width: "2",
                }
            }

            for (axis, condition) in dataset.axes.iter().enumerate() {
                {
                    let (x, y) = geometry.polar(axis, geometry.radius + LABEL_OFFSET);
                    rsx! {
                        text { key: "label-{axis}", x: "{x}", y: "{y}", text_anchor: "middle", dominant_baseline: "middle", font_size: "12",
                            {condition_label(*condition)}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(pace_delta: f64) -> RadarDataset {
        RadarDataset::from_risks(&DiseaseRisks::from_delta(pace_delta))
    }

    #[test]
    fn series_follow_condition_order() {
        let data = dataset(0.2);
        assert_eq!(data.axes, Condition::ALL);
        assert_eq!(data.series[0].scenario, RiskScenario::Current);
        assert_eq!(data.series[0].values, [40.0, 39.0, 31.0, 40.0, 50.0]);
        assert_eq!(data.series[1].values, [30.0, 29.25, 23.25, 30.0, 37.5]);
    }

    #[test]
    fn range_always_includes_zero() {
        assert_eq!(dataset(0.2).value_range(), (0.0, 50.0));
        let (lo, hi) = dataset(-0.2).value_range();
        assert_eq!(hi, 0.0);
        assert_eq!(lo, -62.5);
    }

    #[test]
    fn degenerate_range_is_widened() {
        // delta 0.05: reduced scenario is all zeros, current is positive.
        assert_eq!(dataset(0.05).value_range().0, 0.0);
        let flat = RadarDataset {
            axes: Condition::ALL,
            series: [
                RadarSeries { values: [0.0; 5], ..dataset(0.0).series[0] },
                RadarSeries { values: [0.0; 5], ..dataset(0.0).series[1] },
            ],
        };
        assert_eq!(flat.value_range(), (0.0, 1.0));
    }

    #[test]
    fn points_sit_on_their_axis() {
        let data = dataset(0.2);
        let geo = RadarGeometry::fit(&data, 200.0, 200.0, 100.0);

        let (x, y) = geo.point(0, 50.0);
        assert!((x - 200.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);

        for axis in 0..5 {
            let (x, y) = geo.point(axis, 25.0);
            let r = ((x - 200.0).powi(2) + (y - 200.0).powi(2)).sqrt();
            assert!((r - 50.0).abs() < 1e-9);
            let angle = (y - 200.0).atan2(x - 200.0);
            let expected = RadarGeometry::axis_angle(axis);
            let diff = (angle - expected).rem_euclid(2.0 * PI);
            assert!(diff < 1e-9 || (2.0 * PI - diff) < 1e-9);
        }
    }

    #[test]
    fn rings_span_range_and_zero_ring_is_inside() {
        let geo = RadarGeometry::fit(&dataset(-0.2), 200.0, 200.0, 100.0);
        let rings = geo.ring_values();
        assert_eq!(rings.len(), RING_COUNT);
        assert_eq!(rings[0], geo.min);
        assert!((rings[RING_COUNT - 1] - geo.max).abs() < 1e-9);

        let zero = geo.radius_for(0.0);
        assert!((0.0..=geo.radius).contains(&zero));
        assert_eq!(geo.zero_ring().split(' ').count(), 5);
    }
}
