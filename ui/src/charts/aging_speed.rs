//! Ageing-speed plot: the population pace curve (normal, mean 1.0, sd 0.2)
//! with a dashed marker at the subject's pace.

use dioxus::prelude::*;

use super::fmt_coord;
use super::gauge::CHART_ASPECT;
use crate::core::format::format_value;

pub const VIEW_WIDTH: f64 = 400.0;
pub const VIEW_HEIGHT: f64 = 300.0;
pub const BASELINE_Y: f64 = 250.0;
pub const AXIS_LEFT: f64 = 50.0;
pub const AXIS_RIGHT: f64 = 350.0;

pub const POPULATION_MEAN: f64 = 1.0;
pub const POPULATION_SD: f64 = 0.2;
pub const CURVE_START: f64 = 0.4;
pub const CURVE_END: f64 = 1.6;
pub const CURVE_STEP: f64 = 0.005;
const DENSITY_SCALE: f64 = 50.0;

pub const CURVE_FILL: &str = "#a2def4";
pub const MARKER_COLOR: &str = "#1f6f8b";

pub const AXIS_TICKS: [f64; 11] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0];
const TICK_LABEL_Y: f64 = 275.0;

pub fn gaussian_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    let z = (x - mean) / sd;
    (-0.5 * z * z).exp() / (sd * (2.0 * std::f64::consts::PI).sqrt())
}

/// Pace `[0, 2]` onto `[50, 350]`.
pub fn x_scale(pace: f64) -> f64 {
    AXIS_LEFT + pace / 2.0 * (AXIS_RIGHT - AXIS_LEFT)
}

pub fn y_scale(density: f64) -> f64 {
    BASELINE_Y - DENSITY_SCALE * density
}

/// Curve vertices from `CURVE_START` to `CURVE_END` inclusive.
pub fn curve_points() -> Vec<(f64, f64)> {
    let steps = ((CURVE_END - CURVE_START) / CURVE_STEP).round() as usize;
    (0..=steps)
        .map(|i| {
            let t = CURVE_START + i as f64 * CURVE_STEP;
            (
                x_scale(t),
                y_scale(gaussian_pdf(t, POPULATION_MEAN, POPULATION_SD)),
            )
        })
        .collect()
}

/// `M x,y L x,y ...` through [`curve_points`].
pub fn curve_path() -> String {
    let mut d = String::new();
    for (i, (x, y)) in curve_points().into_iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&fmt_coord(x));
        d.push(',');
        d.push_str(&fmt_coord(y));
    }
    d
}

/// On-page pixel size for a plot `width` wide; the view box keeps the same
/// aspect, so the drawing scales without distortion.
pub fn display_size(width: f64) -> (f64, f64) {
    (width, width * CHART_ASPECT)
}

/// Where the pace marker and its callout sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceMarker {
    pub x: f64,
    pub top_y: f64,
    pub base_y: f64,
    pub value_y: f64,
    pub callout_y: f64,
    pub callout_end_x: f64,
}

impl PaceMarker {
    pub fn at(pace_value: f64) -> Self {
        let x = x_scale(pace_value);
        Self {
            x,
            top_y: 90.0,
            base_y: BASELINE_Y,
            value_y: 70.0,
            callout_y: 140.0,
            callout_end_x: x + 165.0,
        }
    }
}

#[component]
pub fn AgingSpeedPlot(
    pace_value: f64,
    pace_pr_inverse: f64,
    #[props(default = 450.0)] width: f64,
) -> Element {
    let (w, h) = display_size(width);
    let (w, h) = (fmt_coord(w), fmt_coord(h));
    let marker = PaceMarker::at(pace_value);
    let curve = curve_path();
    let pace_label = format_value(pace_value);
    let callout = crate::t!(
        "aging-speed-callout",
        pace_pr_inverse = format_value(pace_pr_inverse)
    );

    rsx! {
        svg {
            class: "chart chart--aging-speed",
            width: "{w}",
            height: "{h}",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid meet",

            rect { x: "0", y: "0", width: "{VIEW_WIDTH}", height: "{VIEW_HEIGHT}", fill: "white" }
            path { d: "{curve}", fill: CURVE_FILL, stroke: "none" }
            line { x1: "{AXIS_LEFT}", y1: "{BASELINE_Y}", x2: "{AXIS_RIGHT}", y2: "{BASELINE_Y}", stroke: "#333", stroke_width: "1" }

            for tick in AXIS_TICKS {
                g { key: "{tick}",
                    line { x1: "{x_scale(tick)}", y1: "{BASELINE_Y}", x2: "{x_scale(tick)}", y2: "{BASELINE_Y + 5.0}", stroke: "#333" }
                    text { x: "{x_scale(tick)}", y: "{TICK_LABEL_Y}", text_anchor: "middle", font_size: "10",
                        "{format_value(tick)}"
                    }
                }
            }

            g { class: "chart-aging-speed__marker",
                line {
                    x1: "{marker.x}", y1: "{marker.top_y}", x2: "{marker.x}", y2: "{marker.base_y}",
                    stroke: MARKER_COLOR, stroke_width: "1.5", stroke_dasharray: "4 3",
                }
                line {
                    x1: "{marker.x}", y1: "{marker.callout_y}", x2: "{marker.callout_end_x}", y2: "{marker.callout_y}",
                    stroke: MARKER_COLOR, stroke_width: "1", stroke_dasharray: "4 3",
                }
                circle { cx: "{marker.x}", cy: "{marker.top_y}", r: "3", fill: MARKER_COLOR }
                circle { cx: "{marker.x}", cy: "{marker.base_y}", r: "3", fill: MARKER_COLOR }
                circle { cx: "{marker.callout_end_x}", cy: "{marker.callout_y}", r: "3", fill: MARKER_COLOR }
                text { x: "{marker.x}", y: "{marker.value_y}", text_anchor: "middle", font_size: "16", font_weight: "bold",
                    "{pace_label}"
                }
                text { x: "{marker.x + 5.0}", y: "{marker.callout_y - 10.0}", font_size: "11", "{callout}" }
            }

            text { x: "{VIEW_WIDTH / 2.0}", y: "295", text_anchor: "middle", font_size: "12",
                {crate::t!("aging-speed-axis-label")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_peaks_at_mean() {
        let peak = gaussian_pdf(1.0, POPULATION_MEAN, POPULATION_SD);
        assert!((peak - 1.994_711).abs() < 1e-5);
        assert!(gaussian_pdf(1.2, 1.0, 0.2) < peak);
        assert!((gaussian_pdf(0.8, 1.0, 0.2) - gaussian_pdf(1.2, 1.0, 0.2)).abs() < 1e-12);
    }

    #[test]
    fn scales_match_axis() {
        assert_eq!(x_scale(0.0), 50.0);
        assert_eq!(x_scale(1.0), 200.0);
        assert_eq!(x_scale(2.0), 350.0);
        assert_eq!(y_scale(0.0), BASELINE_Y);
    }

    #[test]
    fn curve_covers_sampled_domain_inside_the_box() {
        let points = curve_points();
        assert_eq!(points.len(), 241);
        assert_eq!(points[0].0, x_scale(0.4));
        assert!((points[points.len() - 1].0 - x_scale(1.6)).abs() < 1e-9);
        for (x, y) in &points {
            assert!((0.0..=VIEW_WIDTH).contains(x));
            assert!((0.0..=BASELINE_Y).contains(y));
        }
    }

    #[test]
    fn path_is_a_polyline() {
        let d = curve_path();
        assert!(d.starts_with("M110,"));
        assert_eq!(d.matches('L').count(), 240);
    }

    #[test]
    fn plot_renders_at_the_shared_aspect() {
        assert_eq!(display_size(450.0), (450.0, 337.5));
        assert_eq!(display_size(400.0), (400.0, 300.0));
        assert_eq!(VIEW_HEIGHT / VIEW_WIDTH, CHART_ASPECT);
    }

    #[test]
    fn marker_tracks_pace() {
        let marker = PaceMarker::at(1.2);
        assert!((marker.x - 230.0).abs() < 1e-9);
        assert!((marker.callout_end_x - 395.0).abs() < 1e-9);
        assert_eq!(marker.base_y, BASELINE_Y);
    }
}
