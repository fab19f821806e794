//! Biological-age gauge: a 0–100 age track with a pin for biological age
//! above it and a smaller inverted pin for calendar age below it.

use dioxus::prelude::*;

use super::fmt_coord;
use crate::core::format::format_value;

/// Height / width ratio shared by the gauge and ageing-speed charts.
pub const CHART_ASPECT: f64 = 0.75;
/// Width the pin artwork was drawn at.
const PIN_REFERENCE_WIDTH: f64 = 500.0;
const CALENDAR_PIN_SCALE: f64 = 0.6;

pub const BIO_COLOR: &str = "#4CAF50";
pub const CHRO_COLOR: &str = "#9E9E9E";
pub const TRACK_COLOR: &str = "#E0E0E0";

/// Pixel layout of the gauge for a given rendered width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    pub width: f64,
    pub height: f64,
}

impl GaugeLayout {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            height: width * CHART_ASPECT,
        }
    }

    /// Map an age on the fixed `[0, 100]` domain to an x coordinate.
    pub fn x_for_age(&self, age: f64) -> f64 {
        0.1 * self.width + (age / 100.0) * (0.8 * self.width)
    }

    pub fn track_start(&self) -> f64 {
        self.x_for_age(0.0)
    }

    pub fn track_end(&self) -> f64 {
        self.x_for_age(100.0)
    }

    pub fn track_y(&self) -> f64 {
        0.6 * self.height
    }

    pub fn track_stroke(&self) -> f64 {
        0.008 * self.width
    }

    pub fn scale_label_y(&self) -> f64 {
        0.667 * self.height
    }

    pub fn small_font(&self) -> f64 {
        0.024 * self.width
    }

    /// Both marker groups hang off this baseline.
    pub fn marker_y(&self) -> f64 {
        0.733 * self.height
    }

    pub fn bio_pin(&self) -> String {
        pin_path(self.width / PIN_REFERENCE_WIDTH)
    }

    pub fn chro_pin(&self) -> String {
        pin_path(self.width / PIN_REFERENCE_WIDTH * CALENDAR_PIN_SCALE)
    }
}

/// Teardrop marker outline, 60×75 units at `scale == 1`.
pub fn pin_path(scale: f64) -> String {
    let p = |v: f64| fmt_coord(v * scale);
    format!(
        "M{a},0 C{b},0 0,{b} 0,{a} C0,{c} {a},{d} {a},{d} C{a},{d} {e},{c} {e},{a} C{e},{b} {f},0 {a},0 Z",
        a = p(30.0),
        b = p(13.4),
        c = p(51.6),
        d = p(75.0),
        e = p(60.0),
        f = p(46.6),
    )
}

#[component]
pub fn GaugeChart(bio_age: f64, chro_age: f64, #[props(default = 450.0)] width: f64) -> Element {
    let layout = GaugeLayout::new(width);
    let w = layout.width;
    let h = layout.height;
    let bio_x = layout.x_for_age(bio_age);
    let chro_x = layout.x_for_age(chro_age);
    let marker_y = layout.marker_y();
    let bio_label = format_value(bio_age);
    let chro_label = format_value(chro_age);

    rsx! {
        svg {
            class: "chart chart--gauge",
            width: "{w}",
            height: "{h}",
            view_box: "0 0 {w} {h}",

            text { x: "{w / 2.0}", y: "40", text_anchor: "middle", font_size: "14",
                {crate::t!("gauge-caption-intro")}
            }
            text { x: "{w / 2.0}", y: "60", text_anchor: "middle", font_size: "14",
                {crate::t!("gauge-caption-result")}
                tspan { font_weight: "bold", " {bio_label}" }
            }

            text { x: "{layout.track_start()}", y: "{layout.scale_label_y()}", text_anchor: "middle", font_size: "{layout.small_font()}", "0" }
            text { x: "{layout.track_end()}", y: "{layout.scale_label_y()}", text_anchor: "middle", font_size: "{layout.small_font()}", "100" }
            line {
                x1: "{layout.track_start()}",
                y1: "{layout.track_y()}",
                x2: "{layout.track_end()}",
                y2: "{layout.track_y()}",
                stroke: TRACK_COLOR,
                stroke_width: "{layout.track_stroke()}",
            }

            g { class: "chart-gauge__marker chart-gauge__marker--bio",
                transform: "translate({bio_x}, {marker_y})",
                path {
                    d: "{layout.bio_pin()}",
                    transform: "translate({-0.052 * w}, {-0.433 * h})",
                    fill: BIO_COLOR,
                }
                rect { x: "0", y: "{-0.147 * h}", width: "{0.008 * w}", height: "{0.027 * h}", fill: BIO_COLOR }
                circle { cx: "{0.008 * w}", cy: "{-0.333 * h}", r: "{0.044 * w}", fill: BIO_COLOR }
                text { x: "{0.008 * w}", y: "{-0.335 * h}", text_anchor: "middle", dominant_baseline: "middle",
                    fill: "white", font_size: "{0.034 * w}", font_weight: "bold",
                    "{bio_label}"
                }
                text { x: "0", y: "{-0.467 * h}", text_anchor: "middle", font_size: "{layout.small_font()}", font_weight: "bold",
                    {crate::t!("gauge-bio-label")}
                }
            }

            g { class: "chart-gauge__marker chart-gauge__marker--chro",
                transform: "translate({chro_x}, {marker_y})",
                path {
                    d: "{layout.chro_pin()}",
                    transform: "translate({-0.03 * w}, {0.067 * h}) scale(1, -1)",
                    fill: CHRO_COLOR,
                }
                rect { x: "0", y: "{-0.147 * h}", width: "{0.008 * w}", height: "{0.027 * h}", fill: CHRO_COLOR }
                circle { cx: "{0.006 * w}", cy: "{0.003 * h}", r: "{0.024 * w}", fill: CHRO_COLOR }
                text { x: "{0.006 * w}", y: "{0.02 * h}", text_anchor: "middle",
                    fill: "white", font_size: "{0.032 * w}",
                    "{chro_label}"
                }
                text { x: "0", y: "{0.117 * h}", text_anchor: "middle", font_size: "{layout.small_font()}", font_weight: "bold",
                    {crate::t!("gauge-chro-label")}
                }
            }
        }
    }
}
