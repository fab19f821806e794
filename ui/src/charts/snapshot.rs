//! Standalone SVG documents for share images.
//!
//! The on-page charts are rsx trees; rasterizers need a self-contained
//! document instead, so these builders redraw the same geometry as markup.
//! Labels arrive already localized.

use super::aging_speed::{self, PaceMarker};
use super::fmt_coord;
use super::gauge::{GaugeLayout, BIO_COLOR, CHRO_COLOR, TRACK_COLOR};
use super::radar::{RadarDataset, RadarGeometry};
use crate::core::format::format_value;
use crate::core::metrics::DiseaseRisks;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_STACK: &str = "'Noto Sans TC', 'PingFang TC', 'Microsoft JhengHei', sans-serif";

/// A rendered document and the pixel size it should be rasterized at.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub svg: String,
}

pub struct GaugeCopy<'a> {
    pub intro: &'a str,
    pub result: &'a str,
    pub bio_label: &'a str,
    pub chro_label: &'a str,
}

pub struct RadarCopy<'a> {
    pub conditions: [&'a str; 5],
    pub scenarios: [&'a str; 2],
}

/// Escape text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn open(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{FONT_STACK}\">\
         <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"white\"/>",
        w = fmt_coord(width),
        h = fmt_coord(height),
    )
}

fn text(x: f64, y: f64, size: f64, extra: &str, content: &str) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\"{extra}>{}</text>",
        fmt_coord(x),
        fmt_coord(y),
        fmt_coord(size),
        escape(content)
    )
}

pub fn gauge(bio_age: f64, chro_age: f64, width: f64, copy: &GaugeCopy<'_>) -> Snapshot {
    let layout = GaugeLayout::new(width);
    let (w, h) = (layout.width, layout.height);
    let c = fmt_coord;
    let mut svg = open(w, h);

    svg.push_str(&text(w / 2.0, 40.0, 14.0, "", copy.intro));
    svg.push_str(&text(
        w / 2.0,
        60.0,
        14.0,
        "",
        &format!("{} {}", copy.result, format_value(bio_age)),
    ));
    svg.push_str(&text(layout.track_start(), layout.scale_label_y(), layout.small_font(), "", "0"));
    svg.push_str(&text(layout.track_end(), layout.scale_label_y(), layout.small_font(), "", "100"));
    svg.push_str(&format!(
        "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{TRACK_COLOR}\" stroke-width=\"{}\"/>",
        c(layout.track_start()),
        c(layout.track_end()),
        c(layout.track_stroke()),
        y = c(layout.track_y()),
    ));

    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">\
         <path d=\"{}\" transform=\"translate({},{})\" fill=\"{BIO_COLOR}\"/>\
         <rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{BIO_COLOR}\"/>\
         <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{BIO_COLOR}\"/>",
        c(layout.x_for_age(bio_age)),
        c(layout.marker_y()),
        layout.bio_pin(),
        c(-0.052 * w),
        c(-0.433 * h),
        c(-0.147 * h),
        c(0.008 * w),
        c(0.027 * h),
        c(0.008 * w),
        c(-0.333 * h),
        c(0.044 * w),
    ));
    svg.push_str(&text(
        0.008 * w,
        -0.335 * h,
        0.034 * w,
        " fill=\"white\" font-weight=\"bold\" dominant-baseline=\"middle\"",
        &format_value(bio_age),
    ));
    svg.push_str(&text(0.0, -0.467 * h, layout.small_font(), " font-weight=\"bold\"", copy.bio_label));
    svg.push_str("</g>");

    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">\
         <path d=\"{}\" transform=\"translate({},{}) scale(1,-1)\" fill=\"{CHRO_COLOR}\"/>\
         <rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{CHRO_COLOR}\"/>\
         <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{CHRO_COLOR}\"/>",
        c(layout.x_for_age(chro_age)),
        c(layout.marker_y()),
        layout.chro_pin(),
        c(-0.03 * w),
        c(0.067 * h),
        c(-0.147 * h),
        c(0.008 * w),
        c(0.027 * h),
        c(0.006 * w),
        c(0.003 * h),
        c(0.024 * w),
    ));
    svg.push_str(&text(0.006 * w, 0.02 * h, 0.032 * w, " fill=\"white\"", &format_value(chro_age)));
    svg.push_str(&text(0.0, 0.117 * h, layout.small_font(), " font-weight=\"bold\"", copy.chro_label));
    svg.push_str("</g></svg>");

    Snapshot {
        width: w.round() as u32,
        height: h.round() as u32,
        svg,
    }
}

pub fn aging_speed(pace_value: f64, callout: &str, axis_label: &str) -> Snapshot {
    use aging_speed::{x_scale, AXIS_LEFT, AXIS_RIGHT, AXIS_TICKS, BASELINE_Y, CURVE_FILL, MARKER_COLOR, VIEW_HEIGHT, VIEW_WIDTH};

    let c = fmt_coord;
    let marker = PaceMarker::at(pace_value);
    let mut svg = open(VIEW_WIDTH, VIEW_HEIGHT);

    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"{CURVE_FILL}\" stroke=\"none\"/>",
        aging_speed::curve_path()
    ));
    svg.push_str(&format!(
        "<line x1=\"{AXIS_LEFT}\" y1=\"{BASELINE_Y}\" x2=\"{AXIS_RIGHT}\" y2=\"{BASELINE_Y}\" stroke=\"#333\"/>"
    ));
    for tick in AXIS_TICKS {
        svg.push_str(&text(x_scale(tick), 275.0, 10.0, "", &format_value(tick)));
    }

    let dashed = format!(" stroke=\"{MARKER_COLOR}\" stroke-dasharray=\"4 3\"");
    svg.push_str(&format!(
        "<line x1=\"{x}\" y1=\"{}\" x2=\"{x}\" y2=\"{}\"{dashed} stroke-width=\"1.5\"/>",
        c(marker.top_y),
        c(marker.base_y),
        x = c(marker.x),
    ));
    svg.push_str(&format!(
        "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\"{dashed}/>",
        c(marker.x),
        c(marker.callout_end_x),
        y = c(marker.callout_y),
    ));
    for (cx, cy) in [
        (marker.x, marker.top_y),
        (marker.x, marker.base_y),
        (marker.callout_end_x, marker.callout_y),
    ] {
        svg.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"{MARKER_COLOR}\"/>",
            c(cx),
            c(cy)
        ));
    }
    svg.push_str(&text(marker.x, marker.value_y, 16.0, " font-weight=\"bold\"", &format_value(pace_value)));
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"11\">{}</text>",
        c(marker.x + 5.0),
        c(marker.callout_y - 10.0),
        escape(callout)
    ));
    svg.push_str(&text(VIEW_WIDTH / 2.0, 295.0, 12.0, "", axis_label));
    svg.push_str("</svg>");

    Snapshot {
        width: VIEW_WIDTH as u32,
        height: VIEW_HEIGHT as u32,
        svg,
    }
}

pub fn radar(risks: &DiseaseRisks, copy: &RadarCopy<'_>) -> Snapshot {
    const SIZE: f64 = 400.0;
    let dataset = RadarDataset::from_risks(risks);
    let geometry = RadarGeometry::fit(&dataset, SIZE / 2.0, SIZE / 2.0 + 20.0, 120.0);
    let mut svg = open(SIZE, SIZE + 20.0);

    for (i, series) in dataset.series.iter().enumerate() {
        let y = 18.0 + i as f64 * 18.0;
        svg.push_str(&format!(
            "<rect x=\"20\" y=\"{}\" width=\"24\" height=\"10\" fill=\"{}\" stroke=\"{}\"/>\
             <text x=\"50\" y=\"{}\" font-size=\"11\">{}</text>",
            fmt_coord(y - 9.0),
            series.fill,
            series.stroke,
            fmt_coord(y),
            escape(copy.scenarios[i])
        ));
    }
    for value in geometry.ring_values() {
        svg.push_str(&format!(
            "<polygon points=\"{}\" fill=\"none\" stroke=\"#ddd\"/>",
            geometry.ring(value)
        ));
    }
    svg.push_str(&format!(
        "<polygon points=\"{}\" fill=\"none\" stroke=\"#888\" stroke-width=\"2\"/>",
        geometry.zero_ring()
    ));
    for series in &dataset.series {
        svg.push_str(&format!(
            "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
            geometry.polygon(&series.values),
            series.fill,
            series.stroke
        ));
    }
    for (axis, label) in copy.conditions.iter().enumerate() {
        let (x, y) = geometry.polar(axis, geometry.radius + 22.0);
        svg.push_str(&text(x, y, 12.0, " dominant-baseline=\"middle\"", label));
    }
    svg.push_str("</svg>");

    Snapshot {
        width: SIZE as u32,
        height: (SIZE + 20.0) as u32,
        svg,
    }
}
