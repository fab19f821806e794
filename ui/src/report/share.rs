//! Sharing a report section: snapshot the section as SVG, rasterize it to a
//! PNG data URL and hand the sharer link to the platform.
//!
//! The browser rasterizes through a canvas and opens the sharer in a new tab.
//! The desktop shell renders with resvg, keeps a copy of the image under the
//! app data directory and puts the sharer link on the clipboard.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;

use super::ReportSection;
use crate::charts::labels::{condition_label, scenario_label};
use crate::charts::snapshot::{self, GaugeCopy, RadarCopy, Snapshot};
use crate::core::error::ShareError;
use crate::core::format::format_value;
use crate::core::lookup::LoadedReport;
use crate::core::metrics::{Condition, RiskScenario};
use crate::core::platform;
use crate::t;

/// Width the gauge snapshot is drawn at.
const GAUGE_SNAPSHOT_WIDTH: f64 = 600.0;

/// How the link reached the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareDelivery {
    /// Sharer opened in a new browsing context.
    Opened,
    /// Sharer link copied; `saved` is where the image was written, if anywhere.
    Copied { saved: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
enum ShareStatus {
    Idle,
    Working,
    Done(ShareDelivery),
    Failed,
}

/// `data:image/png;base64,...` for raw PNG bytes.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Sharer URL with the page and picture as query parameters.
pub fn build_share_url(endpoint: &str, page_url: &str, picture: &str) -> Result<String, ShareError> {
    let url = url::Url::parse_with_params(endpoint, &[("u", page_url), ("picture", picture)])?;
    Ok(url.into())
}

/// Localized SVG snapshot of one section.
pub fn section_snapshot(section: ReportSection, report: &LoadedReport) -> Snapshot {
    let metrics = &report.metrics;
    match section {
        ReportSection::BiologicalAge => {
            let (intro, result) = (t!("gauge-caption-intro"), t!("gauge-caption-result"));
            let (bio_label, chro_label) = (t!("gauge-bio-label"), t!("gauge-chro-label"));
            snapshot::gauge(
                metrics.bio_age,
                metrics.chro_age,
                GAUGE_SNAPSHOT_WIDTH,
                &GaugeCopy {
                    intro: &intro,
                    result: &result,
                    bio_label: &bio_label,
                    chro_label: &chro_label,
                },
            )
        }
        ReportSection::AgingSpeed => snapshot::aging_speed(
            metrics.pace_value,
            &t!(
                "aging-speed-callout",
                pace_pr_inverse = format_value(metrics.pace_pr_inverse)
            ),
            &t!("aging-speed-axis-label"),
        ),
        ReportSection::DiseaseRisks => {
            let conditions = Condition::ALL.map(condition_label);
            let scenarios = [RiskScenario::Current, RiskScenario::Reduced].map(scenario_label);
            snapshot::radar(
                &metrics.disease_risks,
                &RadarCopy {
                    conditions: [
                        &conditions[0],
                        &conditions[1],
                        &conditions[2],
                        &conditions[3],
                        &conditions[4],
                    ],
                    scenarios: [&scenarios[0], &scenarios[1]],
                },
            )
        }
    }
}

/// Run the whole share pipeline for `section`.
pub async fn share_section(
    section: ReportSection,
    report: &LoadedReport,
) -> Result<ShareDelivery, ShareError> {
    let sample_id = report.raw.sample_id.as_str();
    tracing::debug!(
        sample_id,
        section = section.anchor(),
        platform = platform::Platform::current().as_str(),
        "sharing section"
    );

    let snapshot = section_snapshot(section, report);
    let page_url = platform::current_page_url(sample_id);
    let endpoint = &crate::config::current().share_endpoint;

    #[cfg(target_arch = "wasm32")]
    {
        let picture = web::canvas_data_url(&snapshot).await?;
        let share_url = build_share_url(endpoint, &page_url, &picture)?;
        web::open_in_new_context(&share_url)?;
        Ok(ShareDelivery::Opened)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let png = native::rasterize(&snapshot)?;
        let share_url = build_share_url(endpoint, &page_url, &png_data_url(&png))?;
        let saved = match native::save_png(&format!("{sample_id}-{}.png", section.anchor()), &png) {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!(%err, "share image not saved");
                None
            }
        };
        native::copy_to_clipboard(&share_url)?;
        Ok(ShareDelivery::Copied { saved })
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    use super::{ShareError, Snapshot};

    pub(super) async fn canvas_data_url(snapshot: &Snapshot) -> Result<String, ShareError> {
        let render = |msg: &str| ShareError::Render(msg.to_string());

        let opts = BlobPropertyBag::new();
        opts.set_type("image/svg+xml");
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&snapshot.svg));
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|_| render("unable to build SVG blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| render("unable to create SVG URL"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| render("document unavailable"))?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|_| render("unable to create canvas"))?
            .dyn_into()
            .map_err(|_| render("canvas cast failed"))?;
        canvas.set_width(snapshot.width);
        canvas.set_height(snapshot.height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| render("canvas context unavailable"))?
            .ok_or_else(|| render("canvas context missing"))?
            .dyn_into()
            .map_err(|_| render("context cast failed"))?;

        let image = HtmlImageElement::new().map_err(|_| render("unable to create image"))?;
        image.set_src(&url);
        let decoded = JsFuture::from(image.decode()).await;
        if decoded.is_err() {
            Url::revoke_object_url(&url).ok();
            return Err(render("snapshot decode failed"));
        }

        let drawn = context.draw_image_with_html_image_element(&image, 0.0, 0.0);
        let data_url = canvas.to_data_url_with_type("image/png");
        Url::revoke_object_url(&url).ok();
        drawn.map_err(|_| render("unable to draw snapshot"))?;
        data_url.map_err(|_| ShareError::Encode("canvas could not be serialised".into()))
    }

    pub(super) fn open_in_new_context(url: &str) -> Result<(), ShareError> {
        let window =
            web_sys::window().ok_or_else(|| ShareError::Delivery("window unavailable".into()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ShareError::Delivery("popup blocked".into())),
            Err(_) => Err(ShareError::Delivery("window.open failed".into())),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use super::{ShareError, Snapshot};

    /// Oversampling so shared images stay sharp on high-density screens.
    const RENDER_SCALE: f32 = 2.0;

    pub(super) fn rasterize(snapshot: &Snapshot) -> Result<Vec<u8>, ShareError> {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(&snapshot.svg, &options)
            .map_err(|err| ShareError::Render(err.to_string()))?;
        let size = tree.size().to_int_size();
        let width = (size.width() as f32 * RENDER_SCALE).ceil() as u32;
        let height = (size.height() as f32 * RENDER_SCALE).ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ShareError::Render(format!("invalid canvas size {width}x{height}")))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(RENDER_SCALE, RENDER_SCALE),
            &mut pixmap.as_mut(),
        );
        pixmap
            .encode_png()
            .map_err(|err| ShareError::Encode(err.to_string()))
    }

    fn share_dir() -> Result<PathBuf, ShareError> {
        let dirs = directories::ProjectDirs::from("org", "LUCY", "LUCY")
            .ok_or_else(|| ShareError::Delivery("unable to determine data directory".into()))?;
        Ok(dirs.data_dir().join("shares"))
    }

    pub(super) fn save_png(filename: &str, png: &[u8]) -> Result<String, ShareError> {
        let dir = share_dir()?;
        std::fs::create_dir_all(&dir).map_err(|err| ShareError::Delivery(err.to_string()))?;
        let path = dir.join(filename);
        std::fs::write(&path, png).map_err(|err| ShareError::Delivery(err.to_string()))?;
        Ok(path.to_string_lossy().to_string())
    }

    pub(super) fn copy_to_clipboard(text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ShareError::Delivery(err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ShareError::Delivery(err.to_string()))
    }

}

/// Share button for one section; shows a short notice with the outcome.
#[component]
pub fn ShareButton(section: ReportSection, report: LoadedReport) -> Element {
    let mut status = use_signal(|| ShareStatus::Idle);
    let mut busy = use_signal(|| false);

    let on_click = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        status.set(ShareStatus::Working);
        let report = report.clone();
        spawn(async move {
            match share_section(section, &report).await {
                Ok(delivery) => status.set(ShareStatus::Done(delivery)),
                Err(err) => {
                    tracing::error!(%err, section = section.anchor(), "share failed");
                    status.set(ShareStatus::Failed);
                }
            }
            busy.set(false);
        });
    };

    let notice = match status() {
        ShareStatus::Idle => None,
        ShareStatus::Working => Some(("share__notice", t!("share-working"))),
        ShareStatus::Done(ShareDelivery::Opened) => Some(("share__notice share__notice--ok", t!("share-opened"))),
        ShareStatus::Done(ShareDelivery::Copied { saved }) => Some((
            "share__notice share__notice--ok",
            match saved {
                Some(path) => format!("{} {path}", t!("share-copied")),
                None => t!("share-copied"),
            },
        )),
        ShareStatus::Failed => Some(("share__notice share__notice--error", t!("share-failed"))),
    };

    rsx! {
        div { class: "share",
            button {
                r#type: "button",
                class: "button button--ghost share__button",
                disabled: busy(),
                onclick: on_click,
                {t!("share-button")}
            }
            if let Some((class_name, message)) = notice {
                span { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}
