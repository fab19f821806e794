//! Loading the report collection from the configured data source.

use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use super::error::ReportError;
use super::report::ReportCollection;
use super::timing;

/// Where the `{ "reports": [...] }` document comes from.
#[derive(Clone)]
pub enum DataSource {
    /// HTTP GET against a static JSON resource.
    #[cfg(target_arch = "wasm32")]
    Url(String),
    /// JSON on disk (desktop override).
    #[cfg(not(target_arch = "wasm32"))]
    File(PathBuf),
    /// JSON compiled into the binary.
    Embedded(&'static str),
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(target_arch = "wasm32")]
            DataSource::Url(url) => f.debug_tuple("Url").field(url).finish(),
            #[cfg(not(target_arch = "wasm32"))]
            DataSource::File(path) => f.debug_tuple("File").field(path).finish(),
            DataSource::Embedded(payload) => write!(f, "Embedded({} bytes)", payload.len()),
        }
    }
}

/// Load and parse the collection, giving up after `timeout_ms`.
pub async fn load_collection(
    source: &DataSource,
    timeout_ms: u64,
) -> Result<ReportCollection, ReportError> {
    tracing::debug!(?source, timeout_ms, "loading report collection");
    match timing::timeout(timeout_ms, read_payload(source)).await {
        Some(payload) => {
            let collection = ReportCollection::from_json(&payload?)?;
            tracing::info!(reports = collection.len(), "report collection loaded");
            Ok(collection)
        }
        None => Err(ReportError::Timeout { ms: timeout_ms }),
    }
}

/// Load from the registered configuration.
pub async fn load_configured() -> Result<ReportCollection, ReportError> {
    let config = crate::config::current();
    load_collection(&config.data_source, config.fetch_timeout_ms).await
}

async fn read_payload(source: &DataSource) -> Result<String, ReportError> {
    match source {
        #[cfg(target_arch = "wasm32")]
        DataSource::Url(url) => fetch_text(url).await,
        #[cfg(not(target_arch = "wasm32"))]
        DataSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|err| ReportError::Fetch(format!("{}: {err}", path.display()))),
        DataSource::Embedded(payload) => Ok((*payload).to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, ReportError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window = web_sys::window().ok_or_else(|| ReportError::Fetch("window unavailable".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| ReportError::Fetch(format!("{url}: {err:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ReportError::Fetch("unexpected fetch result".into()))?;

    if !response.ok() {
        return Err(ReportError::Fetch(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }

    let text = response
        .text()
        .map_err(|err| ReportError::Fetch(format!("{err:?}")))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|err| ReportError::Fetch(format!("{err:?}")))?;
    text.as_string()
        .ok_or_else(|| ReportError::Parse("response body is not text".into()))
}
