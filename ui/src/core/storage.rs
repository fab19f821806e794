//! Single-slot cache for the report picked on the lookup page.
//!
//! The lookup view stores the matched record here before navigating so the
//! report view can render without a second fetch. There is exactly one slot,
//! under [`SELECTED_REPORT_KEY`], and it lives for the current session:
//! `sessionStorage` on the web, the running process on desktop.

use super::error::ReportError;
use super::report::RawReport;

pub const SELECTED_REPORT_KEY: &str = "reportData";

/// Replace the slot contents with `report`.
pub fn store_selected(report: &RawReport) -> Result<(), ReportError> {
    let payload =
        serde_json::to_string(report).map_err(|err| ReportError::Storage(err.to_string()))?;
    backend::write(&payload)
}

/// Whatever record currently occupies the slot.
pub fn load_selected() -> Result<Option<RawReport>, ReportError> {
    match backend::read()? {
        Some(payload) => serde_json::from_str(&payload)
            .map(Some)
            .map_err(|err| ReportError::Storage(err.to_string())),
        None => Ok(None),
    }
}

/// The cached record if it belongs to `sample_id`. Cache problems are logged
/// and read as a miss.
pub fn selected_for(sample_id: &str) -> Option<RawReport> {
    match load_selected() {
        Ok(Some(report)) if report.sample_id == sample_id => Some(report),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(%err, "ignoring unreadable selected-report slot");
            None
        }
    }
}

pub fn clear_selected() -> Result<(), ReportError> {
    backend::clear()
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{ReportError, SELECTED_REPORT_KEY};

    fn session_storage() -> Result<web_sys::Storage, ReportError> {
        web_sys::window()
            .ok_or_else(|| ReportError::Storage("window unavailable".into()))?
            .session_storage()
            .map_err(|_| ReportError::Storage("sessionStorage blocked".into()))?
            .ok_or_else(|| ReportError::Storage("sessionStorage unavailable".into()))
    }

    pub(super) fn write(payload: &str) -> Result<(), ReportError> {
        session_storage()?
            .set_item(SELECTED_REPORT_KEY, payload)
            .map_err(|_| ReportError::Storage("sessionStorage write rejected".into()))
    }

    pub(super) fn read() -> Result<Option<String>, ReportError> {
        session_storage()?
            .get_item(SELECTED_REPORT_KEY)
            .map_err(|_| ReportError::Storage("sessionStorage read rejected".into()))
    }

    pub(super) fn clear() -> Result<(), ReportError> {
        session_storage()?
            .remove_item(SELECTED_REPORT_KEY)
            .map_err(|_| ReportError::Storage("sessionStorage remove rejected".into()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::sync::Mutex;

    use super::ReportError;

    static SLOT: Mutex<Option<String>> = Mutex::new(None);

    fn with_slot<T>(f: impl FnOnce(&mut Option<String>) -> T) -> Result<T, ReportError> {
        let mut slot = SLOT
            .lock()
            .map_err(|_| ReportError::Storage("selected-report slot poisoned".into()))?;
        Ok(f(&mut slot))
    }

    pub(super) fn write(payload: &str) -> Result<(), ReportError> {
        with_slot(|slot| *slot = Some(payload.to_string()))
    }

    pub(super) fn read() -> Result<Option<String>, ReportError> {
        with_slot(|slot| slot.clone())
    }

    pub(super) fn clear() -> Result<(), ReportError> {
        with_slot(|slot| *slot = None)
    }
}
