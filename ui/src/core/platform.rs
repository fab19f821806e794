//! Platform detection helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }
}

/// Address of the page currently shown, used as the shared link target.
///
/// The browser knows its own location; the desktop shell has none, so the
/// configured public base URL stands in.
pub fn current_page_url(sample_id: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) {
            return href;
        }
    }

    let base = crate::config::current().public_base_url.trim_end_matches('/');
    format!("{base}/report/{sample_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_report_desktop() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(Platform::current(), Platform::Desktop);
        assert!(!Platform::current().as_str().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn page_url_falls_back_to_public_base() {
        let url = current_page_url("LU0001");
        assert!(url.ends_with("/report/LU0001"), "{url}");
    }
}
