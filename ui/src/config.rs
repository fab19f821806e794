//! Runtime configuration shared by every view.
//!
//! Platform crates build a [`ReportConfig`] at startup and hand it to
//! [`register`] before launching; views read it back with [`current`]. When
//! nothing was registered (tests, previews) the defaults apply.

use once_cell::sync::OnceCell;

use crate::core::fetch::DataSource;

/// Mock dataset bundled with the crate.
pub const BUNDLED_REPORTS: &str = include_str!("../assets/mockdata/mock-data.json");

/// Default bound on a data-source request.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Sharer endpoint the share links point at.
pub const DEFAULT_SHARE_ENDPOINT: &str = "https://www.facebook.com/sharer.php";

/// Public location of the web build; the desktop shell shares links under it.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://lucy.example.org/LUCY-test";

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data_source: DataSource,
    pub fetch_timeout_ms: u64,
    pub share_endpoint: String,
    pub public_base_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::Embedded(BUNDLED_REPORTS),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            share_endpoint: DEFAULT_SHARE_ENDPOINT.to_string(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn with_data_source(mut self, source: DataSource) -> Self {
        self.data_source = source;
        self
    }

    /// Apply `LUCY_DATA_FILE` and `LUCY_FETCH_TIMEOUT_MS` overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = std::env::var_os("LUCY_DATA_FILE") {
            self.data_source = DataSource::File(path.into());
        }
        if let Ok(raw) = std::env::var("LUCY_FETCH_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.fetch_timeout_ms = ms,
                _ => tracing::warn!(value = %raw, "ignoring invalid LUCY_FETCH_TIMEOUT_MS"),
            }
        }
        self
    }
}

static CONFIG: OnceCell<ReportConfig> = OnceCell::new();
static FALLBACK: OnceCell<ReportConfig> = OnceCell::new();

/// Install the configuration. Only the first call wins.
pub fn register(config: ReportConfig) {
    tracing::debug!(
        source = ?config.data_source,
        timeout_ms = config.fetch_timeout_ms,
        "registering report config"
    );
    if CONFIG.set(config).is_err() {
        tracing::warn!("report config already registered; keeping the first one");
    }
}

pub fn current() -> &'static ReportConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| FALLBACK.get_or_init(ReportConfig::default))
}
