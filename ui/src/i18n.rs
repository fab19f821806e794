//! Localization for `lucy-ui`.
//!
//! Bundles live under `i18n/<locale>/lucy-ui.ftl` and are embedded at compile
//! time; `en-US` is the fallback and `zh-TW` carries the report's original
//! copy. Platform crates call [`init`] once at startup, components look
//! messages up through [`t!`](crate::t):
//! ```ignore
//! use crate::t;
//! let title = t!("report-title");
//! let footer = t!("footer-rights", year = "2024");
//! ```
//!
//! Desktop builds pick the OS locale list, web builds read
//! `navigator.languages`; the navbar can switch at runtime through
//! [`set_language`].
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!(&*LOADER, ...)` with the crate's shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "lucy-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

/// Load `requested` into [`LOADER`]. Loading rebuilds the bundles, so the
/// isolation setting is reapplied afterwards: values are spliced into running
/// CJK text and rasterized snapshots, where bidi marks would show up.
fn select(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, i18n_embed::I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Localizations, requested);
    LOADER.set_use_isolating(false);
    selected
}

static INIT: Once = Once::new();

/// Load the bundles for the requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select(&requested) {
            Ok(selected) => tracing::debug!(?selected, "localization selected"),
            Err(err) => tracing::warn!(%err, "language selection failed; using fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    select(&[lang]).map(|_| ())
}

/// Embedded locale folder names, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language currently at the front of the loader's list.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "zh-TW"));
    }

    #[test]
    fn unknown_tag_keeps_current_language() {
        init();
        let before = fl!(&*LOADER, "nav-lookup");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-lookup");
        assert_eq!(before, after);
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        init();
        let footer = fl!(&*LOADER, "footer-rights", year = "2024");
        assert!(footer.contains("2024"));
        assert!(!footer.contains('\u{2068}'));
    }

    #[test]
    fn switching_language_keeps_marks_out() {
        init();
        set_language("en-US").unwrap();
        let callout = fl!(&*LOADER, "aging-speed-callout", pace_pr_inverse = "40");
        assert!(callout.contains("40"));
        assert!(!callout.contains('\u{2068}') && !callout.contains('\u{2069}'));
    }
}
