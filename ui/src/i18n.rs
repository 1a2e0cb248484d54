//! Localized strings for the admin shell.
//!
//! Fluent files live under `i18n/<lang-id>/axis-admin-ui.ftl`; `en-US` is the fallback and
//! reference locale. Assets are embedded with `rust-embed` (always on wasm, via the
//! `debug-embed` feature).
//!
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let label = ui::t!("nav-dashboard");
//! ```
//!
//! Language selection uses `navigator.languages` on wasm and the OS locale list elsewhere.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use dioxus_logger::tracing::warn;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// `fl!` against the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-dashboard")
/// t!("stat-change", percent = 12)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "axis-admin-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("en-US")));

static INIT: Once = Once::new();

/// Load bundles for the requested languages. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. An unparsable tag is ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
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

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn compile_time_domain_matches_embedded_file() {
        let manifest = include_str!("../i18n.toml");
        assert!(manifest.contains(&format!("domain = \"{DOMAIN}\"")));
        assert!(Localizations::get(&format!("en-US/{DOMAIN}.ftl")).is_some());
        assert!(Localizations::get(&format!("es-ES/{DOMAIN}.ftl")).is_some());
    }

    #[test]
    fn fallback_lookup_works() {
        init();
        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), "Dashboard");
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let before = fl!(&*LOADER, "nav-settings");
        let _ = set_language("zz-ZZ");
        assert_eq!(fl!(&*LOADER, "nav-settings"), before);
    }
}
