//! Initial language resolution from device-reported locales.
//!
//! The mobile shell hands over its locale list in preference order; only the
//! first entry counts. Resolution is total: any malformed, empty, or
//! unsupported input lands on [`DEFAULT_LANGUAGE`], so startup can never fail
//! on locale data.

use tracing::debug;

use crate::language::{Language, DEFAULT_LANGUAGE};

/// Resolves the startup language from a device locale list.
///
/// Takes the primary language subtag of the FIRST entry and matches it
/// against the supported set; the rest of the list is deliberately ignored.
/// An empty list, an empty first entry, or an unsupported subtag resolves to
/// the default language.
///
/// # Arguments
/// * `device_locales` - locale tags in preference order (`"en-US"`,
///   `"ja_JP.UTF-8"`, `"zh-Hant-TW"`)
///
/// # Returns
/// The matched language, or [`DEFAULT_LANGUAGE`] when nothing matches.
pub fn resolve_initial_language<S: AsRef<str>>(device_locales: &[S]) -> Language {
    let first = match device_locales.first() {
        Some(locale) => locale.as_ref(),
        None => {
            debug!("No device locales reported, using default language");
            return DEFAULT_LANGUAGE;
        }
    };

    match Language::from_code(primary_subtag(first)) {
        Some(language) => {
            debug!("Resolved device locale {} to {}", first, language.code());
            language
        }
        None => {
            debug!(
                "Unsupported device locale {:?}, using default language",
                first
            );
            DEFAULT_LANGUAGE
        }
    }
}

/// Extracts the primary language subtag from a locale tag.
///
/// Handles both BCP 47 (`en-US`) and POSIX (`en_US.UTF-8@euro`) shapes:
/// encoding and modifier suffixes are stripped, and the text before the
/// first `-` or `_` is the subtag.
fn primary_subtag(locale: &str) -> &str {
    let locale = locale.trim();
    let locale = locale.split(['.', '@']).next().unwrap_or(locale);
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Reads the device locale list from the POSIX environment.
///
/// Desktop and CI stand-in for the mobile locale API: `LC_ALL`, then
/// `LC_MESSAGES`, then `LANG`, first non-empty setting wins. The special
/// POSIX values `C` and `POSIX` carry no language preference and are
/// skipped.
pub fn detect_device_locales() -> Vec<String> {
    for name in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(name) {
            let value = value.trim();
            if value.is_empty() || value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix")
            {
                continue;
            }
            debug!("Detected locale {} from {}", value, name);
            return vec![value.to_string()];
        }
    }
    Vec::new()
}

/// Resolves the startup language straight from the environment.
pub fn resolve_from_env() -> Language {
    resolve_initial_language(&detect_device_locales())
}
