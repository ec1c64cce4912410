//! The app-facing localization handle.
//!
//! [`I18n`] bundles the locale store with the per-language formatter cache
//! and the translator, so screens hold one value instead of three. It is
//! clone-cheap; clones share the underlying store.
//!
//! Formatter pairs for all supported languages are built eagerly at
//! construction. They are pure values derived from the language alone, so
//! the cache is immutable and can never hold a stale entry: switching
//! languages just selects a different pair.

use std::collections::HashMap;
use std::sync::Arc;

use crate::format::{Currency, DateTimeFormat, FormatterPair, NumberFormat};
use crate::language::Language;
use crate::settings::SettingsStore;
use crate::store::{LocaleState, LocaleStore, Subscription};
use crate::translate::{self, Args};

/// Localization handle: active language, translator, and formatters.
#[derive(Debug, Clone)]
pub struct I18n {
    store: LocaleStore,
    formatters: Arc<HashMap<Language, FormatterPair>>,
}

impl I18n {
    /// Handle starting at an explicit language, with no persistence.
    pub fn new(initial: Language) -> Self {
        Self::with_store(LocaleStore::new(initial))
    }

    /// Handle starting from the device locale list.
    pub fn from_device_locales<S: AsRef<str>>(device_locales: &[S]) -> Self {
        Self::with_store(LocaleStore::from_device_locales(device_locales))
    }

    /// Handle backed by persisted settings; see
    /// [`LocaleStore::persistent`] for the startup chain.
    pub fn persistent<T, S>(settings: T, device_locales: &[S]) -> Self
    where
        T: SettingsStore + 'static,
        S: AsRef<str>,
    {
        Self::with_store(LocaleStore::persistent(settings, device_locales))
    }

    /// Wraps an existing store.
    pub fn with_store(store: LocaleStore) -> Self {
        let formatters = Language::ALL
            .iter()
            .map(|language| (*language, FormatterPair::for_language(*language)))
            .collect();
        I18n {
            store,
            formatters: Arc::new(formatters),
        }
    }

    /// The underlying store, for callers that only need switching.
    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn language(&self) -> Language {
        self.store.language()
    }

    pub fn is_rtl(&self) -> bool {
        self.store.is_rtl()
    }

    pub fn snapshot(&self) -> LocaleState {
        self.store.snapshot()
    }

    pub fn set_language(&self, language: Language) {
        self.store.set_language(language);
    }

    pub fn set_language_code(&self, code: &str) {
        self.store.set_language_code(code);
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&LocaleState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Translates a key in the active language.
    pub fn t(&self, key: &str) -> String {
        translate::translate(self.language(), key, &[])
    }

    /// Translates a key with placeholder arguments.
    pub fn t_with(&self, key: &str, args: Args<'_>) -> String {
        translate::translate(self.language(), key, args)
    }

    /// The formatter pair for the active language (market-time clock).
    pub fn formatters(&self) -> FormatterPair {
        let language = self.language();
        self.formatters
            .get(&language)
            .copied()
            .unwrap_or_else(|| FormatterPair::for_language(language))
    }

    /// Plain number formatter for the active language.
    pub fn number_format(&self) -> NumberFormat {
        self.formatters().number
    }

    /// Market-time date formatter for the active language.
    pub fn date_time_format(&self) -> DateTimeFormat {
        self.formatters().date_time
    }

    /// Local-clock date formatter for the active language.
    pub fn local_date_time_format(&self) -> DateTimeFormat {
        DateTimeFormat::local_time(self.language())
    }

    /// Currency formatter for the active language.
    pub fn currency_format(&self, currency: Currency) -> NumberFormat {
        NumberFormat::currency(self.language(), currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TimeZoneSpec;
    use chrono::TimeZone;

    // ==================== Translation Tests ====================

    #[test]
    fn test_t_follows_the_active_language() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.t("portfolio.title"), "Portfolio");

        i18n.set_language(Language::Ja);
        assert_eq!(i18n.t("portfolio.title"), "ポートフォリオ");
    }

    #[test]
    fn test_t_with_interpolates() {
        let i18n = I18n::new(Language::En);
        let out = i18n.t_with(
            "premium.feature_locked",
            &[("feature", "Realtime Data".into())],
        );
        assert_eq!(out, "Realtime Data is a premium feature.");
    }

    // ==================== Formatter Tests ====================

    #[test]
    fn test_formatters_follow_the_active_language() {
        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.number_format().format(12345.67), "12,345.67");

        i18n.set_language(Language::De);
        assert_eq!(i18n.number_format().format(12345.67), "12.345,67");
    }

    #[test]
    fn test_date_time_formatter_is_market_pinned() {
        let i18n = I18n::new(Language::Ja);
        assert_eq!(i18n.date_time_format().zone(), TimeZoneSpec::Market);

        let instant = chrono::Utc.with_ymd_and_hms(2023, 10, 27, 10, 30, 0).unwrap();
        assert_eq!(i18n.date_time_format().format(instant), "2023年10月27日 19:30");
    }

    #[test]
    fn test_local_formatter_is_available_by_name() {
        let i18n = I18n::new(Language::Ja);
        assert_eq!(i18n.local_date_time_format().zone(), TimeZoneSpec::Local);
        assert_eq!(i18n.local_date_time_format().language(), Language::Ja);
    }

    #[test]
    fn test_currency_formatter_for_active_language() {
        let i18n = I18n::new(Language::Ja);
        assert_eq!(
            i18n.currency_format(Currency::Jpy).format(12345.67),
            "¥12,346"
        );
    }

    #[test]
    fn test_formatter_cache_covers_every_language() {
        let i18n = I18n::new(Language::Ja);
        for language in Language::ALL {
            i18n.set_language(language);
            assert_eq!(i18n.formatters().language(), language);
        }
    }

    // ==================== Handle Tests ====================

    #[test]
    fn test_clones_share_the_store() {
        let i18n = I18n::new(Language::Ja);
        let clone = i18n.clone();
        clone.set_language(Language::Ar);
        assert!(i18n.is_rtl());
        assert_eq!(i18n.language(), Language::Ar);
    }

    #[test]
    fn test_subscription_through_the_handle() {
        let i18n = I18n::new(Language::Ja);
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let _sub = i18n.subscribe(move |state| {
            sink.lock().unwrap().push(state.language.code().to_string())
        });

        i18n.set_language(Language::Es);
        assert_eq!(log.lock().unwrap().as_slice(), ["es"]);
    }
}
