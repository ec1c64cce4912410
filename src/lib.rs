//! Internationalization (i18n) library for the Bridge portfolio app.
//!
//! This crate provides a centralized, extensible architecture for managing
//! the languages Bridge ships in. All language-related logic, localized
//! strings, formatting conventions, and language-switch infrastructure is
//! contained here.
//!
//! # Architecture
//!
//! - `language`: Type-safe `Language` code for the supported set and its metadata
//! - `catalog`: Compiled-in translation tables and the fallback lookup
//! - `translate`: Key lookup with `{{placeholder}}` interpolation
//! - `format`: Locale-aware number, currency, and date-time formatters
//! - `resolver`: Device-locale to supported-language resolution
//! - `store`: Language-switch state with subscriber notification
//! - `settings`: Persistence of the chosen language across launches
//! - `context`: The `I18n` handle that ties the pieces together
//! - `display`: Shared market-data display strings
//! - `validator`: Catalog consistency validation
//!
//! # Example
//!
//! ```rust
//! use bridge_i18n::{I18n, Language};
//!
//! let i18n = I18n::new(Language::En);
//! assert_eq!(i18n.t("portfolio.title"), "Portfolio");
//!
//! i18n.set_language(Language::Ja);
//! assert_eq!(i18n.t("portfolio.title"), "ポートフォリオ");
//! assert!(!i18n.is_rtl());
//! ```

mod catalog;
mod context;
mod display;
mod error;
mod format;
mod language;
mod resolver;
mod settings;
mod store;
mod translate;
mod validator;

pub use catalog::{all_tables, catalog, entries, Catalog, Entries};
pub use context::I18n;
pub use display::{
    change_text, data_source_line, delay_text, market_cap_text, number_or_na, premium_locked_text,
};
pub use error::{I18nError, Result};
pub use format::{
    Currency, DateTimeFormat, FormatterPair, NumberFormat, NumberStyle, TimeZoneSpec,
};
pub use language::{Language, DEFAULT_LANGUAGE};
pub use resolver::{detect_device_locales, resolve_from_env, resolve_initial_language};
pub use settings::{FileSettings, MemorySettings, Settings, SettingsStore};
pub use store::{LocaleState, LocaleStore, Subscription};
pub use translate::{translate, translate_in, Arg, Args};
pub use validator::{CatalogReport, CatalogValidator};
