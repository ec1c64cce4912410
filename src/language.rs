//! The closed set of languages the Bridge app ships with.
//!
//! Every other part of the crate keys off [`Language`]: the catalog tables,
//! the formatters, and the locale store all take the enum, so an unsupported
//! code can only enter the system at a parse boundary ([`Language::from_code`]
//! or [`FromStr`]), never deeper in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Fallback language for resolution and catalog lookups.
///
/// Japanese is the home market; its catalog table is the complete reference
/// that every other language falls back to.
pub const DEFAULT_LANGUAGE: Language = Language::Ja;

/// A language supported by the app, identified by its ISO 639-1 code.
///
/// The set is closed: adding a language means adding a variant and its
/// catalog table, never runtime data. Serializes as the lowercase code
/// (`"ja"`, `"en"`, ...) for settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Japanese
    Ja,
    /// English
    En,
    /// Chinese (Simplified)
    Zh,
    /// Korean
    Ko,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Portuguese
    Pt,
    /// Arabic
    Ar,
    /// Hindi
    Hi,
}

impl Language {
    /// All supported languages in canonical order (default first).
    pub const ALL: [Language; 10] = [
        Language::Ja,
        Language::En,
        Language::Zh,
        Language::Ko,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
        Language::Ar,
        Language::Hi,
    ];

    /// Returns the lowercase ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ko => "ko",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::Ar => "ar",
            Language::Hi => "hi",
        }
    }

    /// Returns the English name of the language.
    pub fn english_name(self) -> &'static str {
        match self {
            Language::Ja => "Japanese",
            Language::En => "English",
            Language::Zh => "Chinese",
            Language::Ko => "Korean",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::Pt => "Portuguese",
            Language::Ar => "Arabic",
            Language::Hi => "Hindi",
        }
    }

    /// Returns the name of the language in the language itself.
    ///
    /// These are the labels the language selector shows regardless of the
    /// active UI language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ja => "日本語",
            Language::En => "English",
            Language::Zh => "中文",
            Language::Ko => "한국어",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Pt => "Português",
            Language::Ar => "العربية",
            Language::Hi => "हिन्दी",
        }
    }

    /// Returns true if the language is written right-to-left.
    ///
    /// Arabic is the only RTL language in the supported set; layout direction
    /// is always derived from the language, never stored separately.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Looks up a language by its ISO 639-1 code.
    ///
    /// Matching is case-insensitive on the bare code (`"ja"`, `"JA"`).
    /// Returns `None` for anything outside the supported set, including
    /// region-qualified tags; callers that hold a full locale tag should go
    /// through the resolver instead.
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}
