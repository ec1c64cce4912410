//! Error types for the localization crate.
//!
//! The user-facing surfaces (resolver, translator, formatters, store) are
//! total and never return errors; `I18nError` only shows up at the parse and
//! settings-file boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors raised at the crate's fallible boundaries.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A language code outside the supported set was given where an exact
    /// language was required (settings files, `FromStr`).
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),

    /// Reading the settings file failed.
    #[error("failed to read settings file {path}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the settings file failed.
    #[error("failed to write settings file {path}")]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but is not valid TOML.
    #[error("settings file {path} is not valid TOML")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Serializing settings to TOML failed.
    #[error("failed to encode settings")]
    SettingsEncode {
        #[source]
        source: toml::ser::Error,
    },

    /// No platform config directory is available for the default settings
    /// path.
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_mentions_code() {
        let err = I18nError::UnsupportedLanguage("xx".to_string());
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_settings_read_mentions_path() {
        let err = I18nError::SettingsRead {
            path: PathBuf::from("/tmp/settings.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("settings.toml"));
    }
}
