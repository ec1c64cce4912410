//! Persisted user settings: the chosen language.
//!
//! The store consults this at startup and writes through on every switch.
//! [`SettingsStore`] is the seam: production uses the TOML-backed
//! [`FileSettings`], tests and previews use [`MemorySettings`]. Loading is
//! forgiving (a missing, unreadable, or stale file just means "nothing
//! saved"); saving reports real errors so the caller can decide to log them.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{I18nError, Result};
use crate::language::Language;

/// Where the chosen language survives between launches.
pub trait SettingsStore: Send + Sync {
    /// Returns the saved language, or `None` when nothing usable is stored.
    fn load_language(&self) -> Option<Language>;

    /// Persists the chosen language.
    fn save_language(&self, language: Language) -> Result<()>;
}

/// On-disk settings document.
///
/// The language is kept as a raw code string so a file written by a newer
/// build with more languages still loads; unknown codes are ignored with a
/// warning instead of failing the parse.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub language: Option<String>,
}

/// TOML settings file.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Settings stored at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSettings { path: path.into() }
    }

    /// Settings at the platform default: `<config dir>/bridge/settings.toml`.
    pub fn at_default_path() -> Result<Self> {
        Ok(FileSettings::new(Self::default_path()?))
    }

    /// The platform default settings path.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("bridge").join("settings.toml"))
            .ok_or(I18nError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the settings file.
    pub fn read(&self) -> Result<Settings> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| I18nError::SettingsRead {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| I18nError::SettingsParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes and writes the settings file, creating parent directories
    /// as needed.
    pub fn write(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| I18nError::SettingsWrite {
                path: self.path.clone(),
                source,
            })?;
        }
        let text = toml::to_string_pretty(settings)
            .map_err(|source| I18nError::SettingsEncode { source })?;
        std::fs::write(&self.path, text).map_err(|source| I18nError::SettingsWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileSettings {
    fn load_language(&self) -> Option<Language> {
        let settings = match self.read() {
            Ok(settings) => settings,
            Err(I18nError::SettingsRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!("No settings file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Ignoring unusable settings file: {}", e);
                return None;
            }
        };

        let code = settings.language?;
        match Language::from_code(&code) {
            Some(language) => Some(language),
            None => {
                warn!(
                    "Ignoring unsupported language {:?} in {}",
                    code,
                    self.path.display()
                );
                None
            }
        }
    }

    fn save_language(&self, language: Language) -> Result<()> {
        // Keep whatever else the file holds; only the language changes.
        let mut settings = self.read().unwrap_or_default();
        settings.language = Some(language.code().to_string());
        self.write(&settings)?;
        debug!(
            "Saved language {} to {}",
            language.code(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory settings for tests and previews. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    slot: Arc<Mutex<Option<Language>>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        MemorySettings::default()
    }

    /// Settings that already hold a saved language.
    pub fn with_language(language: Language) -> Self {
        let settings = MemorySettings::new();
        *lock(&settings.slot) = Some(language);
        settings
    }

    /// The currently saved language, for assertions.
    pub fn saved(&self) -> Option<Language> {
        *lock(&self.slot)
    }

    /// Empties the slot.
    pub fn clear(&self) {
        *lock(&self.slot) = None;
    }
}

impl SettingsStore for MemorySettings {
    fn load_language(&self) -> Option<Language> {
        self.saved()
    }

    fn save_language(&self, language: Language) -> Result<()> {
        *lock(&self.slot) = Some(language);
        Ok(())
    }
}

fn lock(slot: &Mutex<Option<Language>>) -> std::sync::MutexGuard<'_, Option<Language>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings_in(dir: &TempDir) -> FileSettings {
        FileSettings::new(dir.path().join("settings.toml"))
    }

    // ==================== File Round-Trip Tests ====================

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        settings.save_language(Language::Ko).unwrap();
        assert_eq!(settings.load_language(), Some(Language::Ko));
    }

    #[test]
    fn test_save_overwrites_previous_choice() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        settings.save_language(Language::Ko).unwrap();
        settings.save_language(Language::Ar).unwrap();
        assert_eq!(settings.load_language(), Some(Language::Ar));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let settings = FileSettings::new(dir.path().join("nested").join("deep").join("s.toml"));

        settings.save_language(Language::En).unwrap();
        assert!(settings.path().exists());
        assert_eq!(settings.load_language(), Some(Language::En));
    }

    #[test]
    fn test_written_file_is_plain_toml() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        settings.save_language(Language::Pt).unwrap();

        let text = std::fs::read_to_string(settings.path()).unwrap();
        assert!(text.contains("language = \"pt\""));
    }

    // ==================== Forgiving Load Tests ====================

    #[test]
    fn test_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(settings_in(&dir).load_language(), None);
    }

    #[test]
    fn test_invalid_toml_loads_none() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        std::fs::write(settings.path(), "not = [valid").unwrap();
        assert_eq!(settings.load_language(), None);
    }

    #[test]
    fn test_unknown_language_code_loads_none() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        std::fs::write(settings.path(), "language = \"xx\"\n").unwrap();
        assert_eq!(settings.load_language(), None);
    }

    #[test]
    fn test_absent_language_field_loads_none() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        std::fs::write(settings.path(), "").unwrap();
        assert_eq!(settings.load_language(), None);
    }

    // ==================== Memory Settings Tests ====================

    #[test]
    fn test_memory_round_trip() {
        let settings = MemorySettings::new();
        assert_eq!(settings.load_language(), None);
        settings.save_language(Language::Hi).unwrap();
        assert_eq!(settings.load_language(), Some(Language::Hi));
    }

    #[test]
    fn test_memory_clones_share_the_slot() {
        let settings = MemorySettings::new();
        let clone = settings.clone();
        clone.save_language(Language::Fr).unwrap();
        assert_eq!(settings.saved(), Some(Language::Fr));
        settings.clear();
        assert_eq!(clone.saved(), None);
    }
}
