//! # Locale Preference Store
//!
//! Persists the chosen UI language to a TOML preferences file under the
//! user config directory and restores it on startup. Absent files, parse
//! failures, and unrecognized language tags all restore English rather than
//! erroring: a broken preferences file must never block the survey.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

/// Directory under the user config dir holding Suriya preferences.
const APP_DIR: &str = "suriya";

/// Preferences file name.
const PREFERENCES_FILE: &str = "preferences.toml";

/// Errors saving the locale preference. Loading is infallible by design.
#[derive(Error, Debug)]
pub enum LocaleStoreError {
    /// Preferences file could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk shape of the preferences file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    language: String,
}

/// Reads and writes the persisted locale preference.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    path: PathBuf,
}

impl LocaleStore {
    /// A store at an explicit path (used by tests and `--config` overrides).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at the platform default location
    /// (`<config dir>/suriya/preferences.toml`), when a config dir exists.
    pub fn at_default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(PREFERENCES_FILE)))
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the persisted language. Any failure mode (missing file,
    /// unreadable TOML, unknown tag) yields the default language.
    pub fn load(&self) -> Language {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Language::default();
        };
        let Ok(preferences) = toml::from_str::<Preferences>(&raw) else {
            return Language::default();
        };
        Language::from_str(&preferences.language).unwrap_or_default()
    }

    /// Persist the language, creating parent directories as needed.
    pub fn save(&self, language: Language) -> Result<(), LocaleStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let preferences = Preferences {
            language: language.as_str().to_string(),
        };
        fs::write(&self.path, toml::to_string_pretty(&preferences)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, LocaleStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocaleStore::new(dir.path().join("preferences.toml"));
        (dir, store)
    }

    #[test]
    fn test_absent_file_defaults_to_english() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn test_roundtrip_thai() {
        let (_dir, store) = temp_store();
        store.save(Language::Th).unwrap();
        assert_eq!(store.load(), Language::Th);
    }

    #[test]
    fn test_unrecognized_tag_defaults() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "language = \"klingon\"\n").unwrap();
        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn test_garbage_file_defaults() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not toml at all [[[").unwrap();
        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn test_missing_field_defaults() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "other = 1\n").unwrap();
        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocaleStore::new(dir.path().join("nested").join("prefs.toml"));
        store.save(Language::Th).unwrap();
        assert_eq!(store.load(), Language::Th);
    }
}
