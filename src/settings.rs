//! Settings module - persists the UI language preference
//! - Windows: uses registry
//! - macOS/Linux: uses config file (JSON)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(all(windows, feature = "winreg"))]
use winreg::enums::*;
#[cfg(all(windows, feature = "winreg"))]
use winreg::RegKey;

#[cfg(all(not(windows), feature = "dirs"))]
use std::path::PathBuf;

use crate::error::{LangError, Result};
use crate::i18n::Language;
use crate::table::TranslationTable;

#[cfg(all(windows, feature = "winreg"))]
const REGISTRY_KEY: &str = r"Software\CaptureLang";

#[cfg(all(not(windows), feature = "dirs"))]
const CONFIG_FILE_NAME: &str = "settings.json";
#[cfg(all(not(windows), feature = "dirs"))]
const APP_NAME: &str = "capture-lang";

/// Korean is the out-of-the-box UI language
pub const DEFAULT_LANGUAGE: &str = "ko";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Raw language code; kept as typed so an unknown code stays visible
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppSettings {
    pub fn language(&self) -> Option<Language> {
        Language::from_code(&self.language)
    }

    /// Build the translation table for the stored language code
    pub fn translation_table(&self) -> TranslationTable {
        TranslationTable::init(&self.language)
    }

    /// Switch to `code` if it names a supported language.
    ///
    /// Returns whether the override was taken; an unsupported code leaves
    /// the stored language untouched so it never reaches disk.
    pub fn apply_language_override(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.language = lang.code().to_string();
                true
            }
            None => {
                log::warn!("Ignoring unsupported language override {:?}", code);
                false
            }
        }
    }

    /// Read settings from a JSON file. Fields missing from the file keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LangError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write settings as pretty JSON, creating parent directories as needed
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| LangError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;

        Ok(())
    }

    // ========== Windows: Registry-based storage ==========

    /// Load settings from Windows registry
    #[cfg(all(windows, feature = "winreg"))]
    pub fn load() -> Self {
        let mut settings = Self::default();

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER).open_subkey(REGISTRY_KEY) {
            if let Ok(language) = hkcu.get_value::<String, _>("Language") {
                settings.language = language;
            }
        }

        settings
    }

    /// Save settings to Windows registry
    #[cfg(all(windows, feature = "winreg"))]
    pub fn save(&self) -> Result<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (key, _) = hkcu
            .create_subkey(REGISTRY_KEY)
            .map_err(|source| LangError::Registry { key: REGISTRY_KEY, source })?;

        key.set_value("Language", &self.language)
            .map_err(|source| LangError::Registry { key: REGISTRY_KEY, source })?;

        Ok(())
    }

    // ========== macOS/Linux: File-based storage ==========

    /// Get config file path for non-Windows platforms
    #[cfg(all(not(windows), feature = "dirs"))]
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from config file (macOS/Linux)
    #[cfg(all(not(windows), feature = "dirs"))]
    pub fn load() -> Self {
        let Some(config_path) = Self::config_file_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to config file (macOS/Linux)
    #[cfg(all(not(windows), feature = "dirs"))]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path().ok_or_else(|| LangError::Io {
            path: PathBuf::from(APP_NAME),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory"),
        })?;
        self.save_to_path(&config_path)
    }

    // ========== Fallback: No persistent storage ==========

    #[cfg(not(any(all(windows, feature = "winreg"), all(not(windows), feature = "dirs"))))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(any(all(windows, feature = "winreg"), all(not(windows), feature = "dirs"))))]
    pub fn save(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_korean() {
        let settings = AppSettings::default();
        assert_eq!(settings.language(), Some(Language::Korean));
        assert_eq!(settings.translation_table().get("close"), "닫기");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings { language: "zhcn".to_string() };
        settings.save_to_path(&path).unwrap();

        let loaded = AppSettings::load_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.translation_table().get("undo"), "撤销");
    }

    #[test]
    fn test_missing_field_keeps_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let loaded = AppSettings::load_from_path(&path).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_unknown_code_is_kept_and_yields_blank_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "language": "xx" }"#).unwrap();

        let loaded = AppSettings::load_from_path(&path).unwrap();
        assert_eq!(loaded.language, "xx");
        assert_eq!(loaded.language(), None);
        assert_eq!(loaded.translation_table().get("save"), "");
    }

    #[test]
    fn test_saved_file_is_plain_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        AppSettings { language: "en".to_string() }.save_to_path(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "language": "en" }));
    }

    #[test]
    fn test_language_override_accepts_supported_code() {
        let mut settings = AppSettings::default();
        assert!(settings.apply_language_override("zh-CN"));
        assert_eq!(settings.language, "zhcn");
        assert_eq!(settings.language(), Some(Language::SimplifiedChinese));
    }

    #[test]
    fn test_language_override_rejects_unsupported_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings { language: "en".to_string() };
        assert!(!settings.apply_language_override("xx"));
        assert_eq!(settings.language, "en");

        settings.save_to_path(&path).unwrap();
        let loaded = AppSettings::load_from_path(&path).unwrap();
        assert_eq!(loaded.translation_table().get("save"), "Save to Disk");
    }

    #[test]
    fn test_registry_error_names_key() {
        let err = LangError::Registry {
            key: r"Software\CaptureLang",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), r"Registry access failed for Software\CaptureLang: denied");
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let err = AppSettings::load_from_path(&path).unwrap_err();
        assert!(matches!(err, LangError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppSettings::load_from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LangError::Io { .. }));
    }
}
