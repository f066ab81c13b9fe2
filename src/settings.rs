// src/settings.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::DEFAULT_MODEL_ID;

/// Configuration the core consumes: the API key and the selected model.
/// Message history belongs to the UI layer and is not stored here.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub version: u32,
    pub api_key: String,
    pub model_id: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: String::new(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

/// Get the path to the settings file (~/.config/tabmate/settings.json)
pub fn get_settings_path() -> Result<PathBuf, String> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;

    let app_config_dir = config_dir.join("tabmate");

    if !app_config_dir.exists() {
        fs::create_dir_all(&app_config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    Ok(app_config_dir.join("settings.json"))
}

/// Load settings from disk, creating defaults if the file does not exist.
pub fn load_settings() -> Result<AppSettings, String> {
    load_settings_from(&get_settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Result<AppSettings, String> {
    if !path.exists() {
        let default_settings = AppSettings::default();
        save_settings_to(path, &default_settings)?;
        info!(path = %path.display(), "created default settings");
        return Ok(default_settings);
    }

    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read settings: {}", e))?;

    let settings: AppSettings =
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse settings: {}", e))?;

    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    save_settings_to(&get_settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))?;

    info!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_the_flash_model() {
        let settings = AppSettings::default();
        assert_eq!(settings.model_id, "gemini-1.5-flash-8b");
        assert!(settings.api_key.is_empty());
    }

    #[test]
    fn test_load_creates_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.model_id, DEFAULT_MODEL_ID);
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            version: 1,
            api_key: "secret".to_string(),
            model_id: "gemini-1.5-pro".to_string(),
        };
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.api_key, "secret");
        assert_eq!(loaded.model_id, "gemini-1.5-pro");
    }
}
