use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl ThemeMode {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub backend_origin: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            backend_origin: global_constants::DEFAULT_BACKEND_ORIGIN.to_string(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Backend origin: {}", settings.backend_origin);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// The origin requests actually go to. The `OCR_BACKEND_ORIGIN`
    /// environment variable wins over the stored value, which in turn
    /// defaults to `DEFAULT_BACKEND_ORIGIN`.
    pub fn resolved_backend_origin(&self) -> String {
        resolve_backend_origin(
            std::env::var(global_constants::BACKEND_ORIGIN_ENV_VAR).ok(),
            &self.backend_origin,
        )
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

fn resolve_backend_origin(env_override: Option<String>, stored: &str) -> String {
    match env_override {
        Some(origin) if !origin.trim().is_empty() => {
            log::debug!("[SETTINGS] Backend origin overridden by environment: {}", origin);
            origin
        }
        _ if !stored.trim().is_empty() => stored.to_string(),
        _ => global_constants::DEFAULT_BACKEND_ORIGIN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_toggled_flips_both_ways() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(
            settings.backend_origin,
            global_constants::DEFAULT_BACKEND_ORIGIN
        );
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_resolve_backend_origin_prefers_environment() {
        let origin = resolve_backend_origin(
            Some("http://ocr.internal:9000".to_string()),
            "http://stored.example.com",
        );

        assert_eq!(origin, "http://ocr.internal:9000");
    }

    #[test]
    fn test_resolve_backend_origin_falls_back_to_stored_value() {
        let origin = resolve_backend_origin(None, "http://stored.example.com");

        assert_eq!(origin, "http://stored.example.com");
    }

    #[test]
    fn test_resolve_backend_origin_ignores_blank_override() {
        let origin = resolve_backend_origin(Some("   ".to_string()), "http://stored.example.com");

        assert_eq!(origin, "http://stored.example.com");
    }

    #[test]
    fn test_resolve_backend_origin_uses_default_when_everything_is_blank() {
        let origin = resolve_backend_origin(None, "");

        assert_eq!(origin, global_constants::DEFAULT_BACKEND_ORIGIN);
    }

    #[test]
    fn test_user_settings_serialization_roundtrip() {
        let settings = UserSettings {
            backend_origin: "http://ocr.example.com".to_string(),
            theme_mode: ThemeMode::Light,
        };

        let serialized = serde_json::to_string(&settings).unwrap();
        let deserialized: UserSettings = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.backend_origin, settings.backend_origin);
        assert_eq!(deserialized.theme_mode, settings.theme_mode);
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_theme_mode() {
        let json = r#"{ "backend_origin": "http://127.0.0.1:8000" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }
}
