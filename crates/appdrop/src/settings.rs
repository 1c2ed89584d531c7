use std::path::Path;

use appdrop_core::CatalogSource;
use appdrop_platform::AppPaths;
use serde::{Deserialize, Serialize};

pub const CATALOG_ENV_VAR: &str = "APPDROP_CATALOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeSetting,

    /// Path or http(s) URL of the release catalog; the bundled one when unset.
    #[serde(default)]
    pub catalog_source: Option<String>,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,

    #[serde(default)]
    pub window_geometry: Option<WindowGeometry>,
}

fn default_http_timeout() -> u64 {
    10
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::System,
            catalog_source: None,
            debug_logging: false,
            http_timeout_secs: default_http_timeout(),
            max_log_size_bytes: default_max_log_size_bytes(),
            window_geometry: None,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        let Ok(paths) = AppPaths::new() else {
            return Self::default();
        };
        Self::load_from_path(&paths.settings_file())
    }

    fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let paths = AppPaths::new().map_err(std::io::Error::other)?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.settings_file())
    }

    fn save_to_path(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    /// The catalog to load, with `APPDROP_CATALOG` taking precedence over
    /// the stored setting.
    pub fn catalog_source(&self) -> CatalogSource {
        let from_env = std::env::var(CATALOG_ENV_VAR).ok();
        resolve_catalog_source(from_env.as_deref(), self.catalog_source.as_deref())
    }
}

fn resolve_catalog_source(from_env: Option<&str>, from_settings: Option<&str>) -> CatalogSource {
    from_env
        .filter(|value| !value.trim().is_empty())
        .or(from_settings)
        .map_or(CatalogSource::Embedded, CatalogSource::parse)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl WindowGeometry {
    pub fn is_likely_visible(&self) -> bool {
        const MIN_VISIBLE: f32 = -50.0;
        const MAX_COORD: f32 = 16_384.0;
        const MIN_SIZE: f32 = 100.0;

        self.x > MIN_VISIBLE
            && self.y > MIN_VISIBLE
            && self.x < MAX_COORD
            && self.y < MAX_COORD
            && self.width >= MIN_SIZE
            && self.height >= MIN_SIZE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ThemeSetting {
    #[default]
    System,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use appdrop_core::CatalogSource;
    use serde_json::json;

    use super::{AppSettings, ThemeSetting, WindowGeometry, resolve_catalog_source};

    #[test]
    fn defaults_use_bundled_catalog_and_system_theme() {
        let settings = AppSettings::default();

        assert_eq!(settings.theme, ThemeSetting::System);
        assert!(settings.catalog_source.is_none());
        assert!(!settings.debug_logging);
        assert_eq!(settings.http_timeout_secs, 10);
        assert_eq!(settings.max_log_size_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn partial_json_fills_missing_fields_with_defaults() {
        let settings: AppSettings = serde_json::from_value(json!({
            "theme": "Dark",
            "catalog_source": "https://example.com/apps.json"
        }))
        .expect("partial settings should deserialize");

        assert_eq!(settings.theme, ThemeSetting::Dark);
        assert_eq!(
            settings.catalog_source.as_deref(),
            Some("https://example.com/apps.json")
        );
        assert_eq!(settings.http_timeout_secs, 10);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").expect("settings file should be written");

        let settings = AppSettings::load_from_path(&path);

        assert_eq!(settings.theme, ThemeSetting::System);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = temp_dir.path().join("settings.json");
        let settings = AppSettings {
            theme: ThemeSetting::Light,
            debug_logging: true,
            catalog_source: Some("/srv/apps.json".to_string()),
            ..AppSettings::default()
        };

        settings
            .save_to_path(&path)
            .expect("settings should be saved");
        let loaded = AppSettings::load_from_path(&path);

        assert_eq!(loaded.theme, ThemeSetting::Light);
        assert!(loaded.debug_logging);
        assert_eq!(loaded.catalog_source.as_deref(), Some("/srv/apps.json"));
    }

    #[test]
    fn env_override_wins_over_settings() {
        assert_eq!(
            resolve_catalog_source(Some("https://override/apps.json"), Some("/srv/apps.json")),
            CatalogSource::Remote("https://override/apps.json".to_string())
        );
        assert_eq!(
            resolve_catalog_source(Some("  "), Some("/srv/apps.json")),
            CatalogSource::File(PathBuf::from("/srv/apps.json"))
        );
        assert_eq!(resolve_catalog_source(None, None), CatalogSource::Embedded);
    }

    #[test]
    fn window_geometry_visibility_checks_bounds() {
        let visible = WindowGeometry {
            width: 480.0,
            height: 720.0,
            x: 200.0,
            y: 100.0,
        };
        assert!(visible.is_likely_visible());

        let too_small = WindowGeometry {
            width: 90.0,
            height: 99.0,
            x: 0.0,
            y: 0.0,
        };
        assert!(!too_small.is_likely_visible());

        let out_of_bounds = WindowGeometry {
            width: 480.0,
            height: 720.0,
            x: 20_000.0,
            y: 100.0,
        };
        assert!(!out_of_bounds.is_likely_visible());
    }
}
