//! Application-level configuration loading: overlay file location, catalog source and placeholders.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_GUIDES_CONFIG_PATH";
/// Default overlay file, relative to the working directory.
const DEFAULT_OVERLAY_PATH: &str = "data/user_games.json";
/// Image assigned to games created through the add flow.
const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder.jpg";
/// Guide body given to catalog games copied into the overlay without one.
const DEFAULT_PLACEHOLDER_GUIDE: &str = "Guide coming soon.";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// JSON file holding the overlay games.
    pub overlay_path: PathBuf,
    /// External catalog file. `None` uses the catalog bundled into the binary.
    pub catalog_path: Option<PathBuf>,
    /// Image assigned to newly created games.
    pub placeholder_image: String,
    /// Guide body substituted when a catalog game has none.
    pub placeholder_guide: String,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        overlay = %app_config.overlay_path.display(),
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            overlay_path: PathBuf::from(DEFAULT_OVERLAY_PATH),
            catalog_path: None,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.into(),
            placeholder_guide: DEFAULT_PLACEHOLDER_GUIDE.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    overlay_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    placeholder_image: Option<String>,
    placeholder_guide: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            overlay_path: value.overlay_path.unwrap_or(defaults.overlay_path),
            catalog_path: value.catalog_path,
            placeholder_image: value
                .placeholder_image
                .filter(|image| !image.trim().is_empty())
                .unwrap_or(defaults.placeholder_image),
            placeholder_guide: value
                .placeholder_guide
                .filter(|guide| !guide.trim().is_empty())
                .unwrap_or(defaults.placeholder_guide),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let raw: RawConfig = serde_json::from_str("{}").unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.overlay_path, PathBuf::from(DEFAULT_OVERLAY_PATH));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(config.placeholder_guide, DEFAULT_PLACEHOLDER_GUIDE);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let raw: RawConfig = serde_json::from_str(
            r#"{
                "overlay_path": "/var/lib/guides/user_games.json",
                "catalog_path": "catalog.json",
                "placeholder_image": "missing.png",
                "placeholder_guide": "Гайд будет добавлен позже."
            }"#,
        )
        .unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(
            config.overlay_path,
            PathBuf::from("/var/lib/guides/user_games.json")
        );
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.placeholder_image, "missing.png");
        assert_eq!(config.placeholder_guide, "Гайд будет добавлен позже.");
    }

    #[test]
    fn blank_placeholders_fall_back_to_defaults() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"placeholder_image": "  ", "placeholder_guide": ""}"#)
                .unwrap();
        let config = AppConfig::from(raw);

        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(config.placeholder_guide, DEFAULT_PLACEHOLDER_GUIDE);
    }
}
