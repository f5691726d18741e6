//! Application configuration
//!
//! Configuration loaded from `.techshop.toml` or the platform config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use techshop_theme::ThemeMode;

/// Application configuration loaded from the config file
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Theme mode to start in ("light" or "dark")
    #[serde(default)]
    pub theme: ThemeMode,

    /// JSON catalog to load instead of the built-in product list
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on invalid TOML
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            theme = "dark"
            catalog_file = "demos/sonny-angel-catalog.json"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(
            config.catalog_file,
            Some(PathBuf::from("demos/sonny-angel-catalog.json"))
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::parse(r#"theme = "dark""#);
        assert_eq!(config.theme, ThemeMode::Dark);
        // Other fields should use defaults
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = AppConfig::parse(r#"theme = "sepia""#);
        assert_eq!(config, AppConfig::default());
    }
}
