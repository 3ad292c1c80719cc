//! Configuration handling for the TUI

use crate::state::ThemePreference;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional portfolio content file in the config directory
const PORTFOLIO_FILE: &str = "portfolio.json";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Theme chosen with the toggle
    pub theme: Option<ThemePreference>,
    /// Portfolio content file, overriding the one in the config directory
    pub portfolio_path: Option<PathBuf>,
}

impl TuiConfig {
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Theme to start with
    pub fn theme(&self) -> ThemePreference {
        self.theme.unwrap_or_default()
    }

    /// Portfolio file to load, if any exists
    pub fn resolve_portfolio_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.portfolio_path {
            return Some(path.clone());
        }
        Self::config_dir()
            .map(|dir| dir.join(PORTFOLIO_FILE))
            .filter(|path| path.exists())
    }
}

/// Where the theme preference is persisted
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    /// `None` uses the platform config directory
    path: Option<PathBuf>,
    /// Set when the file on disk could not be read; it is then never overwritten
    unreadable: bool,
}

impl ConfigStore {
    pub fn at(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            unreadable: false,
        }
    }

    pub fn load(&self) -> Result<TuiConfig> {
        match &self.path {
            Some(path) => TuiConfig::load_from(path),
            None => TuiConfig::load(),
        }
    }

    pub fn save(&self, config: &TuiConfig) -> Result<()> {
        if self.unreadable {
            anyhow::bail!("config file was unreadable at start-up, leaving it untouched");
        }
        match &self.path {
            Some(path) => config.save_to(path),
            None => config.save(),
        }
    }

    /// Load the config, falling back to defaults when it is unreadable
    ///
    /// An unreadable file is left alone: later saves fail instead of replacing
    /// it with the defaults.
    pub fn load_or_default(&mut self) -> TuiConfig {
        match self.load() {
            Ok(config) => {
                self.unreadable = false;
                config
            }
            Err(err) => {
                tracing::warn!(
                    "Ignoring unreadable config, preferences will not be saved: {err:#}"
                );
                self.unreadable = true;
                TuiConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.theme.is_none());
        assert!(config.portfolio_path.is_none());
        assert_eq!(config.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            theme: Some(ThemePreference::Dark),
            portfolio_path: Some(PathBuf::from("/tmp/me.json")),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"dark\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.theme.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"theme": "dark", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TuiConfig {
            theme: Some(ThemePreference::Dark),
            portfolio_path: None,
        };
        config.save_to(&path).unwrap();
        assert_eq!(TuiConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ broken").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_store_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "sepia"}"#).unwrap();
        let mut store = ConfigStore::at(path);
        assert_eq!(store.load_or_default(), TuiConfig::default());
    }

    #[test]
    fn test_unreadable_config_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let original = r#"{"theme": "sepia", "portfolio_path": "/srv/me.json"}"#;
        fs::write(&path, original).unwrap();

        let mut store = ConfigStore::at(path.clone());
        let mut config = store.load_or_default();
        config.theme = Some(ThemePreference::Dark);
        assert!(store.save(&config).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_readable_config_can_be_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        let mut store = ConfigStore::at(path.clone());
        let mut config = store.load_or_default();
        config.theme = Some(ThemePreference::Dark);
        store.save(&config).unwrap();
        let saved = TuiConfig::load_from(&path).unwrap();
        assert_eq!(saved.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn test_explicit_portfolio_path_wins() {
        let config = TuiConfig {
            theme: None,
            portfolio_path: Some(PathBuf::from("/srv/portfolio.json")),
        };
        assert_eq!(
            config.resolve_portfolio_path(),
            Some(PathBuf::from("/srv/portfolio.json"))
        );
    }
}
