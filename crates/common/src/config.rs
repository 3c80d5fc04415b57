//! Application configuration.

use std::path::{Path, PathBuf};

use cutlist_audit_model::ActTable;
use serde::{Deserialize, Serialize};

use crate::error::{CutlistError, CutlistResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report layout settings.
    pub report: ReportDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default report parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDefaults {
    /// Document title rendered as the top-level heading.
    pub title: String,

    /// Acts that clips are grouped into, in report order.
    pub acts: ActTable,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "cutlist_extractor=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            title: "CYBERNETIC LIST".to_string(),
            acts: ActTable::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Unlike [`AppConfig::load`], a
    /// missing or invalid file is an error.
    pub fn load_from(path: impl AsRef<Path>) -> CutlistResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CutlistError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CutlistError::config(format!("{}: {e}", path.display())))
    }

    /// Save config to the standard location.
    pub fn save(&self) -> CutlistResult<()> {
        self.save_to(config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> CutlistResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("cutlist").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.report.title, "CYBERNETIC LIST");
        assert_eq!(config.report.acts.len(), 4);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"report":{"title":"ROUGH CUT"}}"#).unwrap();
        assert_eq!(parsed.report.title, "ROUGH CUT");
        assert_eq!(parsed.report.acts, ActTable::default());
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_custom_acts_are_validated() {
        let ok: AppConfig = serde_json::from_str(
            r#"{"report":{"acts":[{"name":"Cold Open","start":0,"end":240}]}}"#,
        )
        .unwrap();
        assert_eq!(ok.report.acts.acts()[0].name, "Cold Open");

        let bad = serde_json::from_str::<AppConfig>(r#"{"report":{"acts":[]}}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = std::env::temp_dir().join("cutlist_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.report.title = "FINAL".to_string();
        config.logging.json = true;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.report.title, "FINAL");
        assert!(loaded.logging.json);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AppConfig::load_from("/definitely/not/here/config.json").unwrap_err();
        assert!(matches!(err, CutlistError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_from_invalid_file_is_config_error() {
        let dir = std::env::temp_dir().join("cutlist_test_bad_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"report":{"acts":[{"name":"X","start":9,"end":1}]}}"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CutlistError::Config { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }
}
