//! API configuration

use coursepredict_classifiers::ModelConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// API server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Model artifact location and load mode
    #[serde(default)]
    pub model: ModelConfig,

    /// Request handling settings
    #[serde(default)]
    pub api: ApiSettings,
}

/// Request handling settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Refuse a missing or empty `course` parameter instead of predicting on ""
    #[serde(default)]
    pub reject_empty_course: bool,
}

impl ApiConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(&cli.config).exists() {
            Self::from_file(&cli.config)?
        } else {
            tracing::debug!("No config file at {}, using defaults", cli.config);
            Self::default()
        };

        // Apply CLI overrides
        if let Some(model) = &cli.model {
            config.model.path = model.clone();
        }

        if let Some(load_mode) = cli.load_mode {
            config.model.load_mode = load_mode;
        }

        if cli.reject_empty_course {
            config.api.reject_empty_course = true;
        }

        Ok(config)
    }

    /// Parse a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use coursepredict_classifiers::LoadMode;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cli = crate::Cli::parse_from(["coursepredict-api", "--config", "/nonexistent/config.yaml"]);
        let config = ApiConfig::load(&cli).unwrap();
        assert_eq!(config.model.load_mode, LoadMode::Startup);
        assert!(!config.api.reject_empty_course);
    }

    #[test]
    fn test_file_then_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "model:\n  path: from-file.json\n  load_mode: per_request\napi:\n  reject_empty_course: false\n",
        )
        .unwrap();

        let config_arg = path.to_string_lossy().to_string();
        let cli = crate::Cli::parse_from([
            "coursepredict-api",
            "--config",
            &config_arg,
            "--model",
            "from-cli.json",
            "--reject-empty-course",
        ]);
        let config = ApiConfig::load(&cli).unwrap();

        assert_eq!(config.model.path, PathBuf::from("from-cli.json"));
        assert_eq!(config.model.load_mode, LoadMode::PerRequest);
        assert!(config.api.reject_empty_course);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "model: [not, a, map]\n").unwrap();
        assert!(ApiConfig::from_file(&path).is_err());
    }
}
