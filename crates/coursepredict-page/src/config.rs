//! Page configuration

use coursepredict_classifiers::ModelConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page server configuration
///
/// Shares its file with the API server; sections it does not know are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    /// Model artifact location and load mode
    #[serde(default)]
    pub model: ModelConfig,
}

impl PageConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(cli: &crate::Cli) -> anyhow::Result<Self> {
        let mut config = if Path::new(&cli.config).exists() {
            let content = std::fs::read_to_string(&cli.config)?;
            serde_yaml::from_str(&content)?
        } else {
            tracing::debug!("No config file at {}, using defaults", cli.config);
            Self::default()
        };

        if let Some(model) = &cli.model {
            config.model.path = model.clone();
        }

        if let Some(load_mode) = cli.load_mode {
            config.model.load_mode = load_mode;
        }

        Ok(config)
    }
}
