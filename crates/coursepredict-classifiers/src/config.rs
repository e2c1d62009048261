//! Configuration for locating and loading the model artifact

use crate::artifact::ArtifactFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default artifact location, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "LogisticRegressionModel.json";

/// When the artifact is read from disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Read once at startup and on explicit reload
    #[default]
    Startup,
    /// Read again for every prediction
    PerRequest,
}

impl std::str::FromStr for LoadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "startup" => Ok(Self::Startup),
            "per_request" => Ok(Self::PerRequest),
            other => Err(format!(
                "unknown load mode '{}', expected startup or per_request",
                other
            )),
        }
    }
}

/// Model section of a front-end configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the artifact file
    #[serde(default = "default_model_path")]
    pub path: PathBuf,

    /// Artifact encoding; inferred from the extension when unset
    #[serde(default)]
    pub format: Option<ArtifactFormat>,

    /// When the artifact is read
    #[serde(default)]
    pub load_mode: LoadMode,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            format: None,
            load_mode: LoadMode::default(),
        }
    }
}

impl ModelConfig {
    /// Create a configuration for a local artifact
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set artifact format
    pub fn with_format(mut self, format: ArtifactFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set load mode
    pub fn with_load_mode(mut self, load_mode: LoadMode) -> Self {
        self.load_mode = load_mode;
        self
    }

    /// Format to parse with: the explicit one, or the extension's
    pub fn resolve_format(&self) -> coursepredict_core::Result<ArtifactFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => ArtifactFormat::from_path(&self.path),
        }
    }
}
