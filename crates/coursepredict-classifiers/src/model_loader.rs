//! Reading model artifacts from disk

use crate::artifact::ModelArtifact;
use crate::config::ModelConfig;
use crate::predictor::Predictor;
use coursepredict_core::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Descriptive facts about a loaded model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub name: String,

    /// Class labels the model can emit
    pub classes: Vec<String>,

    /// Number of known terms
    pub vocabulary_size: usize,

    /// Number of feature columns
    pub n_features: usize,

    /// File the model came from, if any
    pub source: Option<PathBuf>,
}

/// A predictor together with what is known about it
pub struct LoadedModel {
    predictor: Arc<dyn Predictor>,
    metadata: ModelMetadata,
}

impl LoadedModel {
    /// Load the artifact named by `config` and build its predictor
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let start = Instant::now();
        let path = resolve_model_path(&config.path)?;
        let format = config.resolve_format()?;

        debug!("Reading {:?} artifact from {:?}", format, path);
        let content = std::fs::read_to_string(&path)?;
        let artifact = ModelArtifact::parse(&content, format)?;

        let fallback_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model")
            .to_string();
        let classifier = artifact.into_classifier(&fallback_name)?;

        let metadata = ModelMetadata {
            name: classifier.name().to_string(),
            classes: classifier.classes().to_vec(),
            vocabulary_size: classifier.vectorizer().vocabulary_size(),
            n_features: classifier.vectorizer().n_features(),
            source: Some(path),
        };

        info!(
            model = %metadata.name,
            classes = metadata.classes.len(),
            vocabulary = metadata.vocabulary_size,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded model artifact"
        );

        Ok(Self {
            predictor: Arc::new(classifier),
            metadata,
        })
    }

    /// Wrap an already constructed predictor
    pub fn from_predictor(predictor: Arc<dyn Predictor>, metadata: ModelMetadata) -> Self {
        Self {
            predictor,
            metadata,
        }
    }

    /// Get the predictor
    pub fn predictor(&self) -> &Arc<dyn Predictor> {
        &self.predictor
    }

    /// Get model metadata
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("predictor", &self.predictor.name())
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Check the artifact exists before trying to parse it
fn resolve_model_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("model artifact not found: {}", path.display()),
        )
        .into());
    }
    Ok(path.to_path_buf())
}
