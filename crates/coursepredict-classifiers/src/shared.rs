//! Load-once model handle shared by request handlers

use crate::config::{LoadMode, ModelConfig};
use crate::model_loader::LoadedModel;
use crate::predictor::predict_one;
use coursepredict_core::{Error, Prediction, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The model every request predicts with.
///
/// Cloning is cheap; clones share the same slot. The slot only changes on
/// `reload`, and a failed reload leaves it untouched.
#[derive(Clone)]
pub struct SharedModel {
    config: Arc<ModelConfig>,
    current: Arc<RwLock<Option<Arc<LoadedModel>>>>,
}

impl SharedModel {
    /// Create the handle, reading the artifact now in `Startup` mode
    pub async fn load(config: ModelConfig) -> Result<Self> {
        let shared = Self {
            config: Arc::new(config),
            current: Arc::new(RwLock::new(None)),
        };

        match shared.config.load_mode {
            LoadMode::Startup => {
                shared.reload().await?;
            }
            LoadMode::PerRequest => {
                info!(
                    "Per-request load mode: {:?} will be read on every prediction",
                    shared.config.path
                );
            }
        }

        Ok(shared)
    }

    /// Create the handle around a model that is already in memory
    pub fn from_loaded(config: ModelConfig, model: LoadedModel) -> Self {
        Self {
            config: Arc::new(config),
            current: Arc::new(RwLock::new(Some(Arc::new(model)))),
        }
    }

    /// Get the model configuration
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// The model currently in the slot, if any has been loaded
    pub fn current(&self) -> Option<Arc<LoadedModel>> {
        self.current.read().clone()
    }

    /// The model a prediction should use right now
    pub async fn resolve(&self) -> Result<Arc<LoadedModel>> {
        match self.config.load_mode {
            LoadMode::Startup => self
                .current()
                .ok_or_else(|| Error::internal("no model has been loaded")),
            LoadMode::PerRequest => Ok(Arc::new(self.read_artifact().await?)),
        }
    }

    /// Re-read the artifact and swap it in
    pub async fn reload(&self) -> Result<Arc<LoadedModel>> {
        let model = match self.read_artifact().await {
            Ok(model) => Arc::new(model),
            Err(e) => {
                warn!("Model reload from {:?} failed: {}", self.config.path, e);
                return Err(e);
            }
        };

        *self.current.write() = Some(Arc::clone(&model));
        info!("Model '{}' is now active", model.metadata().name);

        Ok(model)
    }

    /// Predict the category of one course name
    pub async fn predict_one(&self, course_name: &str) -> Result<Prediction> {
        let model = self.resolve().await?;
        let label = predict_one(model.predictor().as_ref(), course_name).await?;

        debug!(model = %model.metadata().name, %label, "Predicted course category");
        Ok(Prediction::new(course_name, label))
    }

    async fn read_artifact(&self) -> Result<LoadedModel> {
        let config = Arc::clone(&self.config);
        tokio::task::spawn_blocking(move || LoadedModel::load(&config))
            .await
            .map_err(|e| Error::internal(format!("model load task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(label: &str) -> String {
        format!(
            r#"{{
                "format_version": 1,
                "classes": ["Other", "{label}"],
                "vectorizer": {{"vocabulary": {{"learning": 0}}}},
                "coef": [[3.0]],
                "intercept": [-1.0]
            }}"#
        )
    }

    #[tokio::test]
    async fn test_startup_load_and_predict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, artifact("Data Science")).unwrap();

        let shared = SharedModel::load(ModelConfig::from_local(&path)).await.unwrap();
        let prediction = shared.predict_one("Intro to Machine Learning").await.unwrap();
        assert_eq!(prediction.course_name, "Intro to Machine Learning");
        assert_eq!(prediction.label, "Data Science");

        let prediction = shared.predict_one("Pottery").await.unwrap();
        assert_eq!(prediction.label, "Other");
    }

    #[tokio::test]
    async fn test_startup_load_fails_on_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModelConfig::from_local(dir.path().join("missing.json"));
        assert!(SharedModel::load(config).await.is_err());
    }

    #[tokio::test]
    async fn test_startup_mode_ignores_file_changes_until_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, artifact("Data Science")).unwrap();

        let shared = SharedModel::load(ModelConfig::from_local(&path)).await.unwrap();
        std::fs::write(&path, artifact("Statistics")).unwrap();

        assert_eq!(shared.predict_one("learning").await.unwrap().label, "Data Science");

        shared.reload().await.unwrap();
        assert_eq!(shared.predict_one("learning").await.unwrap().label, "Statistics");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, artifact("Data Science")).unwrap();

        let shared = SharedModel::load(ModelConfig::from_local(&path)).await.unwrap();
        std::fs::write(&path, "{ broken").unwrap();

        assert!(shared.reload().await.is_err());
        assert_eq!(shared.predict_one("learning").await.unwrap().label, "Data Science");
    }

    #[tokio::test]
    async fn test_per_request_mode_reads_every_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let config = ModelConfig::from_local(&path).with_load_mode(LoadMode::PerRequest);

        // Starting without an artifact is allowed in this mode
        let shared = SharedModel::load(config).await.unwrap();
        assert!(shared.current().is_none());
        assert!(shared.predict_one("learning").await.is_err());

        std::fs::write(&path, artifact("Data Science")).unwrap();
        assert_eq!(shared.predict_one("learning").await.unwrap().label, "Data Science");

        std::fs::write(&path, artifact("Statistics")).unwrap();
        assert_eq!(shared.predict_one("learning").await.unwrap().label, "Statistics");
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, artifact("Data Science")).unwrap();

        let shared = SharedModel::load(ModelConfig::from_local(&path)).await.unwrap();
        let clone = shared.clone();

        std::fs::write(&path, artifact("Statistics")).unwrap();
        shared.reload().await.unwrap();
        assert_eq!(clone.predict_one("learning").await.unwrap().label, "Statistics");
    }
}
