//! Predictor trait and the single-input prediction adapter

use async_trait::async_trait;
use coursepredict_core::{Error, Result};

/// Anything that maps a batch of texts to a parallel batch of labels
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Predict one label per input, in input order
    async fn predict(&self, inputs: &[String]) -> Result<Vec<String>>;

    /// Get the predictor name
    fn name(&self) -> &str;
}

/// Run a predictor on a single input and return its only label.
///
/// The input is passed through untouched; an empty string is a valid input
/// here and callers that want to refuse it must do so before calling.
pub async fn predict_one(predictor: &dyn Predictor, input: &str) -> Result<String> {
    let labels = predictor.predict(&[input.to_string()]).await?;

    labels.into_iter().next().ok_or_else(|| {
        Error::classifier(format!(
            "predictor '{}' returned no labels",
            predictor.name()
        ))
    })
}
