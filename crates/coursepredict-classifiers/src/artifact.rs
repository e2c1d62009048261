//! Serialized model artifacts (JSON or YAML)

use crate::linear::{LinearTextClassifier, MultiClass};
use crate::vectorizer::{TfidfVectorizer, VectorizerSpec};
use coursepredict_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Artifact layout version this build reads
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// On-disk encoding of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Json,
    Yaml,
}

impl ArtifactFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(coursepredict_core::Error::config(format!(
                "cannot infer artifact format from {:?}; set model.format to json or yaml",
                path
            ))),
        }
    }
}

/// A TF-IDF + logistic regression text classifier, as written by the
/// training side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact layout version
    pub format_version: u32,

    /// Model name, used in logs
    #[serde(default)]
    pub name: Option<String>,

    /// Class labels; index i matches coef row i
    pub classes: Vec<String>,

    /// Feature extraction settings and vocabulary
    pub vectorizer: VectorizerSpec,

    /// Weights, n_classes x n_features (or 1 x n_features for two classes)
    pub coef: Vec<Vec<f64>>,

    /// Bias per coef row
    pub intercept: Vec<f64>,

    /// Probability link for multi-class models
    #[serde(default)]
    pub multi_class: MultiClass,
}

impl ModelArtifact {
    /// Parse an artifact from text in the given format
    pub fn parse(content: &str, format: ArtifactFormat) -> Result<Self> {
        let artifact: Self = match format {
            ArtifactFormat::Json => serde_json::from_str(content)?,
            ArtifactFormat::Yaml => serde_yaml::from_str(content)?,
        };

        if artifact.format_version != CURRENT_FORMAT_VERSION {
            return Err(coursepredict_core::Error::artifact(format!(
                "unsupported artifact format_version {} (this build reads {})",
                artifact.format_version, CURRENT_FORMAT_VERSION
            )));
        }

        Ok(artifact)
    }

    /// Serialize back to text, mostly useful for fixtures
    pub fn to_text(&self, format: ArtifactFormat) -> Result<String> {
        Ok(match format {
            ArtifactFormat::Json => serde_json::to_string_pretty(self)?,
            ArtifactFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Number of feature columns the weights expect
    pub fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    /// Build a ready-to-use classifier, validating all dimensions
    pub fn into_classifier(self, fallback_name: &str) -> Result<LinearTextClassifier> {
        let n_features = self.n_features();
        let vectorizer = TfidfVectorizer::from_spec(self.vectorizer, n_features)?;
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());

        LinearTextClassifier::new(
            name,
            self.classes,
            vectorizer,
            self.coef,
            self.intercept,
            self.multi_class,
        )
    }
}
