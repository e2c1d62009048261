//! CoursePredict Classifiers
//!
//! Everything between a model artifact on disk and a predicted label:
//! - `Predictor`, the batch-predict interface the front-ends program against
//! - TF-IDF + logistic regression artifacts (JSON or YAML) and their loader
//! - `SharedModel`, the load-once handle with an explicit reload path
//!
//! The front-ends never look inside a predictor; swapping the artifact format
//! only means providing another `Predictor` implementation.

pub mod artifact;
pub mod config;
pub mod linear;
pub mod model_loader;
pub mod predictor;
pub mod shared;
pub mod tokenizer;
pub mod vectorizer;

pub use artifact::{ArtifactFormat, ModelArtifact, CURRENT_FORMAT_VERSION};
pub use config::{LoadMode, ModelConfig};
pub use linear::{LinearTextClassifier, MultiClass};
pub use model_loader::{LoadedModel, ModelMetadata};
pub use predictor::{predict_one, Predictor};
pub use shared::SharedModel;
pub use tokenizer::Tokenizer;
pub use vectorizer::{Norm, SparseVector, TfidfVectorizer, VectorizerSpec};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{LoadMode, ModelConfig};
    pub use crate::model_loader::LoadedModel;
    pub use crate::predictor::{predict_one, Predictor};
    pub use crate::shared::SharedModel;
}
