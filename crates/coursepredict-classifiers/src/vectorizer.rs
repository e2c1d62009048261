//! TF-IDF feature extraction over a fixed vocabulary

use crate::tokenizer::{Tokenizer, DEFAULT_TOKEN_PATTERN};
use coursepredict_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Sparse feature vector: (feature index, value), sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Vectorizer section of a model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerSpec {
    /// Lowercase text before tokenizing
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Token regex
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    /// Inclusive n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Term to feature index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature; absent means raw counts
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    /// Row normalization; `null` disables it
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,

    /// Replace tf with 1 + ln(tf)
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Tokens dropped before n-gram expansion
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Turns raw text into weighted, normalized sparse vectors
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    norm: Option<Norm>,
    sublinear_tf: bool,
    n_features: usize,
}

impl TfidfVectorizer {
    /// Build a vectorizer for `n_features` columns, checking the spec fits
    pub fn from_spec(spec: VectorizerSpec, n_features: usize) -> Result<Self> {
        let tokenizer = Tokenizer::new(
            &spec.token_pattern,
            spec.lowercase,
            spec.ngram_range,
            spec.stop_words,
        )?;

        if let Some((term, index)) = spec.vocabulary.iter().find(|(_, index)| **index >= n_features) {
            return Err(coursepredict_core::Error::artifact(format!(
                "vocabulary term '{}' maps to index {} but the model has {} features",
                term, index, n_features
            )));
        }

        if let Some(idf) = &spec.idf {
            if idf.len() != n_features {
                return Err(coursepredict_core::Error::artifact(format!(
                    "idf has {} entries, expected {}",
                    idf.len(),
                    n_features
                )));
            }
        }

        Ok(Self {
            tokenizer,
            vocabulary: spec.vocabulary,
            idf: spec.idf,
            norm: spec.norm,
            sublinear_tf: spec.sublinear_tf,
            n_features,
        })
    }

    /// Number of feature columns
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of known terms
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vectorize one text; unknown terms are ignored
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.tokenizer.analyze(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                let weight = self.idf.as_ref().map_or(1.0, |idf| idf[index]);
                (index, tf * weight)
            })
            .collect();

        if let Some(norm) = self.norm {
            let length = match norm {
                Norm::L1 => features.iter().map(|(_, v)| v.abs()).sum::<f64>(),
                Norm::L2 => features.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            };
            if length > 0.0 {
                for (_, value) in features.iter_mut() {
                    *value /= length;
                }
            }
        }

        features
    }
}
