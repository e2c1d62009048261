//! Linear text classifier (logistic regression over TF-IDF features)

use crate::predictor::Predictor;
use crate::vectorizer::{SparseVector, TfidfVectorizer};
use async_trait::async_trait;
use coursepredict_core::Result;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How per-class scores become probabilities.
///
/// Only `predict_proba` reads this; the predicted label is the highest raw
/// score under either link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
    /// Softmax over all class scores
    #[default]
    Multinomial,
    /// Independent sigmoids, renormalized to sum to one
    Ovr,
}

/// Logistic regression on top of a TF-IDF vectorizer
#[derive(Debug, Clone)]
pub struct LinearTextClassifier {
    name: String,
    classes: Vec<String>,
    vectorizer: TfidfVectorizer,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    multi_class: MultiClass,
}

impl LinearTextClassifier {
    /// Create a classifier, checking that every dimension lines up.
    ///
    /// `coef` holds one row per class, or a single row when there are
    /// exactly two classes (positive score selects the second class).
    pub fn new(
        name: impl Into<String>,
        classes: Vec<String>,
        vectorizer: TfidfVectorizer,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
        multi_class: MultiClass,
    ) -> Result<Self> {
        if classes.len() < 2 {
            return Err(coursepredict_core::Error::artifact(format!(
                "a classifier needs at least two classes, got {}",
                classes.len()
            )));
        }

        let binary_rows = classes.len() == 2 && coef.len() == 1;
        if coef.len() != classes.len() && !binary_rows {
            return Err(coursepredict_core::Error::artifact(format!(
                "coef has {} rows for {} classes",
                coef.len(),
                classes.len()
            )));
        }

        let n_features = vectorizer.n_features();
        if let Some((row, weights)) = coef
            .iter()
            .enumerate()
            .find(|(_, weights)| weights.len() != n_features)
        {
            return Err(coursepredict_core::Error::artifact(format!(
                "coef row {} has {} weights, expected {}",
                row,
                weights.len(),
                n_features
            )));
        }

        if intercept.len() != coef.len() {
            return Err(coursepredict_core::Error::artifact(format!(
                "intercept has {} entries for {} coef rows",
                intercept.len(),
                coef.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            classes,
            vectorizer,
            coef,
            intercept,
            multi_class,
        })
    }

    /// Class labels in model order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Vectorizer feeding this model
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Raw linear scores, one per coef row
    pub fn decision_function(&self, text: &str) -> Vec<f64> {
        let features = self.vectorizer.transform(text);
        self.scores(&features)
    }

    fn scores(&self, features: &SparseVector) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| {
                features
                    .iter()
                    .map(|&(index, value)| weights[index] * value)
                    .sum::<f64>()
                    + bias
            })
            .collect()
    }

    fn class_index(&self, scores: &[f64]) -> usize {
        if scores.len() == 1 {
            return usize::from(scores[0] > 0.0);
        }

        // First maximum wins on ties
        scores
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best, best_score), (i, &s)| {
                if s > best_score {
                    (i, s)
                } else {
                    (best, best_score)
                }
            })
            .0
    }

    /// Predicted label for one text
    pub fn predict_label(&self, text: &str) -> &str {
        let scores = self.decision_function(text);
        &self.classes[self.class_index(&scores)]
    }

    /// Class probabilities for one text, in model class order
    pub fn predict_proba(&self, text: &str) -> Vec<(String, f64)> {
        let scores = self.decision_function(text);

        let probabilities = if scores.len() == 1 {
            let positive = sigmoid(scores[0]);
            vec![1.0 - positive, positive]
        } else {
            match self.multi_class {
                MultiClass::Multinomial => softmax(&scores),
                MultiClass::Ovr => {
                    let raw: Vec<f64> = scores.iter().map(|&s| sigmoid(s)).collect();
                    let total: f64 = raw.iter().sum();
                    raw.into_iter().map(|p| p / total).collect()
                }
            }
        };

        self.classes.iter().cloned().zip(probabilities).collect()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

#[async_trait]
impl Predictor for LinearTextClassifier {
    async fn predict(&self, inputs: &[String]) -> Result<Vec<String>> {
        let start = Instant::now();

        let labels: Vec<String> = inputs
            .iter()
            .map(|text| self.predict_label(text).to_string())
            .collect();

        tracing::trace!(
            model = %self.name,
            inputs = inputs.len(),
            latency_us = start.elapsed().as_micros() as u64,
            "batch predicted"
        );

        Ok(labels)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
