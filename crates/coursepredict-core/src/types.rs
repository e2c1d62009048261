//! Core types for CoursePredict

use serde::{Deserialize, Serialize};

/// A single prediction: the course name exactly as received and the label
/// the classifier assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Input text, never normalized
    pub course_name: String,

    /// Predicted category label
    pub label: String,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(course_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            course_name: course_name.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_keeps_input_verbatim() {
        let p = Prediction::new("  Intro to ML  ", "Data Science");
        assert_eq!(p.course_name, "  Intro to ML  ");
        assert_eq!(p.label, "Data Science");
    }
}
