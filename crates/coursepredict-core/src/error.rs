//! Error types for CoursePredict

/// Result type alias using CoursePredict's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for CoursePredict operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model artifact is malformed or internally inconsistent
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Prediction failed inside a predictor
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected before reaching the model
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem errors (missing artifact, unreadable config)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Short machine-readable name of the error kind, used as a metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Artifact(_) => "artifact",
            Self::Classifier(_) => "classifier",
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Yaml(_) => "yaml",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::artifact("coef has 2 rows, expected 3");
        assert_eq!(err.to_string(), "artifact error: coef has 2 rows, expected 3");
        assert_eq!(err.kind(), "artifact");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_invalid_input_is_client_error() {
        assert!(Error::invalid_input("empty course name").is_client_error());
    }
}
