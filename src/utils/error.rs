use thiserror::Error;

/// Failures of a single prediction request. Both kinds are reported to the user
/// as an error banner; neither is allowed to crash the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("Please enter valid values before making a prediction.")]
    EmptyInput,

    #[error("An error occurred: {message}")]
    InferenceFailure { message: String },
}

impl PredictionError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::InferenceFailure {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DiabetesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' failed validation: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load model from '{path}': {message}")]
    ModelLoadError { path: String, message: String },

    #[error("Invalid input for {field} ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Model,
    Inference,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DiabetesError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn model_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ModelLoadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_input(field: &str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DiabetesError::InvalidInput { .. } => ErrorCategory::Input,
            DiabetesError::Prediction(PredictionError::EmptyInput) => ErrorCategory::Input,
            DiabetesError::Prediction(PredictionError::InferenceFailure { .. }) => {
                ErrorCategory::Inference
            }
            DiabetesError::ConfigError { .. }
            | DiabetesError::ConfigValidationError { .. }
            | DiabetesError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DiabetesError::ModelLoadError { .. } => ErrorCategory::Model,
            DiabetesError::IoError(_)
            | DiabetesError::SerializationError(_)
            | DiabetesError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => match self {
                DiabetesError::Prediction(PredictionError::EmptyInput) => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::Inference => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Model => ErrorSeverity::Critical,
            ErrorCategory::System => ErrorSeverity::High,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DiabetesError::InvalidInput { field, reason, .. } => {
                format!("{} {}", field, reason)
            }
            DiabetesError::Prediction(e) => e.to_string(),
            DiabetesError::ModelLoadError { path, .. } => {
                format!("The prediction model at '{}' could not be loaded", path)
            }
            DiabetesError::ConfigError { .. }
            | DiabetesError::ConfigValidationError { .. }
            | DiabetesError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Enter non-negative measurements; Pregnancies and Age must be whole numbers"
            }
            ErrorCategory::Inference => {
                "Check that the model artifact was trained on the eight standard features"
            }
            ErrorCategory::Model => {
                "Make sure the model file exists and is a valid JSON model artifact"
            }
            ErrorCategory::Configuration => {
                "Review the configuration file and command line flags"
            }
            ErrorCategory::System => "Check file paths and permissions, then try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, DiabetesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_low_severity() {
        let err = DiabetesError::from(PredictionError::EmptyInput);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn inference_failure_keeps_message() {
        let err = PredictionError::inference("shape mismatch");
        assert_eq!(err.to_string(), "An error occurred: shape mismatch");

        let wrapped = DiabetesError::from(err);
        assert_eq!(wrapped.severity(), ErrorSeverity::High);
        assert_eq!(wrapped.exit_code(), 1);
    }

    #[test]
    fn model_load_is_critical() {
        let err = DiabetesError::model_load("model.json", "not found");
        assert_eq!(err.category(), ErrorCategory::Model);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("model.json"));
    }
}
