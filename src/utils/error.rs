use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferError {
    #[error("Model runtime error: {0}")]
    ModelRuntimeError(#[from] ort::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input length is {actual} but model requires {expected} features")]
    FeatureCountError { expected: usize, actual: usize },

    #[error("Shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatchError { expected: usize, actual: usize },

    #[error("Invalid number in input: \"{token}\"")]
    InputFormatError { token: String },
}

pub type Result<T> = std::result::Result<T, InferError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code reported for an error of this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // warning only
            ErrorSeverity::Medium => 2,   // usage error
            ErrorSeverity::High => 1,     // processing error
            ErrorSeverity::Critical => 3, // system error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Shape,
    Model,
    Output,
}

impl InferError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A wrong feature count is a usage error with its own exit code.
            InferError::FeatureCountError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            InferError::ConfigError { .. }
            | InferError::MissingConfigError { .. }
            | InferError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            InferError::InputFormatError { .. } | InferError::FeatureCountError { .. } => {
                ErrorCategory::Input
            }
            InferError::ShapeMismatchError { .. } => ErrorCategory::Shape,
            InferError::ModelRuntimeError(_) => ErrorCategory::Model,
            InferError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InferError::ConfigError { message } => message.clone(),
            InferError::MissingConfigError { field } => {
                format!("the scaler file is missing the \"{}\" field", field)
            }
            InferError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("invalid {} \"{}\": {}", field, value, reason),
            InferError::FeatureCountError { expected, actual } => {
                format!("expected {} features, got {}", expected, actual)
            }
            InferError::ShapeMismatchError { expected, actual } => {
                format!(
                    "feature vector has {} elements but the scaler describes {}",
                    actual, expected
                )
            }
            InferError::InputFormatError { token } => {
                format!("\"{}\" is not a valid number", token)
            }
            InferError::ModelRuntimeError(e) => format!("model load or inference failed: {}", e),
            InferError::SerializationError(e) => format!("could not render the prediction: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            InferError::ConfigError { .. } | InferError::MissingConfigError { .. } => {
                "Check that the scaler file exists and contains \"mean\" and \"scale\" arrays"
                    .to_string()
            }
            InferError::InvalidConfigValueError { field, .. } => {
                format!("Check the --{} argument", field)
            }
            InferError::FeatureCountError { expected, .. } => {
                format!("Pass exactly {} comma-separated numbers", expected)
            }
            InferError::ShapeMismatchError { .. } => {
                "Use a scaler file fitted for this model's input length".to_string()
            }
            InferError::InputFormatError { .. } => {
                "Pass the input as comma-separated numbers, e.g. 0.1,2.5,3".to_string()
            }
            InferError::ModelRuntimeError(_) => {
                "Check that the model file is a valid ONNX artifact".to_string()
            }
            InferError::SerializationError(_) => {
                "Re-run with --verbose for the full error".to_string()
            }
        }
    }
}
