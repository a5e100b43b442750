use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read input {input}: {message}")]
    RetrievalError { input: String, message: String },

    #[error("Failed to save results to {path}: {message}")]
    PersistenceError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extraction task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PhoneError {
    pub fn retrieval(input: impl Into<String>, message: impl std::fmt::Display) -> Self {
        PhoneError::RetrievalError {
            input: input.into(),
            message: message.to_string(),
        }
    }

    pub fn persistence(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        PhoneError::PersistenceError {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PhoneError::RetrievalError { .. } => ErrorCategory::Input,
            PhoneError::PersistenceError { .. } | PhoneError::SerializationError(_) => {
                ErrorCategory::Output
            }
            PhoneError::ConfigError { .. }
            | PhoneError::ConfigValidationError { .. }
            | PhoneError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PhoneError::IoError(_) | PhoneError::TaskError { .. } => ErrorCategory::System,
        }
    }

    /// Retrieval and persistence failures are recovered locally, so they never
    /// rank above `Low`.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PhoneError::RetrievalError { .. } | PhoneError::PersistenceError { .. } => {
                ErrorSeverity::Low
            }
            PhoneError::ConfigError { .. }
            | PhoneError::ConfigValidationError { .. }
            | PhoneError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            PhoneError::SerializationError(_) | PhoneError::IoError(_) => ErrorSeverity::High,
            PhoneError::TaskError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PhoneError::RetrievalError { input, .. } => {
                format!("Could not read {}, it was skipped", input)
            }
            PhoneError::PersistenceError { path, .. } => {
                format!("Could not save results to {}", path)
            }
            PhoneError::ConfigError { message } => format!("Configuration problem: {}", message),
            PhoneError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            PhoneError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the file exists and is UTF-8 encoded text",
            ErrorCategory::Output => {
                "Check that the output directory exists and is writable"
            }
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Re-run with --verbose and inspect the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, PhoneError>;
