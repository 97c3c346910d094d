use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{path} does not exist")]
    MissingInputError { path: String },

    #[error("Checks file error: {message}")]
    ChecksError { message: String },

    #[error("Invalid selector '{selector}': {reason}")]
    SelectorError { selector: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Input,
    Selector,
    Config,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GradeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GradeError::HttpError(_) => ErrorCategory::Network,
            GradeError::IoError(_) => ErrorCategory::Io,
            GradeError::MissingInputError { .. } | GradeError::ChecksError { .. } => {
                ErrorCategory::Input
            }
            GradeError::SelectorError { .. } => ErrorCategory::Selector,
            GradeError::ConfigError { .. }
            | GradeError::InvalidConfigValueError { .. }
            | GradeError::MissingConfigError { .. } => ErrorCategory::Config,
            GradeError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Usage mistakes: the invocation was wrong before any work started.
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Network
            | ErrorCategory::Io
            | ErrorCategory::Input
            | ErrorCategory::Selector => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GradeError::MissingInputError { path } => {
                format!("{} does not exist. Exiting.", path)
            }
            GradeError::HttpError(e) => format!("Could not fetch the HTML document: {}", e),
            GradeError::ChecksError { message } => format!("Could not load checks: {}", message),
            GradeError::SelectorError { selector, reason } => {
                format!("Selector '{}' could not be parsed: {}", selector, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the URL and your network connection, then retry",
            ErrorCategory::Io => "Check file permissions and paths",
            ErrorCategory::Input => {
                "Verify the checks file is a JSON array of selectors and that input paths exist"
            }
            ErrorCategory::Selector => "Fix the CSS selector syntax in the checks file",
            ErrorCategory::Config => "Run with --help to review the expected flags",
            ErrorCategory::Internal => "This is a bug; please report it",
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
