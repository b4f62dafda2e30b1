use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefangError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid address on input {source_name} line {line}: '{value}' ({reason})")]
    InvalidAddressError {
        source_name: String,
        line: usize,
        value: String,
        reason: String,
    },

    #[error("Input {source_name} is not valid UTF-8: {reason}")]
    InvalidEncodingError { source_name: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DefangError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DefangError::IoError(_) | DefangError::SerializationError(_) => ErrorCategory::Io,
            DefangError::TomlParseError { .. }
            | DefangError::InvalidConfigValueError { .. }
            | DefangError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DefangError::InvalidAddressError { .. }
            | DefangError::InvalidEncodingError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 對應嚴重程度的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DefangError::IoError(_) => {
                "Check that input files exist and the output directory is writable".to_string()
            }
            DefangError::SerializationError(_) => {
                "Retry with --format text to skip JSON rendering".to_string()
            }
            DefangError::TomlParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            DefangError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            DefangError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            DefangError::InvalidEncodingError { source_name, .. } => {
                format!("Re-save '{}' as UTF-8", source_name)
            }
            DefangError::InvalidAddressError { .. } => {
                "Drop --strict to transform free-form text, or clean up the input".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DefangError::IoError(e) => format!("Could not read or write a file: {}", e),
            DefangError::SerializationError(e) => format!("Could not render JSON report: {}", e),
            DefangError::TomlParseError { message } => {
                format!("Config file could not be parsed: {}", message)
            }
            DefangError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
            DefangError::MissingConfigError { field } => {
                format!("Configuration '{}' is missing", field)
            }
            DefangError::InvalidEncodingError { source_name, .. } => {
                format!("'{}' contains bytes that are not valid UTF-8", source_name)
            }
            DefangError::InvalidAddressError {
                source_name,
                line,
                value,
                ..
            } => format!(
                "'{}' ({} line {}) is not an IPv4 address",
                value, source_name, line
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, DefangError>;
