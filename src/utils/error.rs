use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{file}:{line}: malformed JSON: {message}")]
    ParseError {
        file: String,
        line: u64,
        message: String,
    },

    #[error("{file} is not valid UTF-8")]
    EncodingError { file: String },

    #[error("{resource} record at line {line} failed validation: {message}")]
    ValidationError {
        resource: &'static str,
        line: u64,
        message: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExportError {
    /// Severity drives the process exit code; data errors are recoverable by
    /// fixing the input, environment errors are not.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExportError::IoError(_)
            | ExportError::EncodingError { .. }
            | ExportError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            ExportError::CsvError(_)
            | ExportError::SerializationError(_)
            | ExportError::ParseError { .. }
            | ExportError::ValidationError { .. } => ErrorSeverity::High,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
