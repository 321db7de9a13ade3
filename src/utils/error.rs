use crate::domain::model::Backend;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Corrupt {backend} store: {message}")]
    CorruptStore { backend: Backend, message: String },

    #[error("No store registered for the {backend} backend")]
    BackendNotRegistered { backend: Backend },

    #[error("Could not build redirect path: {message}")]
    RedirectError { message: String },

    #[error("Write to {failed} store failed after writing {written:?}: {source}")]
    PartialWrite {
        failed: Backend,
        written: Vec<Backend>,
        #[source]
        source: Box<RegistryError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::ConfigError { .. }
            | RegistryError::ConfigValidationError { .. }
            | RegistryError::InvalidConfigValueError { .. }
            | RegistryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RegistryError::TemplateError(_) | RegistryError::RedirectError { .. } => {
                ErrorCategory::Rendering
            }
            RegistryError::IoError(_)
            | RegistryError::CsvError(_)
            | RegistryError::SerializationError(_)
            | RegistryError::DatabaseError(_)
            | RegistryError::CorruptStore { .. }
            | RegistryError::BackendNotRegistered { .. }
            | RegistryError::PartialWrite { .. } => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 部分寫入代表各後端已不一致
            RegistryError::PartialWrite { .. } => ErrorSeverity::Critical,
            RegistryError::TemplateError(_) | RegistryError::RedirectError { .. } => {
                ErrorSeverity::Medium
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RegistryError::IoError(_) => {
                "Check that the data directory exists and is writable".to_string()
            }
            RegistryError::CsvError(_) => "Inspect the CSV store for malformed rows".to_string(),
            RegistryError::SerializationError(_) => {
                "Inspect the JSON store; it must contain a single array of strings".to_string()
            }
            RegistryError::DatabaseError(_) => {
                "Check the SQLite database path and file permissions".to_string()
            }
            RegistryError::TemplateError(_) => "Check the page templates for syntax errors".to_string(),
            RegistryError::ConfigError { .. }
            | RegistryError::ConfigValidationError { .. } => {
                "Review the TOML configuration file".to_string()
            }
            RegistryError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            RegistryError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            RegistryError::CorruptStore { backend, .. } => {
                format!("Repair or move aside the {} store file", backend)
            }
            RegistryError::BackendNotRegistered { backend } => {
                format!("Register a {} store when building the fan-out engine", backend)
            }
            RegistryError::RedirectError { .. } => {
                "Report the submitted name; the greeting route could not encode it".to_string()
            }
            RegistryError::PartialWrite { failed, written, .. } => format!(
                "Stores {:?} already hold the name but {} does not; reconcile them manually",
                written, failed
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Rendering => "A page could not be rendered".to_string(),
            ErrorCategory::Storage => format!("Could not access stored names: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
