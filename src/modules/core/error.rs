//! Error types for bindcheck

use thiserror::Error;

/// Broad classification of a [`BindcheckError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed service binding in the environment
    Configuration,
    /// Connection or query failure
    Database,
    /// Listener or process level failure
    Server,
}

/// Main error type for bindcheck operations
#[derive(Error, Debug)]
pub enum BindcheckError {
    /// Environment variable not found (or empty)
    #[error("No {0} found")]
    EnvVarNotFound(String),

    /// Service key absent from `VCAP_SERVICES`
    #[error("Service '{0}' not found in VCAP_SERVICES")]
    ServiceNotFound(String),

    /// Binding entry present but unusable
    #[error("Invalid service binding: {0}")]
    InvalidBinding(String),

    /// Connection URI could not be parsed
    #[error("Invalid connection URI: {0}")]
    InvalidUri(String),

    /// JSON deserialization error
    #[error("Malformed VCAP_SERVICES: {0}")]
    Json(#[from] serde_json::Error),

    /// Database connection error
    #[error("Database error: {0}")]
    Database(String),

    /// Query execution error
    #[error("Query execution failed: {0}")]
    QueryExecution(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BindcheckError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BindcheckError::EnvVarNotFound(_)
            | BindcheckError::ServiceNotFound(_)
            | BindcheckError::InvalidBinding(_)
            | BindcheckError::InvalidUri(_)
            | BindcheckError::Json(_) => ErrorKind::Configuration,
            BindcheckError::Database(_) | BindcheckError::QueryExecution(_) => {
                ErrorKind::Database
            }
            BindcheckError::Server(_) | BindcheckError::Io(_) => ErrorKind::Server,
        }
    }

    /// Returns true for missing/malformed binding errors
    pub fn is_configuration_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Returns true for connection and query failures
    pub fn is_database_error(&self) -> bool {
        self.kind() == ErrorKind::Database
    }
}

/// Result type alias using BindcheckError
pub type Result<T> = std::result::Result<T, BindcheckError>;
