//! Error types used throughout the service

use serde::{Deserialize, Serialize};
use servdesk_common::error::{ErrorClassification, ErrorSeverity};
use servdesk_common::validation::ValidationError;
use thiserror::Error;

/// Main error type for Servdesk
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ServdeskError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Servdesk operations
pub type Result<T> = std::result::Result<T, ServdeskError>;

impl From<ValidationError> for ServdeskError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl ErrorClassification for ServdeskError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Database(_))
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Info,
            Self::InvalidInput(_) | Self::Validation(_) => ErrorSeverity::Warning,
            Self::Database(_) | Self::Config(_) | Self::Network(_) => ErrorSeverity::Error,
            Self::Internal(_) => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        None
    }
}
