//! Storage error types

use thiserror::Error;

use crate::error::{ErrorClassification, ErrorSeverity};

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(String),

    #[error("Database encryption error: {0}")]
    Encryption(String),

    #[error("Wrong encryption key or database not encrypted")]
    WrongKeyOrNotEncrypted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Rusqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    R2d2(#[from] r2d2::Error),
}

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Classify a driver message that indicates an unreadable database file.
    pub(crate) fn from_open_failure(message: String) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("file is not a database")
            || lowered.contains("file is encrypted")
            || lowered.contains("database disk image is malformed")
            || lowered.contains("notadb")
        {
            Self::WrongKeyOrNotEncrypted
        } else {
            Self::Connection(message)
        }
    }
}

impl ErrorClassification for StorageError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::R2d2(_) => true,
            Self::Rusqlite(err) => matches!(
                err.sqlite_error_code(),
                Some(rusqlite::ErrorCode::DatabaseBusy) | Some(rusqlite::ErrorCode::DatabaseLocked)
            ),
            _ => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Connection(_) | Self::Query(_) | Self::R2d2(_) | Self::Rusqlite(_) => {
                ErrorSeverity::Error
            }
            Self::InvalidConfig(_) => ErrorSeverity::Error,
            Self::Encryption(_) | Self::WrongKeyOrNotEncrypted => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Encryption(_) | Self::WrongKeyOrNotEncrypted)
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        None
    }
}
