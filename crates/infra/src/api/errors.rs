//! API-specific error types
//!
//! Classifies REST failures with retry metadata and maps them back to the
//! domain error the editor reports.

use std::time::Duration;

use serde::Deserialize;
use servdesk_common::validation::{FieldError, ValidationError};
use servdesk_domain::ServdeskError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// Error body returned by the server for every non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Vec<FieldError>,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(ValidationError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::NotFound(_) | Self::Validation(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }

    /// Suggested retry delay in seconds
    pub fn retry_delay_secs(&self) -> u64 {
        match self.category() {
            ApiErrorCategory::RateLimit => 60,
            ApiErrorCategory::Server => 10,
            ApiErrorCategory::Network => 5,
            ApiErrorCategory::Authentication
            | ApiErrorCategory::Client
            | ApiErrorCategory::Config => 0,
        }
    }

    /// Classify a non-success status and its (possibly empty) error body.
    pub fn from_status(status: reqwest::StatusCode, url: &str, body: &str) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
        let message = match &parsed {
            Some(err) => format!("{} returned {}: {}", url, status, err.message),
            None if body.is_empty() => format!("{} returned {}", url, status),
            None => format!("{} returned {}: {}", url, status, body),
        };

        match status.as_u16() {
            401 | 403 => Self::Auth(message),
            404 => Self::NotFound(message),
            422 => match parsed {
                Some(err) if !err.details.is_empty() => {
                    Self::Validation(ValidationError { errors: err.details })
                }
                _ => Self::Client(message),
            },
            429 => Self::RateLimit(message),
            400..=499 => Self::Client(message),
            500..=599 => Self::Server(message),
            _ => Self::Network(message),
        }
    }
}

impl From<ServdeskError> for ApiError {
    fn from(err: ServdeskError) -> Self {
        match err {
            ServdeskError::Network(message) => Self::Network(message),
            ServdeskError::Config(message) => Self::Config(message),
            ServdeskError::NotFound(message) => Self::NotFound(message),
            ServdeskError::InvalidInput(message) => Self::Client(message),
            ServdeskError::Validation(details) => Self::Validation(details),
            ServdeskError::Database(message) | ServdeskError::Internal(message) => {
                Self::Server(message)
            }
        }
    }
}

impl From<ApiError> for ServdeskError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(message) => Self::NotFound(message),
            ApiError::Validation(details) => Self::Validation(details),
            ApiError::Client(message) => Self::InvalidInput(message),
            ApiError::Config(message) => Self::Config(message),
            other => Self::Network(other.to_string()),
        }
    }
}
