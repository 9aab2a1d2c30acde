//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use servdesk_common::storage::StorageError;
use servdesk_domain::ServdeskError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ServdeskError);

impl From<InfraError> for ServdeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ServdeskError> for InfraError {
    fn from(value: ServdeskError) -> Self {
        InfraError(value)
    }
}

trait IntoServdeskError {
    fn into_servdesk(self) -> ServdeskError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ServdeskError */
/* -------------------------------------------------------------------------- */

impl IntoServdeskError for SqlError {
    fn into_servdesk(self) -> ServdeskError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        ServdeskError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        ServdeskError::Database("database is locked".into())
                    }
                    // SQLITE_CONSTRAINT_PRIMARYKEY / SQLITE_CONSTRAINT_UNIQUE
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        ServdeskError::InvalidInput("duplicate key".into())
                    }
                    (ErrorCode::NotADatabase, _) => ServdeskError::Database(
                        "database key rejected or file is not a database".into(),
                    ),
                    _ => ServdeskError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => ServdeskError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                ServdeskError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ServdeskError::Database(format!("invalid column type: {ty}"))
            }
            other => ServdeskError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_servdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → ServdeskError */
/* -------------------------------------------------------------------------- */

impl IntoServdeskError for StorageError {
    fn into_servdesk(self) -> ServdeskError {
        match self {
            StorageError::Rusqlite(err) => err.into_servdesk(),
            StorageError::InvalidConfig(message) => ServdeskError::Config(message),
            other => ServdeskError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_servdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ServdeskError */
/* -------------------------------------------------------------------------- */

impl IntoServdeskError for HttpError {
    fn into_servdesk(self) -> ServdeskError {
        if self.is_timeout() {
            return ServdeskError::Network("HTTP request timed out".into());
        }
        if self.is_connect() {
            return ServdeskError::Network("HTTP connection failure".into());
        }
        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return match code {
                404 => ServdeskError::NotFound(message),
                400..=499 => ServdeskError::InvalidInput(message),
                _ => ServdeskError::Network(message),
            };
        }
        if self.is_decode() {
            return ServdeskError::InvalidInput(format!("malformed response body: {self}"));
        }
        ServdeskError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_servdesk())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / JoinError → ServdeskError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(ServdeskError::Internal(format!("JSON serialization failed: {value}")))
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(ServdeskError::Internal(format!("blocking task failed: {value}")))
    }
}

/// Map any supported infrastructure error straight to the domain error.
pub(crate) fn to_domain<E: Into<InfraError>>(err: E) -> ServdeskError {
    err.into().into()
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
