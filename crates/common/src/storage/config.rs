//! SQLite pool configuration

use std::time::Duration;

use super::error::{StorageError, StorageResult};

/// Connection pool configuration.
///
/// `encryption_key` is applied with `PRAGMA key` on every new connection
/// when present. A database created with a key can only be reopened with
/// the same key.
#[derive(Clone)]
pub struct SqlitePoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// How long `get` waits for a free connection
    pub connection_timeout: Duration,

    /// Busy timeout for SQLite operations
    pub busy_timeout: Duration,

    /// Enable WAL journal mode
    pub enable_wal: bool,

    /// Enable foreign key constraints
    pub enable_foreign_keys: bool,

    /// Optional SQLCipher key
    pub encryption_key: Option<String>,
}

// Keep the key out of logs
impl std::fmt::Debug for SqlitePoolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlitePoolConfig")
            .field("max_size", &self.max_size)
            .field("connection_timeout", &self.connection_timeout)
            .field("busy_timeout", &self.busy_timeout)
            .field("enable_wal", &self.enable_wal)
            .field("enable_foreign_keys", &self.enable_foreign_keys)
            .field("encryption_key", &self.encryption_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            max_size: 8,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(5000),
            enable_wal: true,
            enable_foreign_keys: true,
            encryption_key: None,
        }
    }
}

impl SqlitePoolConfig {
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_encryption_key(mut self, key: Option<String>) -> Self {
        self.encryption_key = key.filter(|k| !k.is_empty());
        self
    }

    /// Reject settings r2d2 or SQLite cannot honour.
    pub fn validate(&self) -> StorageResult<()> {
        if self.max_size == 0 {
            return Err(StorageError::InvalidConfig("max_size must be at least 1".into()));
        }
        if self.connection_timeout.is_zero() {
            return Err(StorageError::InvalidConfig("connection_timeout must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SqlitePoolConfig::default();
        assert_eq!(config.max_size, 8);
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.enable_wal);
        assert!(config.enable_foreign_keys);
        assert!(config.encryption_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_key_means_plaintext() {
        let config = SqlitePoolConfig::default().with_encryption_key(Some(String::new()));
        assert!(config.encryption_key.is_none());
    }

    #[test]
    fn debug_redacts_key() {
        let config = SqlitePoolConfig::default().with_encryption_key(Some("hunter2".into()));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let config = SqlitePoolConfig::default().with_max_size(0);
        assert!(matches!(config.validate(), Err(StorageError::InvalidConfig(_))));
    }
}
