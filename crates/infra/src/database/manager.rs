//! Database connection manager backed by the shared SQLite pool.

use std::path::Path;

use rusqlite::params;
use servdesk_common::storage::{PooledSqlite, SqlitePool, SqlitePoolConfig};
use servdesk_domain::{DatabaseConfig, Result};
use tracing::info;

use crate::errors::conversions::to_domain;

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps a [`SqlitePool`].
#[derive(Debug)]
pub struct DbManager {
    pool: SqlitePool,
}

impl DbManager {
    /// Open the database with the given pool size and optional SQLCipher key.
    pub fn new<P: AsRef<Path>>(
        db_path: P,
        pool_size: u32,
        encryption_key: Option<&str>,
    ) -> Result<Self> {
        let config = SqlitePoolConfig::default()
            .with_max_size(pool_size.max(1))
            .with_encryption_key(encryption_key.map(str::to_owned));

        let pool = SqlitePool::open(db_path.as_ref(), config).map_err(to_domain)?;

        info!(
            db_path = %pool.path().display(),
            max_connections = pool.max_size(),
            encrypted = pool.is_encrypted(),
            "database manager ready"
        );

        Ok(Self { pool })
    }

    /// Open the database described by the service configuration.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::new(&config.path, config.pool_size, config.encryption_key.as_deref())
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<PooledSqlite> {
        self.pool.get().map_err(to_domain)
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(SCHEMA_SQL).map_err(to_domain)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, CAST(strftime('%s','now') AS INTEGER))",
            params![SCHEMA_VERSION],
        )
        .map_err(to_domain)?;
        Ok(())
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        self.pool.path()
    }

    /// Verify the database is reachable and answering queries.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0)).map_err(to_domain)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const TEST_KEY: &str = "servdesk-test-key";

    #[test]
    fn migrations_record_schema_version() {
        let temp_dir = TempDir::new().unwrap();
        let manager = DbManager::new(temp_dir.path().join("test.db"), 2, None).unwrap();
        manager.run_migrations().unwrap();
        manager.run_migrations().unwrap();

        let conn = manager.get_connection().unwrap();
        let version: i32 =
            conn.query_row("SELECT version FROM schema_version", [], |row| row.get(0)).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn health_check_succeeds_for_encrypted_database() {
        let temp_dir = TempDir::new().unwrap();
        let manager = DbManager::new(temp_dir.path().join("enc.db"), 2, Some(TEST_KEY)).unwrap();
        manager.run_migrations().unwrap();
        manager.health_check().unwrap();
    }

    #[test]
    fn reopening_with_wrong_key_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("enc.db");
        DbManager::new(&path, 1, Some(TEST_KEY)).unwrap().run_migrations().unwrap();

        assert!(DbManager::new(&path, 1, Some("another-key")).is_err());
    }
}
