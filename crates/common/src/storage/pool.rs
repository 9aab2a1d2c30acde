//! r2d2-backed SQLite connection pool

use std::path::{Path, PathBuf};

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info, instrument, warn};

use super::cipher::{configure_cipher, verify_readable};
use super::config::SqlitePoolConfig;
use super::connection::PooledSqlite;
use super::error::{StorageError, StorageResult};
use super::pragmas::apply_connection_pragmas;

/// SQLite connection pool.
///
/// Every connection gets the optional cipher key followed by the configured
/// pragmas before it is handed out.
#[derive(Debug)]
pub struct SqlitePool {
    pool: Pool<SqliteConnectionManager>,
    config: SqlitePoolConfig,
    path: PathBuf,
}

impl SqlitePool {
    /// Open (or create) the database at `path` and build the pool.
    ///
    /// One connection is checked out eagerly so a wrong key or an unreadable
    /// file fails here instead of on the first query.
    #[instrument(skip(config), fields(db_path = ?path, pool_size = config.max_size))]
    pub fn open(path: &Path, config: SqlitePoolConfig) -> StorageResult<Self> {
        config.validate()?;

        let init_config = config.clone();
        let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
            if let Some(key) = init_config.encryption_key.as_deref() {
                configure_cipher(conn, key)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            }
            apply_connection_pragmas(conn, &init_config)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| {
                warn!(error = %e, "failed to create connection pool");
                StorageError::from_open_failure(format!("Failed to create pool: {}", e))
            })?;

        {
            let conn = pool
                .get()
                .map_err(|e| StorageError::from_open_failure(format!("Failed to connect: {}", e)))?;
            verify_readable(&conn)?;
            debug!(encrypted = config.encryption_key.is_some(), "database readable");
        }

        info!(max_connections = config.max_size, "sqlite pool initialised");

        Ok(Self { pool, config, path: path.to_path_buf() })
    }

    /// Check out a connection.
    pub fn get(&self) -> StorageResult<PooledSqlite> {
        self.pool.get().map(PooledSqlite::new).map_err(|e| {
            warn!(error = %e, "connection checkout failed");
            StorageError::Connection(e.to_string())
        })
    }

    pub fn max_size(&self) -> u32 {
        self.config.max_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_encrypted(&self) -> bool {
        self.config.encryption_key.is_some()
    }
}
