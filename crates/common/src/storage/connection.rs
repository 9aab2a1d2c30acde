//! Pooled connection wrapper

use std::ops::{Deref, DerefMut};

use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

/// A connection checked out of [`SqlitePool`](super::SqlitePool).
///
/// Derefs to `rusqlite::Connection` and returns to the pool when dropped.
pub struct PooledSqlite {
    inner: PooledConnection<SqliteConnectionManager>,
}

impl PooledSqlite {
    pub(crate) fn new(inner: PooledConnection<SqliteConnectionManager>) -> Self {
        Self { inner }
    }
}

impl Deref for PooledSqlite {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PooledSqlite {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
