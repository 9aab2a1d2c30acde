#![allow(dead_code)]

use std::sync::Arc;

use servdesk_core::SlaConfigService;
use servdesk_infra::database::{DbManager, SqliteHolidayRepository, SqlitePolicyRepository};
use tempfile::TempDir;

pub const TEST_DB_KEY: &str = "test_key_64_chars_long_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    temp_dir: TempDir,
}

impl TestDatabase {
    /// Encrypted database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager = DbManager::new(temp_dir.path().join("sla.db"), 4, Some(TEST_DB_KEY))
            .expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), temp_dir }
    }

    /// Reopen the same file with a fresh pool.
    pub fn reopen(&self) -> Arc<DbManager> {
        let manager = DbManager::new(self.temp_dir.path().join("sla.db"), 2, Some(TEST_DB_KEY))
            .expect("db manager should reopen");
        manager.run_migrations().expect("migrations are idempotent");
        Arc::new(manager)
    }

    pub fn service(&self) -> SlaConfigService {
        service_for(Arc::clone(&self.manager))
    }

    /// Execute a batch of SQL statements against the database.
    pub fn execute_batch(&self, sql: &str) {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }
}

pub fn service_for(db: Arc<DbManager>) -> SlaConfigService {
    SlaConfigService::new(
        Arc::new(SqlitePolicyRepository::new(Arc::clone(&db))),
        Arc::new(SqliteHolidayRepository::new(db)),
    )
}
