//! SQLite-backed policy store.
//!
//! The policy is a single JSON document in a one-row table. Documents are
//! stored exactly as written so older partial documents load unchanged.
//! All database operations run in `spawn_blocking`.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;
use servdesk_core::PolicyStore;
use servdesk_domain::{Result as DomainResult, SlaPolicy};
use tokio::task;
use tracing::debug;

use super::manager::DbManager;
use crate::errors::conversions::to_domain;

/// SQLite-backed [`PolicyStore`].
pub struct SqlitePolicyRepository {
    db: Arc<DbManager>,
}

impl SqlitePolicyRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PolicyStore for SqlitePolicyRepository {
    async fn load(&self) -> DomainResult<Option<Value>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Value>> {
            let conn = db.get_connection()?;
            let raw: Option<String> = conn
                .query_row("SELECT document FROM sla_policy WHERE id = 1", [], |row| row.get(0))
                .optional()
                .map_err(to_domain)?;
            raw.map(|text| serde_json::from_str(&text).map_err(to_domain)).transpose()
        })
        .await
        .map_err(to_domain)?
    }

    async fn save(&self, policy: &SlaPolicy) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let document = serde_json::to_string(policy).map_err(to_domain)?;

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let now = chrono::Utc::now().timestamp();
            conn.execute(
                "INSERT INTO sla_policy (id, document, updated_at)
                 VALUES (1, ?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET
                    document = excluded.document,
                    updated_at = excluded.updated_at",
                params![document, now],
            )
            .map_err(to_domain)?;
            debug!(updated_at = now, "policy document written");
            Ok(())
        })
        .await
        .map_err(to_domain)?
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn setup() -> (TempDir, Arc<DbManager>) {
        let dir = TempDir::new().unwrap();
        let db = DbManager::new(dir.path().join("policy.db"), 2, None).unwrap();
        db.run_migrations().unwrap();
        (dir, Arc::new(db))
    }

    #[tokio::test]
    async fn empty_database_has_no_document() {
        let (_dir, db) = setup();
        let repo = SqlitePolicyRepository::new(db);
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_the_single_row() {
        let (_dir, db) = setup();
        let repo = SqlitePolicyRepository::new(Arc::clone(&db));

        let first = SlaPolicy::default();
        let second = first.without_priority("low");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let stored = repo.load().await.unwrap().unwrap();
        assert!(stored["priorities"].get("low").is_none());

        let rows: i64 = db
            .get_connection()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM sla_policy", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn partial_documents_load_as_written() {
        let (_dir, db) = setup();
        db.get_connection()
            .unwrap()
            .execute(
                "INSERT INTO sla_policy (id, document, updated_at) VALUES (1, ?1, 0)",
                params![r#"{"notifications":{"dailyReport":true}}"#],
            )
            .unwrap();

        let repo = SqlitePolicyRepository::new(db);
        assert_eq!(repo.load().await.unwrap(), Some(json!({ "notifications": { "dailyReport": true } })));
    }
}
