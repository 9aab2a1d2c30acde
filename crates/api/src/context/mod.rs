//! Application context - dependency injection container

use std::fs;
use std::path::Path;
use std::sync::Arc;

use servdesk_core::SlaConfigService;
use servdesk_domain::{Config, Result, ServdeskError};
use servdesk_infra::{DbManager, SqliteHolidayRepository, SqlitePolicyRepository};
use tokio::task;
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub sla: Arc<SlaConfigService>,
}

impl AppContext {
    /// Open the configured database, apply migrations and wire services.
    pub fn new(config: Config) -> Result<Self> {
        ensure_parent_dir(Path::new(&config.database.path))?;

        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;
        info!(
            path = %db.path().display(),
            encrypted = config.database.encryption_key.is_some(),
            "Database ready"
        );

        Ok(Self::with_database(config, db))
    }

    /// Wire services over an already-migrated database.
    pub fn with_database(config: Config, db: Arc<DbManager>) -> Self {
        let sla = Arc::new(SlaConfigService::new(
            Arc::new(SqlitePolicyRepository::new(Arc::clone(&db))),
            Arc::new(SqliteHolidayRepository::new(Arc::clone(&db))),
        ));
        Self { config, db, sla }
    }

    /// Check the database off the async runtime.
    pub async fn health_check(&self) -> Result<()> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || db.health_check())
            .await
            .map_err(|e| ServdeskError::Internal(format!("health check panicked: {}", e)))?
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| {
                ServdeskError::Config(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}
