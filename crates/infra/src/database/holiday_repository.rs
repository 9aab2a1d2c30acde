//! SQLite-backed holiday calendar.
//!
//! Dates are stored as `YYYY-MM-DD` text so lexical order is calendar order.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use servdesk_core::HolidayStore;
use servdesk_domain::{Holiday, Result as DomainResult};
use tokio::task;

use super::manager::DbManager;
use crate::errors::conversions::to_domain;

/// SQLite-backed [`HolidayStore`].
pub struct SqliteHolidayRepository {
    db: Arc<DbManager>,
}

impl SqliteHolidayRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HolidayStore for SqliteHolidayRepository {
    async fn list(&self) -> DomainResult<Vec<Holiday>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Holiday>> {
            let conn = db.get_connection()?;
            query_holidays(&conn)
        })
        .await
        .map_err(to_domain)?
    }

    async fn insert(&self, holiday: &Holiday) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let holiday = holiday.clone();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO sla_holidays (id, holiday_date, name, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    holiday.id,
                    holiday.date.format(DATE_FORMAT).to_string(),
                    holiday.name,
                    chrono::Utc::now().timestamp()
                ],
            )
            .map_err(to_domain)?;
            Ok(())
        })
        .await
        .map_err(to_domain)?
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let affected = conn
                .execute("DELETE FROM sla_holidays WHERE id = ?1", params![id])
                .map_err(to_domain)?;
            Ok(affected > 0)
        })
        .await
        .map_err(to_domain)?
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

const DATE_FORMAT: &str = "%Y-%m-%d";

fn query_holidays(conn: &Connection) -> DomainResult<Vec<Holiday>> {
    let mut stmt = conn
        .prepare("SELECT id, holiday_date, name FROM sla_holidays ORDER BY holiday_date, name")
        .map_err(to_domain)?;
    let rows = stmt.query_map([], map_holiday_row).map_err(to_domain)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(to_domain)
}

fn map_holiday_row(row: &Row<'_>) -> rusqlite::Result<Holiday> {
    let raw_date: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
    Ok(Holiday { id: row.get(0)?, date, name: row.get(2)? })
}
