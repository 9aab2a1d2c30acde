//! Port interfaces for SLA policy storage
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use serde_json::Value;
use servdesk_domain::{Holiday, NewHoliday, Result, SlaPolicy};

/// Trait for persisting the singleton policy document
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Load the stored document as written, or `None` if nothing was saved.
    ///
    /// Older documents may be partial; callers merge them over defaults.
    async fn load(&self) -> Result<Option<Value>>;

    /// Replace the stored document
    async fn save(&self, policy: &SlaPolicy) -> Result<()>;
}

/// Trait for persisting holiday calendar entries
#[async_trait]
pub trait HolidayStore: Send + Sync {
    /// All holidays ordered by date
    async fn list(&self) -> Result<Vec<Holiday>>;

    /// Insert a new holiday
    async fn insert(&self, holiday: &Holiday) -> Result<()>;

    /// Delete a holiday by id. Returns `false` if no row matched.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// The REST surface the policy editor talks to.
///
/// Implemented over HTTP by the infra API client and in-process by
/// [`crate::SlaConfigService`].
#[async_trait]
pub trait SlaBackend: Send + Sync {
    /// Fetch the stored policy document, possibly partial
    async fn fetch_configuration(&self) -> Result<Value>;

    /// Save a complete policy document, returning what was stored
    async fn save_configuration(&self, policy: &SlaPolicy) -> Result<SlaPolicy>;

    /// List holidays ordered by date
    async fn list_holidays(&self) -> Result<Vec<Holiday>>;

    /// Create a holiday
    async fn create_holiday(&self, holiday: &NewHoliday) -> Result<Holiday>;

    /// Delete a holiday; unknown ids are an error
    async fn delete_holiday(&self, id: &str) -> Result<()>;
}
