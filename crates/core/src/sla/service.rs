//! SLA configuration service - server-side business logic

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use servdesk_domain::{Holiday, NewHoliday, Result, ServdeskError, SlaPolicy};
use tracing::{debug, info};

use super::ports::{HolidayStore, PolicyStore, SlaBackend};

/// Owns the policy and holiday stores and enforces validation at the
/// save boundary.
pub struct SlaConfigService {
    policies: Arc<dyn PolicyStore>,
    holidays: Arc<dyn HolidayStore>,
}

impl SlaConfigService {
    /// Create a new configuration service
    pub fn new(policies: Arc<dyn PolicyStore>, holidays: Arc<dyn HolidayStore>) -> Self {
        Self { policies, holidays }
    }

    /// The stored document, or an empty object if nothing was ever saved.
    pub async fn get_configuration(&self) -> Result<Value> {
        let stored = self.policies.load().await?;
        debug!(found = stored.is_some(), "Loaded SLA configuration");
        Ok(stored.unwrap_or_else(|| Value::Object(Default::default())))
    }

    /// Parse a request body into a complete policy, then validate and save it.
    pub async fn save_document(&self, document: Value) -> Result<SlaPolicy> {
        let policy: SlaPolicy = serde_json::from_value(document)
            .map_err(|e| ServdeskError::InvalidInput(format!("malformed policy document: {}", e)))?;
        self.save_configuration(policy).await
    }

    /// Validate and store the policy. Last write wins.
    pub async fn save_configuration(&self, policy: SlaPolicy) -> Result<SlaPolicy> {
        policy.validate()?;
        self.policies.save(&policy).await?;
        info!(
            priorities = policy.priorities().len(),
            custom_rules = policy.custom_rules().len(),
            "Saved SLA configuration"
        );
        Ok(policy)
    }

    /// Holidays ordered by date
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>> {
        self.holidays.list().await
    }

    /// Normalize, validate and insert a holiday
    pub async fn create_holiday(&self, request: NewHoliday) -> Result<Holiday> {
        let holiday = request.normalized()?.into_holiday();
        self.holidays.insert(&holiday).await?;
        info!(holiday_id = %holiday.id, date = %holiday.date, "Created holiday");
        Ok(holiday)
    }

    /// Delete a holiday, failing with `NotFound` for unknown ids
    pub async fn delete_holiday(&self, id: &str) -> Result<()> {
        if self.holidays.delete(id).await? {
            info!(holiday_id = %id, "Deleted holiday");
            Ok(())
        } else {
            Err(ServdeskError::NotFound(format!("holiday {}", id)))
        }
    }
}

#[async_trait]
impl SlaBackend for SlaConfigService {
    async fn fetch_configuration(&self) -> Result<Value> {
        self.get_configuration().await
    }

    async fn save_configuration(&self, policy: &SlaPolicy) -> Result<SlaPolicy> {
        SlaConfigService::save_configuration(self, policy.clone()).await
    }

    async fn list_holidays(&self) -> Result<Vec<Holiday>> {
        SlaConfigService::list_holidays(self).await
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> Result<Holiday> {
        SlaConfigService::create_holiday(self, holiday.clone()).await
    }

    async fn delete_holiday(&self, id: &str) -> Result<()> {
        SlaConfigService::delete_holiday(self, id).await
    }
}
