//! Per-category SLA exceptions.
//!
//! Category overrides are a typed value only. Nothing persists them and they
//! are never part of the policy document.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use servdesk_common::validation::{ValidationResult, Validator};

use super::priority::PriorityName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverride {
    pub id: String,
    pub category: String,
    pub priority: PriorityName,
    pub response_minutes: NonZeroU32,
    pub resolution_hours: NonZeroU32,
    pub enabled: bool,
}

impl CategoryOverride {
    pub fn new(
        category: impl Into<String>,
        priority: PriorityName,
        response_minutes: NonZeroU32,
        resolution_hours: NonZeroU32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category: category.into(),
            priority,
            response_minutes,
            resolution_hours,
            enabled: true,
        }
    }

    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self { enabled, ..self.clone() }
    }

    /// Same consistency rules as a priority target.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        validator.validate_not_empty("category", &self.category);
        validator.validate_not_empty("priority", self.priority.as_str());
        let resolution_minutes = u64::from(self.resolution_hours.get()) * 60;
        if self.enabled && u64::from(self.response_minutes.get()) > resolution_minutes {
            validator.add_error(
                "responseMinutes",
                format!("must not exceed the resolution target ({} minutes)", resolution_minutes),
            );
        }
        validator.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(v: u32) -> NonZeroU32 {
        NonZeroU32::new(v).unwrap()
    }

    #[test]
    fn valid_override() {
        let o = CategoryOverride::new("Hardware", "high".into(), nz(30), nz(8));
        assert!(o.enabled);
        assert!(o.validate().is_ok());
    }

    #[test]
    fn blank_category_and_inverted_targets_are_reported() {
        let o = CategoryOverride::new("", "high".into(), nz(600), nz(8));
        let err = o.validate().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["category", "responseMinutes"]);

        assert_eq!(o.with_enabled(false).validate().unwrap_err().error_count(), 1);
    }
}
