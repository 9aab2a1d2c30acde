//! Per-priority response and resolution targets.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use servdesk_common::validation::{StringValidator, Validator};

use super::scalars::EscalationPercent;
use crate::constants::BUILTIN_PRIORITIES;

/// Priority key in the policy's `priorities` map.
///
/// Built-in names sort by urgency (critical, high, medium, low); any other
/// name sorts after them alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityName(String);

impl PriorityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position among the built-in priorities, if this is one of them.
    pub fn builtin_rank(&self) -> Option<usize> {
        BUILTIN_PRIORITIES.iter().position(|p| *p == self.0)
    }
}

impl Ord for PriorityName {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.builtin_rank(), other.builtin_rank()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for PriorityName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PriorityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PriorityName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Response/resolution target for one priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityTarget {
    pub enabled: bool,
    pub response_minutes: NonZeroU32,
    pub resolution_hours: NonZeroU32,
    pub escalate_at_percent: EscalationPercent,
    #[serde(default)]
    pub description: String,
}

impl PriorityTarget {
    pub fn new(
        response_minutes: NonZeroU32,
        resolution_hours: NonZeroU32,
        escalate_at_percent: EscalationPercent,
        description: impl Into<String>,
    ) -> Self {
        Self {
            enabled: true,
            response_minutes,
            resolution_hours,
            escalate_at_percent,
            description: description.into(),
        }
    }

    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self { enabled, ..self.clone() }
    }

    pub fn with_response_minutes(&self, response_minutes: NonZeroU32) -> Self {
        Self { response_minutes, ..self.clone() }
    }

    pub fn with_resolution_hours(&self, resolution_hours: NonZeroU32) -> Self {
        Self { resolution_hours, ..self.clone() }
    }

    pub fn with_escalate_at_percent(&self, escalate_at_percent: EscalationPercent) -> Self {
        Self { escalate_at_percent, ..self.clone() }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self { description: description.into(), ..self.clone() }
    }

    /// Base for priorities added beyond the built-in four, matching the
    /// least urgent built-in targets.
    pub fn template() -> Self {
        Self::new(
            NonZeroU32::new(480).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(72).unwrap_or(NonZeroU32::MIN),
            EscalationPercent::new(70).unwrap_or(EscalationPercent::MAX),
            "",
        )
    }

    /// Resolution target expressed in minutes.
    pub fn resolution_minutes(&self) -> u64 {
        u64::from(self.resolution_hours.get()) * 60
    }

    pub(crate) fn validate_into(&self, validator: &mut Validator) {
        // Disabled priorities keep whatever was typed; they are not enforced.
        if self.enabled && u64::from(self.response_minutes.get()) > self.resolution_minutes() {
            validator.add_error(
                "responseMinutes",
                format!(
                    "must not exceed the resolution target ({} minutes)",
                    self.resolution_minutes()
                ),
            );
        }
    }
}

pub(crate) fn validate_priority_name(validator: &mut Validator, name: &PriorityName) {
    validator.validate_field("", name.as_str(), &StringValidator::new().not_empty().identifier());
}
