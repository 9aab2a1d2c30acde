//! The SLA policy document.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use servdesk_common::validation::{ValidationResult, Validator};

use super::business_hours::{BusinessHours, HoursMode};
use super::escalation::Escalation;
use super::priority::{validate_priority_name, PriorityName, PriorityTarget};
use super::rules::{CustomRule, Notifications};
use super::scalars::EscalationPercent;
use crate::constants::{PRIORITY_CRITICAL, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
use crate::errors::{Result, ServdeskError};
use crate::merge::merge_over;

/// The singleton policy document.
///
/// An immutable value: every `with_*` method returns a new policy and leaves
/// the receiver untouched. Staged values may be inconsistent (for example
/// `level1 >= level2`); [`SlaPolicy::validate`] is the gate before a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaPolicy {
    business_hours: BusinessHours,
    priorities: BTreeMap<PriorityName, PriorityTarget>,
    escalation: Escalation,
    #[serde(default)]
    custom_rules: Vec<CustomRule>,
    notifications: Notifications,
}

impl Default for SlaPolicy {
    fn default() -> Self {
        let target = |response: u32, resolution: u32, escalate: u8, description: &str| {
            PriorityTarget::new(
                NonZeroU32::new(response).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(resolution).unwrap_or(NonZeroU32::MIN),
                EscalationPercent::new(escalate).unwrap_or(EscalationPercent::MAX),
                description,
            )
        };

        let priorities = [
            (PRIORITY_CRITICAL, target(15, 4, 80, "System down or business-critical outage")),
            (PRIORITY_HIGH, target(60, 8, 80, "Major functionality impaired")),
            (PRIORITY_MEDIUM, target(240, 24, 75, "Partial loss of non-critical functionality")),
            (PRIORITY_LOW, target(480, 72, 70, "General questions and minor issues")),
        ]
        .into_iter()
        .map(|(name, target)| (PriorityName::from(name), target))
        .collect();

        Self {
            business_hours: BusinessHours::default(),
            priorities,
            escalation: Escalation::default(),
            custom_rules: Vec::new(),
            notifications: Notifications::default(),
        }
    }
}

impl SlaPolicy {
    /// Build a policy from a possibly partial document, filling every
    /// absent field from [`SlaPolicy::default`].
    pub fn from_partial(document: &serde_json::Value) -> Result<Self> {
        let mut defaults = serde_json::to_value(Self::default())
            .map_err(|e| ServdeskError::Internal(format!("serialize defaults: {}", e)))?;
        seed_custom_priorities(&mut defaults, document)?;
        let merged = merge_over(defaults, document);
        serde_json::from_value(merged)
            .map_err(|e| ServdeskError::InvalidInput(format!("malformed policy document: {}", e)))
    }

    pub fn business_hours(&self) -> &BusinessHours {
        &self.business_hours
    }

    pub fn priorities(&self) -> &BTreeMap<PriorityName, PriorityTarget> {
        &self.priorities
    }

    pub fn priority(&self, name: &str) -> Option<&PriorityTarget> {
        self.priorities.get(&PriorityName::from(name))
    }

    pub fn escalation(&self) -> &Escalation {
        &self.escalation
    }

    pub fn custom_rules(&self) -> &[CustomRule] {
        &self.custom_rules
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn with_business_hours(&self, business_hours: BusinessHours) -> Self {
        Self { business_hours, ..self.clone() }
    }

    /// Insert or replace the target for `name`.
    pub fn with_priority(&self, name: impl Into<PriorityName>, target: PriorityTarget) -> Self {
        let mut priorities = self.priorities.clone();
        priorities.insert(name.into(), target);
        Self { priorities, ..self.clone() }
    }

    /// Apply `edit` to an existing priority. Unknown names leave the policy
    /// unchanged.
    pub fn with_priority_edit<F>(&self, name: &str, edit: F) -> Self
    where
        F: FnOnce(&PriorityTarget) -> PriorityTarget,
    {
        match self.priority(name) {
            Some(current) => self.with_priority(PriorityName::from(name), edit(current)),
            None => self.clone(),
        }
    }

    pub fn without_priority(&self, name: &str) -> Self {
        let mut priorities = self.priorities.clone();
        priorities.remove(&PriorityName::from(name));
        Self { priorities, ..self.clone() }
    }

    pub fn with_escalation(&self, escalation: Escalation) -> Self {
        Self { escalation, ..self.clone() }
    }

    /// Append a rule at the end of the list.
    pub fn with_custom_rule(&self, rule: CustomRule) -> Self {
        let mut custom_rules = self.custom_rules.clone();
        custom_rules.push(rule);
        Self { custom_rules, ..self.clone() }
    }

    /// Remove the rule at `index`; out-of-range indexes are a no-op.
    pub fn without_custom_rule(&self, index: usize) -> Self {
        let mut custom_rules = self.custom_rules.clone();
        if index < custom_rules.len() {
            custom_rules.remove(index);
        }
        Self { custom_rules, ..self.clone() }
    }

    pub fn with_notifications(&self, notifications: Notifications) -> Self {
        Self { notifications, ..self.clone() }
    }

    /// Check every cross-field invariant, reporting all violations with
    /// camelCase paths matching the JSON document.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();

        validator.validate_nested("businessHours", |v| self.business_hours.validate_into(v));

        validator.validate_nested("priorities", |v| {
            for (name, target) in &self.priorities {
                v.validate_nested(name.as_str(), |v| {
                    validate_priority_name(v, name);
                    target.validate_into(v);
                });
            }
        });

        validator.validate_nested("escalation", |v| self.escalation.validate_into(v));

        for (index, rule) in self.custom_rules.iter().enumerate() {
            validator.validate_nested(&format!("customRules[{}]", index), |v| rule.validate_into(v));
        }

        validator.finalize()
    }

    /// Read-only digest for the overview section.
    pub fn summary(&self) -> PolicySummary {
        let hours = &self.business_hours;
        PolicySummary {
            mode: hours.mode,
            window: match hours.mode {
                HoursMode::AlwaysOn => None,
                HoursMode::BusinessHours => {
                    Some(format!("{}-{}", hours.start_time, hours.end_time))
                }
            },
            working_days: hours.working_days.iter().map(|d| d.number()).collect(),
            enabled_priorities: self
                .priorities
                .iter()
                .filter(|(_, target)| target.enabled)
                .map(|(name, target)| PrioritySummary {
                    name: name.to_string(),
                    response_minutes: target.response_minutes.get(),
                    resolution_hours: target.resolution_hours.get(),
                })
                .collect(),
            escalation_triggers: self.escalation.triggers().map(|p| p.get()),
            custom_rule_count: self.custom_rules.len(),
            active_notifications: [
                ("responseWarning", self.notifications.response_warning),
                ("resolutionWarning", self.notifications.resolution_warning),
                ("breachAlert", self.notifications.breach_alert),
                ("dailyReport", self.notifications.daily_report),
            ]
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name.to_string())
            .collect(),
        }
    }
}

/// Give every priority the document adds a [`PriorityTarget::template`] to
/// merge over, so a partial custom entry is filled like a built-in one.
fn seed_custom_priorities(
    defaults: &mut serde_json::Value,
    document: &serde_json::Value,
) -> Result<()> {
    let Some(overlay) = document.get("priorities").and_then(serde_json::Value::as_object) else {
        return Ok(());
    };
    let Some(base) = defaults.get_mut("priorities").and_then(serde_json::Value::as_object_mut) else {
        return Ok(());
    };

    let template = serde_json::to_value(PriorityTarget::template())
        .map_err(|e| ServdeskError::Internal(format!("serialize priority template: {}", e)))?;
    for (name, entry) in overlay {
        if !entry.is_null() && !base.contains_key(name) {
            base.insert(name.clone(), template.clone());
        }
    }
    Ok(())
}

/// Digest of a policy for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub mode: HoursMode,
    /// `HH:MM-HH:MM`, absent in `24/7` mode.
    pub window: Option<String>,
    pub working_days: Vec<u8>,
    pub enabled_priorities: Vec<PrioritySummary>,
    pub escalation_triggers: [u8; 3],
    pub custom_rule_count: usize,
    pub active_notifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritySummary {
    pub name: String,
    pub response_minutes: u32,
    pub resolution_hours: u32,
}
