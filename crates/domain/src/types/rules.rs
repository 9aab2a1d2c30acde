//! Custom automation rules and notification toggles.

use serde::{Deserialize, Serialize};
use servdesk_common::validation::{StringValidator, ValidationError, Validator};

use crate::constants::{MAX_RULE_NAME_LENGTH, RULE_ACTIONS, RULE_CONDITIONS};
use crate::impl_domain_status_conversions;

/// Named condition -> action pair. The policy stores rules verbatim; the
/// enforcement engine interprets `condition` and `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    pub name: String,
    pub condition: String,
    pub action: String,
}

impl CustomRule {
    /// Build a rule, trimming the name. An empty name is rejected.
    pub fn new(
        name: impl AsRef<str>,
        condition: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let rule = Self {
            name: name.as_ref().trim().to_string(),
            condition: condition.into(),
            action: action.into(),
        };
        let mut validator = Validator::new();
        rule.validate_into(&mut validator);
        validator.finalize()?;
        Ok(rule)
    }

    /// Whether the condition is one of the built-in conditions.
    pub fn has_known_condition(&self) -> bool {
        RULE_CONDITIONS.contains(&self.condition.as_str())
    }

    /// Whether the action is one of the built-in actions.
    pub fn has_known_action(&self) -> bool {
        RULE_ACTIONS.contains(&self.action.as_str())
    }

    pub(crate) fn validate_into(&self, validator: &mut Validator) {
        validator.validate_field(
            "name",
            self.name.as_str(),
            &StringValidator::new().not_empty().max_length(MAX_RULE_NAME_LENGTH),
        );
        validator.validate_not_empty("condition", &self.condition);
        validator.validate_not_empty("action", &self.action);
    }
}

/// Boolean notification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    pub response_warning: bool,
    pub resolution_warning: bool,
    pub breach_alert: bool,
    pub daily_report: bool,
}

/// Addresses one notification switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    ResponseWarning,
    ResolutionWarning,
    BreachAlert,
    DailyReport,
}

impl_domain_status_conversions!(NotificationKind {
    ResponseWarning => "response_warning",
    ResolutionWarning => "resolution_warning",
    BreachAlert => "breach_alert",
    DailyReport => "daily_report",
});

impl Default for Notifications {
    fn default() -> Self {
        Self {
            response_warning: true,
            resolution_warning: true,
            breach_alert: true,
            daily_report: false,
        }
    }
}

impl Notifications {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::ResponseWarning => self.response_warning,
            NotificationKind::ResolutionWarning => self.resolution_warning,
            NotificationKind::BreachAlert => self.breach_alert,
            NotificationKind::DailyReport => self.daily_report,
        }
    }

    pub fn with(&self, kind: NotificationKind, enabled: bool) -> Self {
        let mut next = *self;
        match kind {
            NotificationKind::ResponseWarning => next.response_warning = enabled,
            NotificationKind::ResolutionWarning => next.resolution_warning = enabled,
            NotificationKind::BreachAlert => next.breach_alert = enabled,
            NotificationKind::DailyReport => next.daily_report = enabled,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_rule_names_are_rejected() {
        let err = CustomRule::new("   ", "vip_customer", "notify_manager").unwrap_err();
        assert_eq!(err.errors[0].field, "name");
        assert_eq!(err.errors[0].message, "cannot be empty");
    }

    #[test]
    fn names_are_trimmed_and_vocabulary_is_checked() {
        let rule = CustomRule::new("  VIP fast lane ", "vip_customer", "escalate_priority").unwrap();
        assert_eq!(rule.name, "VIP fast lane");
        assert!(rule.has_known_condition());
        assert!(rule.has_known_action());

        let custom = CustomRule::new("Odd", "moon_phase", "howl").unwrap();
        assert!(!custom.has_known_condition());
    }

    #[test]
    fn notification_toggles_touch_one_flag() {
        let defaults = Notifications::default();
        assert!(!defaults.get(NotificationKind::DailyReport));

        let updated = defaults.with(NotificationKind::DailyReport, true);
        assert!(updated.daily_report);
        assert_eq!(updated.with(NotificationKind::DailyReport, false), defaults);
    }

    #[test]
    fn notification_json_uses_camel_case() {
        let json = serde_json::to_value(Notifications::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "responseWarning": true,
                "resolutionWarning": true,
                "breachAlert": true,
                "dailyReport": false
            })
        );
    }
}
