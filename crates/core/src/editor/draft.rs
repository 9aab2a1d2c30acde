//! Dialog form state for rules and holidays.

use chrono::NaiveDate;
use servdesk_common::validation::{ValidationError, Validator};
use servdesk_domain::constants::{RULE_ACTIONS, RULE_CONDITIONS};
use servdesk_domain::{CustomRule, NewHoliday};

/// The "add custom rule" form.
///
/// Condition and action start at the first entry of each built-in list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDraft {
    pub name: String,
    pub condition: String,
    pub action: String,
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            condition: RULE_CONDITIONS[0].to_string(),
            action: RULE_ACTIONS[0].to_string(),
        }
    }
}

impl RuleDraft {
    pub fn new(
        name: impl Into<String>,
        condition: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), condition: condition.into(), action: action.into() }
    }

    /// Build the rule. A blank name is rejected.
    pub fn to_rule(&self) -> Result<CustomRule, ValidationError> {
        CustomRule::new(&self.name, self.condition.clone(), self.action.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The "add holiday" form. The date stays empty until picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayDraft {
    pub name: String,
    pub date: Option<NaiveDate>,
}

impl HolidayDraft {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), date: Some(date) }
    }

    /// Build the create request. Both a name and a date are required.
    pub fn to_new_holiday(&self) -> Result<NewHoliday, ValidationError> {
        let Some(date) = self.date else {
            let mut validator = Validator::new();
            validator.validate_not_empty("name", &self.name);
            validator.add_error("date", "is required");
            return Err(validator.finalize().err().unwrap_or_default());
        };
        NewHoliday::new(self.name.clone(), date).normalized()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
