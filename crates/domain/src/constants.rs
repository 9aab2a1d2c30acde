//! Domain constants
//!
//! Policy defaults and the condition/action vocabulary offered for custom
//! rules.

// Business hours defaults
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "17:00";
pub const DEFAULT_WORKING_DAYS: [u8; 5] = [1, 2, 3, 4, 5];

// Escalation defaults (percent of the SLA target elapsed)
pub const DEFAULT_LEVEL1_PERCENT: u8 = 50;
pub const DEFAULT_LEVEL2_PERCENT: u8 = 75;
pub const BREACH_PERCENT: u8 = 100;

// Built-in priority names, most urgent first
pub const PRIORITY_CRITICAL: &str = "critical";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";
pub const BUILTIN_PRIORITIES: [&str; 4] =
    [PRIORITY_CRITICAL, PRIORITY_HIGH, PRIORITY_MEDIUM, PRIORITY_LOW];

// Custom rule vocabulary. Rules store these as plain strings; the
// enforcement engine interprets them.
pub const RULE_CONDITIONS: [&str; 4] = ["vip_customer", "after_hours", "keyword_match", "category"];
pub const RULE_ACTIONS: [&str; 4] =
    ["escalate_priority", "notify_manager", "assign_team", "extend_deadline"];

pub const MAX_RULE_NAME_LENGTH: usize = 120;
pub const MAX_HOLIDAY_NAME_LENGTH: usize = 120;
