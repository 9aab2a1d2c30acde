//! Escalation tiers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use servdesk_common::validation::Validator;

use super::scalars::Percent;
use crate::constants::{BREACH_PERCENT, DEFAULT_LEVEL1_PERCENT, DEFAULT_LEVEL2_PERCENT};
use crate::impl_domain_status_conversions;

/// Role notified when a tier triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyRole {
    Assignee,
    Manager,
    Admin,
}

impl_domain_status_conversions!(NotifyRole {
    Assignee => "assignee",
    Manager => "manager",
    Admin => "admin",
});

/// One escalation threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationTier {
    pub trigger_percent: Percent,
    #[serde(default)]
    pub notify: BTreeSet<NotifyRole>,
}

impl EscalationTier {
    pub fn new(trigger_percent: Percent, notify: impl IntoIterator<Item = NotifyRole>) -> Self {
        Self { trigger_percent, notify: notify.into_iter().collect() }
    }

    pub fn with_trigger_percent(&self, trigger_percent: Percent) -> Self {
        Self { trigger_percent, ..self.clone() }
    }

    /// Add or remove a role from the notify set.
    pub fn with_role(&self, role: NotifyRole, notify: bool) -> Self {
        let mut roles = self.notify.clone();
        if notify {
            roles.insert(role);
        } else {
            roles.remove(&role);
        }
        Self { notify: roles, ..self.clone() }
    }
}

/// The breach tier, which can also hand the ticket to someone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachTier {
    pub trigger_percent: Percent,
    #[serde(default)]
    pub notify: BTreeSet<NotifyRole>,
    #[serde(default)]
    pub auto_reassign: bool,
}

impl BreachTier {
    pub fn with_role(&self, role: NotifyRole, notify: bool) -> Self {
        let mut roles = self.notify.clone();
        if notify {
            roles.insert(role);
        } else {
            roles.remove(&role);
        }
        Self { notify: roles, ..self.clone() }
    }

    pub fn with_auto_reassign(&self, auto_reassign: bool) -> Self {
        Self { auto_reassign, ..self.clone() }
    }
}

/// Three ordered tiers: `level1 < level2 < breach (100)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Escalation {
    pub level1: EscalationTier,
    pub level2: EscalationTier,
    pub breach: BreachTier,
}

/// Names a tier for editor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierLevel {
    Level1,
    Level2,
    Breach,
}

impl_domain_status_conversions!(TierLevel {
    Level1 => "level1",
    Level2 => "level2",
    Breach => "breach",
});

impl Default for Escalation {
    fn default() -> Self {
        let pct = |v: u8| Percent::new(v).unwrap_or(Percent::MAX);
        Self {
            level1: EscalationTier::new(pct(DEFAULT_LEVEL1_PERCENT), [NotifyRole::Assignee]),
            level2: EscalationTier::new(
                pct(DEFAULT_LEVEL2_PERCENT),
                [NotifyRole::Assignee, NotifyRole::Manager],
            ),
            breach: BreachTier {
                trigger_percent: pct(BREACH_PERCENT),
                notify: [NotifyRole::Assignee, NotifyRole::Manager, NotifyRole::Admin]
                    .into_iter()
                    .collect(),
                auto_reassign: false,
            },
        }
    }
}

impl Escalation {
    pub fn with_level1(&self, level1: EscalationTier) -> Self {
        Self { level1, ..self.clone() }
    }

    pub fn with_level2(&self, level2: EscalationTier) -> Self {
        Self { level2, ..self.clone() }
    }

    pub fn with_breach(&self, breach: BreachTier) -> Self {
        Self { breach, ..self.clone() }
    }

    /// Toggle a role on any tier.
    pub fn with_role(&self, tier: TierLevel, role: NotifyRole, notify: bool) -> Self {
        match tier {
            TierLevel::Level1 => self.with_level1(self.level1.with_role(role, notify)),
            TierLevel::Level2 => self.with_level2(self.level2.with_role(role, notify)),
            TierLevel::Breach => self.with_breach(self.breach.with_role(role, notify)),
        }
    }

    /// Trigger percentages in tier order.
    pub fn triggers(&self) -> [Percent; 3] {
        [self.level1.trigger_percent, self.level2.trigger_percent, self.breach.trigger_percent]
    }

    pub(crate) fn validate_into(&self, validator: &mut Validator) {
        let level1 = self.level1.trigger_percent.get();
        let level2 = self.level2.trigger_percent.get();
        let breach = self.breach.trigger_percent.get();

        validator.validate_nested("level1", |v| {
            v.validate_less_than("triggerPercent", level1, level2, "level2.triggerPercent");
        });
        validator.validate_nested("level2", |v| {
            v.validate_less_than("triggerPercent", level2, BREACH_PERCENT, "breach");
        });
        if breach != BREACH_PERCENT {
            validator.validate_nested("breach", |v| {
                v.add_error("triggerPercent", format!("must equal {}", BREACH_PERCENT));
            });
        }
    }
}
