//! Domain types

pub mod business_hours;
pub mod category_override;
pub mod escalation;
pub mod holiday;
pub mod policy;
pub mod priority;
pub mod rules;
pub mod scalars;

pub use business_hours::{BusinessHours, HoursMode};
pub use category_override::CategoryOverride;
pub use escalation::{BreachTier, Escalation, EscalationTier, NotifyRole, TierLevel};
pub use holiday::{Holiday, NewHoliday};
pub use policy::{PolicySummary, PrioritySummary, SlaPolicy};
pub use priority::{PriorityName, PriorityTarget};
pub use rules::{CustomRule, NotificationKind, Notifications};
pub use scalars::{EscalationPercent, IsoWeekday, Percent, WallClock};
