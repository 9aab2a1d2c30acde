//! Business hours window.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use servdesk_common::validation::Validator;

use super::scalars::{IsoWeekday, WallClock};
use crate::constants::{DEFAULT_END_TIME, DEFAULT_START_TIME, DEFAULT_WORKING_DAYS};
use crate::impl_domain_status_conversions;

/// Whether SLA clocks run around the clock or only inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoursMode {
    #[serde(rename = "24/7")]
    AlwaysOn,
    #[serde(rename = "business_hours")]
    BusinessHours,
}

impl_domain_status_conversions!(HoursMode {
    AlwaysOn => "24/7",
    BusinessHours => "business_hours",
});

/// Working window. In `24/7` mode the window and day set are kept but not
/// consulted, so switching modes back and forth loses nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessHours {
    pub mode: HoursMode,
    pub start_time: WallClock,
    pub end_time: WallClock,
    pub working_days: BTreeSet<IsoWeekday>,
}

impl Default for BusinessHours {
    fn default() -> Self {
        let parse = |raw: &str| raw.parse::<WallClock>().unwrap_or_default();
        Self {
            mode: HoursMode::BusinessHours,
            start_time: parse(DEFAULT_START_TIME),
            end_time: parse(DEFAULT_END_TIME),
            working_days: DEFAULT_WORKING_DAYS
                .iter()
                .filter_map(|d| IsoWeekday::new(*d).ok())
                .collect(),
        }
    }
}

impl BusinessHours {
    pub fn with_mode(&self, mode: HoursMode) -> Self {
        Self { mode, ..self.clone() }
    }

    pub fn with_start_time(&self, start_time: WallClock) -> Self {
        Self { start_time, ..self.clone() }
    }

    pub fn with_end_time(&self, end_time: WallClock) -> Self {
        Self { end_time, ..self.clone() }
    }

    /// Adding a day that is already present returns an equal value.
    pub fn with_day_added(&self, day: IsoWeekday) -> Self {
        let mut working_days = self.working_days.clone();
        working_days.insert(day);
        Self { working_days, ..self.clone() }
    }

    /// Removing a day that is absent returns an equal value.
    pub fn with_day_removed(&self, day: IsoWeekday) -> Self {
        let mut working_days = self.working_days.clone();
        working_days.remove(&day);
        Self { working_days, ..self.clone() }
    }

    /// Checkbox semantics: add the day when `enabled`, remove it otherwise.
    pub fn with_day(&self, day: IsoWeekday, enabled: bool) -> Self {
        if enabled {
            self.with_day_added(day)
        } else {
            self.with_day_removed(day)
        }
    }

    pub fn is_working_day(&self, day: IsoWeekday) -> bool {
        match self.mode {
            HoursMode::AlwaysOn => true,
            HoursMode::BusinessHours => self.working_days.contains(&day),
        }
    }

    pub(crate) fn validate_into(&self, validator: &mut Validator) {
        if self.mode != HoursMode::BusinessHours {
            return;
        }
        if self.start_time >= self.end_time {
            validator.add_error(
                "endTime",
                format!("must be after startTime ({})", self.start_time),
            );
        }
        if self.working_days.is_empty() {
            validator.add_error("workingDays", "must contain at least 1 day");
        }
    }
}
