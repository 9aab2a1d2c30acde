//! Holiday calendar entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use servdesk_common::validation::{StringValidator, ValidationError, Validator};

use crate::constants::MAX_HOLIDAY_NAME_LENGTH;

/// A named non-working date. Dates are calendar days without a timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
}

/// Request body for creating a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHoliday {
    pub name: String,
    pub date: NaiveDate,
}

impl NewHoliday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self { name: name.into(), date }
    }

    /// Trim the name and reject blank or overlong names.
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        let name = self.name.trim().to_string();
        let mut validator = Validator::new();
        validator.validate_field(
            "name",
            name.as_str(),
            &StringValidator::new().not_empty().max_length(MAX_HOLIDAY_NAME_LENGTH),
        );
        validator.finalize()?;
        Ok(Self { name, date: self.date })
    }

    /// Attach a fresh identifier.
    pub fn into_holiday(self) -> Holiday {
        Holiday { id: uuid::Uuid::new_v4().to_string(), date: self.date, name: self.name }
    }
}
