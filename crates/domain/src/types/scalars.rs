//! Bounded scalar types used by the policy document.
//!
//! Each type rejects out-of-range values at construction and during
//! deserialization, so a loaded policy never carries a 130% trigger or a
//! weekday 9.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ServdeskError;

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const MAX: Percent = Percent(100);

    pub fn new(value: u8) -> Result<Self, ServdeskError> {
        Self::try_from(i64::from(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Percent {
    type Error = ServdeskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(Self(v)),
            _ => Err(ServdeskError::InvalidInput(format!(
                "percentage must be between 0 and 100, got {}",
                value
            ))),
        }
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Escalation threshold for a priority target, in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct EscalationPercent(u8);

impl EscalationPercent {
    pub const MAX: EscalationPercent = EscalationPercent(100);

    pub fn new(value: u8) -> Result<Self, ServdeskError> {
        Self::try_from(i64::from(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for EscalationPercent {
    type Error = ServdeskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if (1..=100).contains(&v) => Ok(Self(v)),
            _ => Err(ServdeskError::InvalidInput(format!(
                "escalation percentage must be between 1 and 100, got {}",
                value
            ))),
        }
    }
}

impl From<EscalationPercent> for u8 {
    fn from(value: EscalationPercent) -> Self {
        value.0
    }
}

impl fmt::Display for EscalationPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// ISO weekday number, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct IsoWeekday(u8);

impl IsoWeekday {
    pub const MONDAY: IsoWeekday = IsoWeekday(1);
    pub const SATURDAY: IsoWeekday = IsoWeekday(6);
    pub const SUNDAY: IsoWeekday = IsoWeekday(7);

    pub fn new(value: u8) -> Result<Self, ServdeskError> {
        Self::try_from(i64::from(value))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn weekday(self) -> Weekday {
        match self.0 {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }
}

impl From<Weekday> for IsoWeekday {
    fn from(day: Weekday) -> Self {
        // number_from_monday is always 1..=7
        Self(day.number_from_monday() as u8)
    }
}

impl TryFrom<i64> for IsoWeekday {
    type Error = ServdeskError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if (1..=7).contains(&v) => Ok(Self(v)),
            _ => Err(ServdeskError::InvalidInput(format!(
                "weekday must be between 1 (Monday) and 7 (Sunday), got {}",
                value
            ))),
        }
    }
}

impl From<IsoWeekday> for u8 {
    fn from(value: IsoWeekday) -> Self {
        value.0
    }
}

impl fmt::Display for IsoWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

/// Wall-clock time of day with minute precision, written `HH:MM`.
/// Defaults to midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock(NaiveTime);

impl WallClock {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ServdeskError> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self).ok_or_else(|| {
            ServdeskError::InvalidInput(format!("invalid time of day {:02}:{:02}", hour, minute))
        })
    }

    pub fn time(self) -> NaiveTime {
        self.0
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl FromStr for WallClock {
    type Err = ServdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M").map(Self).map_err(|_| {
            ServdeskError::InvalidInput(format!("time must be formatted HH:MM, got '{}'", s))
        })
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for WallClock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallClock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds() {
        assert_eq!(Percent::new(0).unwrap().get(), 0);
        assert_eq!(Percent::new(100).unwrap(), Percent::MAX);
        assert!(Percent::new(101).is_err());
        assert!(serde_json::from_str::<Percent>("-1").is_err());
        assert!(serde_json::from_str::<Percent>("250").is_err());
        assert_eq!(serde_json::to_string(&Percent::new(75).unwrap()).unwrap(), "75");
    }

    #[test]
    fn escalation_percent_rejects_zero() {
        assert!(EscalationPercent::new(0).is_err());
        assert!(EscalationPercent::new(1).is_ok());
        assert!(EscalationPercent::new(100).is_ok());
        assert!(serde_json::from_str::<EscalationPercent>("0").is_err());
    }

    #[test]
    fn weekday_numbers_follow_iso() {
        assert_eq!(IsoWeekday::new(1).unwrap().weekday(), Weekday::Mon);
        assert_eq!(IsoWeekday::new(7).unwrap().weekday(), Weekday::Sun);
        assert_eq!(IsoWeekday::from(Weekday::Sat), IsoWeekday::SATURDAY);
        assert!(IsoWeekday::new(0).is_err());
        assert!(IsoWeekday::new(8).is_err());
        assert_eq!(IsoWeekday::MONDAY.to_string(), "Mon");
    }

    #[test]
    fn wall_clock_parses_and_formats_hh_mm() {
        let t: WallClock = "09:05".parse().unwrap();
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(t.minutes(), 9 * 60 + 5);
        assert!("9am".parse::<WallClock>().is_err());
        assert!("24:00".parse::<WallClock>().is_err());

        let json = serde_json::to_string(&WallClock::new(17, 0).unwrap()).unwrap();
        assert_eq!(json, "\"17:00\"");
        let back: WallClock = serde_json::from_str("\"17:00\"").unwrap();
        assert_eq!(back, WallClock::new(17, 0).unwrap());
    }

    #[test]
    fn wall_clock_orders_by_time() {
        assert!(WallClock::new(9, 0).unwrap() < WallClock::new(17, 0).unwrap());
    }
}
