//! Calendars described as TOML data.
//!
//! ```toml
//! name = "Canada"
//! weekend = ["Saturday", "Sunday"]
//!
//! [[holiday]]
//! name = "Canada Day"
//! rule = "July 1st"
//! move = "next"
//! ```
//!
//! Every entry goes through [`HolidayCalendar::add_holiday`], so the rule
//! descriptors are validated exactly as in code.

use crate::holiday_calendar::{HolidayCalendar, WEEKEND};
use crate::holiday_rule::MovePolicy;
use crate::weekday::Weekday;
use fd_core::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One `[[holiday]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayDefinition {
    /// Holiday name.
    pub name: String,
    /// Rule descriptor (`"December 25th"`, `"last Monday in May"`, …).
    pub rule: String,
    /// Weekend move policy.
    #[serde(default, rename = "move")]
    pub policy: MovePolicy,
}

/// A whole calendar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarDefinition {
    /// Calendar name.
    pub name: String,
    /// Weekday names that are not business days.
    #[serde(default)]
    pub weekend: Vec<String>,
    /// Holiday rules, in registration order.
    #[serde(default, rename = "holiday")]
    pub holidays: Vec<HolidayDefinition>,
}

impl CalendarDefinition {
    /// Parse a definition from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| Error::Configuration(format!("invalid calendar definition: {e}")))
    }

    /// Read and parse a definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Build the calendar.
    ///
    /// # Errors
    /// [`Error::Configuration`] for a weekend entry that is not a weekday
    /// name, or for the first weekend day or rule that
    /// [`HolidayCalendar::add_holiday`] rejects.
    pub fn build(&self) -> Result<HolidayCalendar> {
        let mut calendar = HolidayCalendar::new(self.name.as_str());
        for day in &self.weekend {
            let weekday = Weekday::from_name(day).ok_or_else(|| {
                Error::Configuration(format!("weekend entry '{day}' is not a weekday name"))
            })?;
            calendar.add_holiday(WEEKEND, weekday.name(), MovePolicy::None)?;
        }
        for holiday in &self.holidays {
            calendar.add_holiday(&holiday.name, &holiday.rule, holiday.policy)?;
        }
        debug!(
            calendar = %self.name,
            weekend = self.weekend.len(),
            holidays = self.holidays.len(),
            "built calendar from definition"
        );
        Ok(calendar)
    }
}
