//! Jurisdiction presets.
//!
//! Each preset is plain data: a list of `(name, descriptor, move policy)`
//! entries fed through [`HolidayCalendar::add_holiday`].

pub mod canada;
pub mod germany;
pub mod united_kingdom;
pub mod united_states;

use crate::holiday_calendar::HolidayCalendar;
use crate::holiday_rule::MovePolicy;
use fd_core::errors::{Error, Result};
use tracing::debug;

pub use canada::canada;
pub use germany::{germany, germany_exchange};
pub use united_kingdom::united_kingdom;
pub use united_states::united_states;

/// A preset entry: holiday name, rule descriptor, move policy.
pub(crate) type PresetRule = (&'static str, &'static str, MovePolicy);

/// Saturday and Sunday, shared by every preset.
pub(crate) const SAT_SUN: [PresetRule; 2] = [
    ("weekend", "Saturday", MovePolicy::None),
    ("weekend", "Sunday", MovePolicy::None),
];

pub(crate) fn build(name: &str, rules: &[PresetRule]) -> Result<HolidayCalendar> {
    let mut calendar = HolidayCalendar::new(name);
    for &(holiday, descriptor, policy) in SAT_SUN.iter().chain(rules) {
        calendar.add_holiday(holiday, descriptor, policy)?;
    }
    debug!(calendar = name, rules = rules.len(), "built preset calendar");
    Ok(calendar)
}

/// Build the preset calendar for a jurisdiction code.
///
/// Codes are matched case-insensitively: `us` / `united states`,
/// `ca` / `canada`, `de`, `de.frankfurt` / `de.xetra` / `de.eurex`, `uk`.
///
/// # Errors
/// [`Error::Configuration`] for an unknown code.
pub fn get_calendar(code: &str) -> Result<HolidayCalendar> {
    match code.trim().to_ascii_lowercase().as_str() {
        "us" | "united states" => united_states(),
        "ca" | "canada" => canada(),
        "de" => germany(),
        "de.frankfurt" | "de.xetra" | "de.eurex" => germany_exchange(),
        "uk" => united_kingdom(),
        _ => Err(Error::Configuration(format!("unknown calendar code '{code}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(get_calendar("US").unwrap().name(), "United States");
        assert_eq!(get_calendar("United States").unwrap().name(), "United States");
        assert_eq!(get_calendar("de.XETRA").unwrap().name(), "Germany (Exchange)");
    }

    #[test]
    fn unknown_code() {
        assert!(matches!(get_calendar("fr"), Err(Error::Configuration(_))));
    }
}
