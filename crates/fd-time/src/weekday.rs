//! `Weekday`: day-of-week enum.

use fd_core::errors::{Error, Result};
use std::str::FromStr;

/// Day of the week.
///
/// Variants are numbered 0–6 (Monday = 0, Sunday = 6), which is also the
/// index used by per-weekday tables such as a calendar's weekend flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (0).
    Monday = 0,
    /// Tuesday (1).
    Tuesday = 1,
    /// Wednesday (2).
    Wednesday = 2,
    /// Thursday (3).
    Thursday = 3,
    /// Friday (4).
    Friday = 4,
    /// Saturday (5).
    Saturday = 5,
    /// Sunday (6).
    Sunday = 6,
}

/// All weekdays in order, Monday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Construct from the ordinal (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        ALL_WEEKDAYS.get(n as usize).copied()
    }

    /// Look up a weekday by its English name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_WEEKDAYS
            .iter()
            .copied()
            .find(|w| w.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Return the ordinal (0 = Monday … 6 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the ordinal as a table index.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Full English name (`"Monday"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three-letter abbreviation (`"Mon"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Weekday::from_name(s)
            .ok_or_else(|| Error::Configuration(format!("unknown weekday '{s}'")))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
