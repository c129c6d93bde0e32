//! `Month`: month-of-year enum.

use fd_core::errors::{Error, Result};
use std::str::FromStr;

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const ALL_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(ALL_MONTHS[n as usize - 1]),
            _ => None,
        }
    }

    /// Look up a month by its full English name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_MONTHS
            .iter()
            .copied()
            .find(|m| m.long_name().eq_ignore_ascii_case(name))
    }

    /// Look up a month by its three-letter abbreviation, ignoring case.
    pub fn from_short_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_MONTHS
            .iter()
            .copied()
            .find(|m| m.short_name().eq_ignore_ascii_case(name))
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Accepts full names and three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self> {
        Month::from_name(s)
            .or_else(|| Month::from_short_name(s))
            .ok_or_else(|| Error::Configuration(format!("unknown month '{s}'")))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u8 {
            let m = Month::from_number(n).unwrap();
            assert_eq!(m.number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Month::from_name("december"), Some(Month::December));
        assert_eq!(Month::from_short_name("SEP"), Some(Month::September));
        assert_eq!(Month::from_name("Sep"), None);
        assert_eq!("nov".parse::<Month>(), Ok(Month::November));
        assert!("Smarch".parse::<Month>().is_err());
    }
}
