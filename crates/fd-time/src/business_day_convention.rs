//! Business-day (roll) conventions.

use fd_core::errors::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
}

/// Accepted spellings, lower-case.
const ALIASES: &[(&str, BusinessDayConvention)] = &[
    ("follow", BusinessDayConvention::Following),
    ("following", BusinessDayConvention::Following),
    ("f", BusinessDayConvention::Following),
    ("modfollow", BusinessDayConvention::ModifiedFollowing),
    ("modified following", BusinessDayConvention::ModifiedFollowing),
    ("mf", BusinessDayConvention::ModifiedFollowing),
    ("previous", BusinessDayConvention::Preceding),
    ("preceding", BusinessDayConvention::Preceding),
    ("p", BusinessDayConvention::Preceding),
    ("modprevious", BusinessDayConvention::ModifiedPreceding),
    ("modified preceding", BusinessDayConvention::ModifiedPreceding),
    ("mp", BusinessDayConvention::ModifiedPreceding),
];

impl FromStr for BusinessDayConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::UnknownConvention(s.to_string()))
    }
}

impl TryFrom<String> for BusinessDayConvention {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{s}")
    }
}
