//! Holiday rules and the descriptor mini-language that produces them.
//!
//! A descriptor is one of:
//!
//! * `"<Weekday>"`: marks that weekday as non-business (`"Saturday"`).
//! * `"<Month> <Day><suffix>"`: a fixed date (`"December 25th"`). The
//!   ordinal suffix is stripped, not checked against the numeral.
//! * `"<Ordinal> <Weekday> in <Month>"`: the n-th or last weekday of a month
//!   (`"3rd Monday in January"`, `"last Monday in May"`).
//! * a movable holiday name (`"Good Friday"`, `"Victoria Day"`).
//!
//! Matching of names is case-insensitive.

use crate::date::days_in_month;
use crate::month::Month;
use crate::movable::MovableHoliday;
use crate::weekday::Weekday;
use fd_core::errors::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;

/// How a holiday landing on a weekend produces an additional observed
/// holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovePolicy {
    /// No observed holiday is added.
    #[default]
    None,
    /// Observe on the next day that is neither weekend nor holiday.
    Next,
    /// Observe on whichever of the previous or next free day is closer;
    /// ties go forward.
    Closest,
}

impl FromStr for MovePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(MovePolicy::None),
            "next" => Ok(MovePolicy::Next),
            "closest" => Ok(MovePolicy::Closest),
            _ => Err(Error::Configuration(format!("unknown move policy '{s}'"))),
        }
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayOrdinal {
    /// The n-th occurrence, 1-based (1..=5).
    Nth(u8),
    /// The last occurrence.
    Last,
}

impl WeekdayOrdinal {
    /// Whether a date on `day` of a month with `month_len` days is this
    /// occurrence of its weekday.
    pub fn matches(&self, day: u8, month_len: u8) -> bool {
        match *self {
            WeekdayOrdinal::Nth(n) => (day - 1) / 7 + 1 == n,
            WeekdayOrdinal::Last => day + 7 > month_len,
        }
    }
}

impl std::fmt::Display for WeekdayOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekdayOrdinal::Nth(n) => {
                let suffix = match n {
                    1 => "st",
                    2 => "nd",
                    3 => "rd",
                    _ => "th",
                };
                write!(f, "{n}{suffix}")
            }
            WeekdayOrdinal::Last => write!(f, "last"),
        }
    }
}

/// A single holiday rule, as registered on a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayRule {
    /// A fixed month/day, optionally observed elsewhere when on a weekend.
    FixedDate {
        /// Month.
        month: Month,
        /// Day of month.
        day: u8,
        /// Holiday name.
        name: String,
        /// Weekend move policy.
        policy: MovePolicy,
    },
    /// The n-th (or last) given weekday of a month. Never moved.
    NthWeekday {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
        /// Which occurrence.
        ordinal: WeekdayOrdinal,
        /// Holiday name.
        name: String,
    },
    /// A movable holiday. Never moved, whatever the policy says.
    Movable {
        /// Which holiday.
        holiday: MovableHoliday,
        /// Holiday name.
        name: String,
        /// Recorded but not applied.
        policy: MovePolicy,
    },
    /// A weekday that is not a business day.
    WeekendDay(Weekday),
}

/// Strip a trailing `st`/`nd`/`rd`/`th`.
fn strip_ordinal_suffix(s: &str) -> &str {
    let lower = s.to_ascii_lowercase();
    if ["st", "nd", "rd", "th"].iter().any(|suf| lower.ends_with(suf)) {
        &s[..s.len() - 2]
    } else {
        s
    }
}

fn parse_month(s: &str, descriptor: &str) -> Result<Month> {
    Month::from_name(s).ok_or_else(|| {
        Error::Configuration(format!("unknown month '{s}' in holiday rule '{descriptor}'"))
    })
}

fn parse_weekday(s: &str, descriptor: &str) -> Result<Weekday> {
    Weekday::from_name(s).ok_or_else(|| {
        Error::Configuration(format!("unknown weekday '{s}' in holiday rule '{descriptor}'"))
    })
}

impl HolidayRule {
    /// Parse a holiday descriptor into a rule.
    ///
    /// # Errors
    /// [`Error::Configuration`] if the descriptor has none of the accepted
    /// shapes, or names an unknown month, weekday, or day.
    pub fn parse(name: &str, descriptor: &str, policy: MovePolicy) -> Result<Self> {
        let text = descriptor.trim();
        if let Some(holiday) = MovableHoliday::from_name(text) {
            return Ok(HolidayRule::Movable {
                holiday,
                name: name.to_string(),
                policy,
            });
        }
        if let Some(weekday) = Weekday::from_name(text) {
            return Ok(HolidayRule::WeekendDay(weekday));
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        match parts.as_slice() {
            [month, day] => {
                let month = parse_month(month, text)?;
                let day: u8 = strip_ordinal_suffix(day).parse().map_err(|_| {
                    Error::Configuration(format!("invalid day '{day}' in holiday rule '{text}'"))
                })?;
                // Leap-year length, so that February 29 is accepted.
                if day == 0 || day > days_in_month(2000, month.number()) {
                    return Err(Error::Configuration(format!(
                        "day {day} does not exist in {month} (holiday rule '{text}')"
                    )));
                }
                Ok(HolidayRule::FixedDate {
                    month,
                    day,
                    name: name.to_string(),
                    policy,
                })
            }
            [ordinal, weekday, in_kw, month] if in_kw.eq_ignore_ascii_case("in") => {
                let ordinal = if ordinal.eq_ignore_ascii_case("last") {
                    WeekdayOrdinal::Last
                } else {
                    match strip_ordinal_suffix(ordinal).parse::<u8>() {
                        Ok(n @ 1..=5) => WeekdayOrdinal::Nth(n),
                        _ => {
                            return Err(Error::Configuration(format!(
                                "invalid ordinal '{ordinal}' in holiday rule '{text}'"
                            )))
                        }
                    }
                };
                Ok(HolidayRule::NthWeekday {
                    month: parse_month(month, text)?,
                    weekday: parse_weekday(weekday, text)?,
                    ordinal,
                    name: name.to_string(),
                })
            }
            _ => Err(Error::Configuration(format!(
                "unrecognised holiday rule '{text}'"
            ))),
        }
    }

    /// The holiday name carried by the rule (`"weekend"` for weekend days).
    pub fn name(&self) -> &str {
        match self {
            HolidayRule::FixedDate { name, .. }
            | HolidayRule::NthWeekday { name, .. }
            | HolidayRule::Movable { name, .. } => name,
            HolidayRule::WeekendDay(_) => "weekend",
        }
    }
}
