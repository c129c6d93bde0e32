//! German calendars: the national calendar and the Frankfurt exchange
//! calendar (shared by Xetra and Eurex).

use super::{build, PresetRule};
use crate::holiday_calendar::HolidayCalendar;
use crate::holiday_rule::MovePolicy;
use fd_core::errors::Result;

const NATIONAL: [PresetRule; 12] = [
    ("New Year's Day", "January 1st", MovePolicy::Next),
    ("Good Friday", "Good Friday", MovePolicy::None),
    ("Easter Monday", "Easter Monday", MovePolicy::None),
    ("Ascension Thursday", "Ascension Thursday", MovePolicy::None),
    ("Whit Monday", "Whit Monday", MovePolicy::None),
    ("Corpus Christi Thursday", "Corpus Christi Thursday", MovePolicy::None),
    ("Labour Day", "May 1st", MovePolicy::None),
    ("National Day", "October 3rd", MovePolicy::None),
    ("Christmas Eve", "December 24th", MovePolicy::None),
    ("Christmas", "December 25th", MovePolicy::None),
    ("Boxing Day", "December 26th", MovePolicy::None),
    ("New Year's Eve", "December 31st", MovePolicy::None),
];

const EXCHANGE: [PresetRule; 8] = [
    ("New Year's Day", "January 1st", MovePolicy::Next),
    ("Good Friday", "Good Friday", MovePolicy::None),
    ("Easter Monday", "Easter Monday", MovePolicy::None),
    ("Labour Day", "May 1st", MovePolicy::None),
    ("Christmas Eve", "December 24th", MovePolicy::None),
    ("Christmas", "December 25th", MovePolicy::None),
    ("Boxing Day", "December 26th", MovePolicy::None),
    ("New Year's Eve", "December 31st", MovePolicy::None),
];

/// Germany (national holidays).
pub fn germany() -> Result<HolidayCalendar> {
    build("Germany", &NATIONAL)
}

/// Frankfurt Stock Exchange, also used for Xetra and Eurex.
pub fn germany_exchange() -> Result<HolidayCalendar> {
    build("Germany (Exchange)", &EXCHANGE)
}
