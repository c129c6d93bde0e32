//! United Kingdom calendar.

use super::{build, PresetRule};
use crate::holiday_calendar::HolidayCalendar;
use crate::holiday_rule::MovePolicy;
use fd_core::errors::Result;

const RULES: [PresetRule; 8] = [
    ("New Year's Day", "January 1st", MovePolicy::Next),
    ("Good Friday", "Good Friday", MovePolicy::None),
    ("Easter Monday", "Easter Monday", MovePolicy::None),
    ("Early May Bank Holiday", "1st Monday in May", MovePolicy::None),
    ("Spring Bank Holiday", "last Monday in May", MovePolicy::None),
    ("Summer Bank Holiday", "last Monday in August", MovePolicy::None),
    ("Christmas", "December 25th", MovePolicy::Next),
    ("Boxing Day", "December 26th", MovePolicy::Next),
];

/// United Kingdom (England and Wales bank holidays, without one-off
/// royal or jubilee holidays).
pub fn united_kingdom() -> Result<HolidayCalendar> {
    build("United Kingdom", &RULES)
}
