//! United States calendar.

use super::{build, PresetRule};
use crate::holiday_calendar::HolidayCalendar;
use crate::holiday_rule::MovePolicy;
use fd_core::errors::Result;

const RULES: [PresetRule; 9] = [
    ("New Year's Day", "January 1st", MovePolicy::Closest),
    ("Martin Luther King's birthday", "3rd Monday in January", MovePolicy::None),
    ("Presidents' day", "3rd Monday in February", MovePolicy::None),
    ("Independence Day", "July 4th", MovePolicy::Closest),
    ("Labor Day", "1st Monday in September", MovePolicy::None),
    ("Columbus Day", "2nd Monday in October", MovePolicy::None),
    ("Veterans Day", "November 11th", MovePolicy::Closest),
    ("Thanksgiving", "4th Thursday in November", MovePolicy::None),
    ("Christmas", "December 25th", MovePolicy::Closest),
];

/// United States (federal holidays).
///
/// Fixed-date holidays falling on a Saturday are observed on the Friday
/// before, those on a Sunday on the Monday after.
pub fn united_states() -> Result<HolidayCalendar> {
    build("United States", &RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2012() {
        let cal = united_states().unwrap();
        let found: Vec<(Date, String)> =
            cal.holidays_between(date(2012, 1, 1), date(2012, 12, 31), false);
        let expected = [
            (date(2012, 1, 2), "New Year's Day"),
            (date(2012, 1, 16), "Martin Luther King's birthday"),
            (date(2012, 2, 20), "Presidents' day"),
            (date(2012, 7, 4), "Independence Day"),
            (date(2012, 9, 3), "Labor Day"),
            (date(2012, 10, 8), "Columbus Day"),
            (date(2012, 11, 12), "Veterans Day"),
            (date(2012, 11, 22), "Thanksgiving"),
            (date(2012, 12, 25), "Christmas"),
        ];
        assert_eq!(found.len(), expected.len());
        for ((d, name), (ed, ename)) in found.iter().zip(expected) {
            assert_eq!((*d, name.as_str()), (ed, ename));
        }
    }

    #[test]
    fn saturday_observed_on_friday() {
        let cal = united_states().unwrap();
        // 2015-07-04 is a Saturday
        assert!(cal.is_holiday(date(2015, 7, 3)));
        assert!(cal.is_business_day(date(2015, 7, 6)));
        assert!(cal.is_holiday(date(2000, 7, 4)));
    }
}
