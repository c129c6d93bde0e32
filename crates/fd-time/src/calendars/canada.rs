//! Canada calendar.

use super::{build, PresetRule};
use crate::holiday_calendar::HolidayCalendar;
use crate::holiday_rule::MovePolicy;
use fd_core::errors::Result;

const RULES: [PresetRule; 11] = [
    ("New Year's Day", "January 1st", MovePolicy::Next),
    ("Good Friday", "Good Friday", MovePolicy::None),
    ("Easter Monday", "Easter Monday", MovePolicy::None),
    ("Victoria Day", "Victoria Day", MovePolicy::None),
    ("Canada Day", "July 1st", MovePolicy::Next),
    ("Civic Holiday", "1st Monday in August", MovePolicy::None),
    ("Labor Day", "1st Monday in September", MovePolicy::None),
    ("Thanksgiving", "2nd Monday in October", MovePolicy::None),
    ("Remembrance Day", "November 11th", MovePolicy::None),
    ("Christmas", "December 25th", MovePolicy::Next),
    ("Boxing Day", "December 26th", MovePolicy::Next),
];

/// Canada.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1, moved to the next business day)
/// * Good Friday
/// * Easter Monday
/// * Victoria Day (Monday on or before May 24)
/// * Canada Day (Jul 1, moved to the next business day)
/// * Civic Holiday (1st Monday of August)
/// * Labor Day (1st Monday of September)
/// * Thanksgiving (2nd Monday of October)
/// * Remembrance Day (Nov 11, not moved)
/// * Christmas (Dec 25, moved to the next business day)
/// * Boxing Day (Dec 26, moved to the next business day)
pub fn canada() -> Result<HolidayCalendar> {
    build("Canada", &RULES)
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
        let cal = canada().unwrap();
        let expected = [
            date(2012, 1, 2),   // New Year's Day (observed)
            date(2012, 4, 6),   // Good Friday
            date(2012, 4, 9),   // Easter Monday
            date(2012, 5, 21),  // Victoria Day
            date(2012, 7, 2),   // Canada Day (observed)
            date(2012, 8, 6),   // Civic Holiday
            date(2012, 9, 3),   // Labor Day
            date(2012, 10, 8),  // Thanksgiving
            date(2012, 12, 25), // Christmas
            date(2012, 12, 26), // Boxing Day
        ];
        let found: Vec<Date> = cal
            .holidays_between(date(2012, 1, 1), date(2012, 12, 31), false)
            .into_iter()
            .map(|(d, _)| d)
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn remembrance_day_not_moved() {
        let cal = canada().unwrap();
        // 2012-11-11 is a Sunday
        assert!(cal.is_holiday(date(2012, 11, 11)));
        assert!(!cal.is_holiday(date(2012, 11, 12)));
    }
}
