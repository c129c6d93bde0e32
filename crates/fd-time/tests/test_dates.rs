//! Integration tests for `Date`, its text front end, and the date
//! primitives used by the calendar engine.

use fd_core::Error;
use fd_time::date::{days_in_month, days_in_year, is_leap_year};
use fd_time::{Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn serial_epoch() {
    assert_eq!(date(1900, 1, 1).serial(), 1);
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(1978, 11, 4).weekday(), Weekday::Saturday);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2004));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2003));
    assert_eq!(days_in_year(2004), 366);
    assert_eq!(days_in_month(2004, 2), 29);
    assert_eq!(days_in_month(2003, 2), 28);
}

#[test]
fn end_of_month() {
    assert!(date(2004, 2, 29).is_end_of_month());
    assert!(!date(2004, 2, 28).is_end_of_month());
    assert!(date(2003, 2, 28).is_end_of_month());
    assert_eq!(date(2012, 4, 10).end_of_month(), date(2012, 4, 30));
    assert_eq!(Date::end_of_month_of(2012, 2).unwrap(), date(2012, 2, 29));
}

#[test]
fn nth_and_last_weekday() {
    assert_eq!(Date::nth_weekday(3, Weekday::Monday, 2012, 1).unwrap(), date(2012, 1, 16));
    assert_eq!(Date::nth_weekday(4, Weekday::Thursday, 2012, 11).unwrap(), date(2012, 11, 22));
    assert_eq!(Date::last_weekday(Weekday::Monday, 2012, 5).unwrap(), date(2012, 5, 28));
    assert!(Date::nth_weekday(5, Weekday::Monday, 2012, 2).is_err());
    assert!(Date::nth_weekday(0, Weekday::Monday, 2012, 2).is_err());
}

#[test]
fn invalid_components() {
    assert!(matches!(Date::from_ymd(2003, 2, 29), Err(Error::Date(_))));
    assert!(matches!(Date::from_ymd(2003, 13, 1), Err(Error::Date(_))));
    assert!(matches!(Date::from_ymd(0, 1, 1), Err(Error::Date(_))));
    assert!(Date::MAX.add_days(1).is_err());
}

#[test]
fn parse_layouts() {
    let expected = date(1978, 11, 4);
    for text in [
        "4-Nov-1978",
        "04-Nov-78",
        "4 Nov 1978",
        "4Nov1978",
        "1978-Nov-04",
        "11/04/78",
        "11/4/1978",
        "1978-11-04",
        "04.11.1978",
        "19781104",
        "4-nov-1978",
    ] {
        assert_eq!(text.parse::<Date>(), Ok(expected), "{text}");
    }
    assert_eq!("1978-1-4".parse::<Date>(), Ok(date(1978, 1, 4)));
    assert_eq!("1-Jan-04".parse::<Date>(), Ok(date(2004, 1, 1)));
}

#[test]
fn parse_rejects_garbage() {
    for text in ["", "tomorrow", "31-Feb-2004", "4-Nox-1978", "1978/11", "4-Nov-1978 10:15:00"] {
        assert!(matches!(text.parse::<Date>(), Err(Error::Date(_))), "{text}");
    }
}

#[test]
fn display_and_debug() {
    let d = date(1978, 11, 4);
    assert_eq!(d.to_string(), "4 November 1978");
    assert_eq!(format!("{d:?}"), "Date(1978-11-04)");
    assert_eq!(Month::November.to_string(), "November");
}

proptest! {
    #[test]
    fn ymd_roundtrip(y in 1i32..=9999, m in 1u8..=12, d in 1u8..=28) {
        let date = Date::from_ymd(y, m, d).unwrap();
        prop_assert_eq!(date.ymd(), (y, m, d));
        prop_assert_eq!((date + 1) - date, 1);
    }

    #[test]
    fn iso_text_parses_back(y in 1000i32..=9999, m in 1u8..=12, d in 1u8..=28) {
        let date = Date::from_ymd(y, m, d).unwrap();
        prop_assert_eq!(format!("{y}-{m:02}-{d:02}").parse::<Date>(), Ok(date));
    }
}
