//! `Date` type and the calendar-arithmetic primitives built on it.
//!
//! Dates are proleptic Gregorian and are represented as a serial number of
//! days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * Earlier dates have zero or negative serials.
//! * Dates can be constructed for years 1 to 9999; arithmetic on an existing
//!   date never fails.

use crate::weekday::Weekday;
use fd_core::ensure;
use fd_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum constructible date: January 1, 0001.
    pub const MIN: Date = Date(serial_from_ymd(1, 1, 1));

    /// Maximum constructible date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(9999, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(
            (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month),
            "invalid date {year}-{month:02}-{day:02}"
        );
        Date(serial_from_ymd(year, month, day))
    }

    /// The last calendar day of `year`/`month`.
    pub fn end_of_month_of(year: i32, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        Date::from_ymd(year, month, days_in_month(year, month))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - serial_from_ymd(self.year(), 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday.
        match Weekday::from_ordinal((self.0 - 1).rem_euclid(7) as u8) {
            Some(w) => w,
            None => unreachable!("rem_euclid(7) is always in 0..7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days, failing if the result leaves the constructible
    /// range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Date::from_serial(serial),
            None => Err(Error::Date(format!("date arithmetic overflow: {self} + {n}"))),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// The latest date on or before `self` that falls on `weekday`.
    pub fn weekday_on_or_before(self, weekday: Weekday) -> Self {
        let delta = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self - delta
    }

    /// The earliest date on or after `self` that falls on `weekday`.
    pub fn weekday_on_or_after(self, weekday: Weekday) -> Self {
        let delta = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self + delta
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let day = first.weekday_on_or_after(weekday).day_of_month() as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`.
    pub fn last_weekday(weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        Ok(Date::end_of_month_of(year, month)?.weekday_on_or_before(weekday))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        Date(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        Date(self.0 - rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        let mon = crate::month::Month::from_number(m).map_or("?", |m| m.long_name());
        write!(f, "{d} {mon} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(d: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date(serial_from_ymd(d.year(), d.month() as u8, d.day() as u8))
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y, m as u32, day as u32)
            .ok_or_else(|| Error::Date(format!("{d:?} is not representable by chrono")))
    }
}

// ── Calendar primitives ───────────────────────────────────────────────────────

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given year.
pub fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Days from 1970-01-01 to the given civil date.
const fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let (m, d) = (month as i32, day as i32);
    let y = if m <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Serial of 1899-12-31, the day before serial 1.
const EPOCH: i32 = days_from_civil(1899, 12, 31);

/// Convert (year, month, day) to a serial number.
const fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    days_from_civil(year, month, day) - EPOCH
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + EPOCH + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1899, 12, 31).serial(), 0);
        assert_eq!(date(1970, 1, 1).serial(), 25_568);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1600, 2, 29),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(1899, 12, 31).weekday(), Weekday::Sunday);
        assert_eq!(date(1776, 7, 4).weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2023, 3, 1).day_of_year(), 60);
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(date(2024, 2, 15).end_of_month(), date(2024, 2, 29));
        assert!(date(1999, 2, 28).is_end_of_month());
        assert!(!date(2000, 2, 28).is_end_of_month());
        assert_eq!(Date::end_of_month_of(2000, 4).unwrap(), date(2000, 4, 30));
        assert!(matches!(Date::end_of_month_of(2000, 13), Err(Error::Date(_))));
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        assert_eq!(d + 31, date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(date(2024, 3, 1) - 1, date(2024, 2, 29));
    }

    #[test]
    fn test_weekday_search() {
        // Monday on or before 24 May 2012 (a Thursday)
        assert_eq!(date(2012, 5, 24).weekday_on_or_before(Weekday::Monday), date(2012, 5, 21));
        // Friday on or after 18 June 2011 (a Saturday)
        assert_eq!(date(2011, 6, 18).weekday_on_or_after(Weekday::Friday), date(2011, 6, 24));
        // on the day itself
        assert_eq!(date(2012, 1, 23).weekday_on_or_after(Weekday::Monday), date(2012, 1, 23));
    }

    #[test]
    fn test_nth_weekday() {
        assert_eq!(Date::nth_weekday(3, Weekday::Wednesday, 2024, 3).unwrap(), date(2024, 3, 20));
        assert_eq!(Date::nth_weekday(1, Weekday::Monday, 2011, 9).unwrap(), date(2011, 9, 5));
        assert_eq!(Date::nth_weekday(1, Weekday::Sunday, 2012, 1).unwrap(), date(2012, 1, 1));
        assert_eq!(Date::nth_weekday(2, Weekday::Monday, 2012, 1).unwrap(), date(2012, 1, 9));
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(Date::last_weekday(Weekday::Sunday, 2011, 9).unwrap(), date(2011, 9, 25));
        assert_eq!(Date::last_weekday(Weekday::Tuesday, 2012, 1).unwrap(), date(2012, 1, 31));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_roundtrip() {
        let nd = chrono::NaiveDate::from_ymd_opt(2012, 4, 8).unwrap();
        let d = Date::from(nd);
        assert_eq!(d, date(2012, 4, 8));
        assert_eq!(chrono::NaiveDate::try_from(d).unwrap(), nd);
    }
}
