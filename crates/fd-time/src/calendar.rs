//! `Calendar` trait and business-day rolling.
//!
//! A calendar knows which dates are holidays and can roll dates according to
//! a [`BusinessDayConvention`]. Rolling walks one day at a time, so it is
//! bounded by the longest run of consecutive non-business days.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::weekday::Weekday;
use fd_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Canada"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday (non-business) day, weekends
    /// included.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_holiday(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Defaults to Saturday and Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Date {
        roll_backward(self, date.end_of_month())
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Following => roll_forward(self, date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll_forward(self, date);
                if adjusted.month() != date.month() {
                    roll_backward(self, date)
                } else {
                    adjusted
                }
            }
            BusinessDayConvention::Preceding => roll_backward(self, date),
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll_backward(self, date);
                if adjusted.month() != date.month() {
                    roll_forward(self, date)
                } else {
                    adjusted
                }
            }
        }
    }

    /// Advance `date` by `n` business days.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Date {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date += step;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_business_day(d) {
                count += 1;
            }
            d += 1;
        }
        sign * count
    }
}

/// Walk forward from `date` while it is a holiday.
///
/// The walk is not range-checked: it may step past [`Date::MAX`].
pub fn roll_forward<C: Calendar + ?Sized>(calendar: &C, mut date: Date) -> Date {
    while calendar.is_holiday(date) {
        date += 1;
    }
    date
}

/// Walk backward from `date` while it is a holiday.
///
/// The walk is not range-checked: it may step before [`Date::MIN`].
pub fn roll_backward<C: Calendar + ?Sized>(calendar: &C, mut date: Date) -> Date {
    while calendar.is_holiday(date) {
        date -= 1;
    }
    date
}

/// Roll `date` to a business day of `calendar` per `convention`.
///
/// Rolling uses unchecked day arithmetic, so a holiday at the edge of the
/// supported range can roll to a date outside it. For example, following
/// from [`Date::MAX`] on the US calendar lands in January 10000. Validate
/// the result with [`Date::from_serial`] when working near the bounds.
pub fn roll(date: Date, calendar: &dyn Calendar, convention: BusinessDayConvention) -> Date {
    calendar.adjust(date, convention)
}

/// Like [`roll`], with the convention given by name (`"follow"`,
/// `"modfollow"`, `"previous"`, `"modprevious"`, …).
///
/// # Errors
/// [`Error::UnknownConvention`](fd_core::Error::UnknownConvention) for an
/// unrecognised name.
pub fn roll_by_name(date: Date, calendar: &dyn Calendar, convention: &str) -> Result<Date> {
    Ok(roll(date, calendar, convention.parse()?))
}

/// Last business day of `year`/`month`.
pub fn last_business_day_of_month(year: i32, month: u8, calendar: &dyn Calendar) -> Result<Date> {
    Ok(roll_backward(calendar, Date::end_of_month_of(year, month)?))
}

/// First business day of `year`/`month`.
pub fn first_business_day_of_month(year: i32, month: u8, calendar: &dyn Calendar) -> Result<Date> {
    Ok(roll_forward(calendar, Date::from_ymd(year, month, 1)?))
}
