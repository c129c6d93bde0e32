//! Day-count conventions.
//!
//! A day-count convention turns the interval between two dates into a
//! number of days (the numerator), a year length (the denominator), and the
//! resulting year fraction used for accruing interest.
//!
//! | Convention | Day adjustment | Denominator |
//! |---|---|---|
//! | 30/360 US | `eom`: Feb month-end d1 → 30 (and d2 if also Feb month-end); d2 = 31 with d1 ≥ 30 → 30; d1 = 31 → 30 | 360 |
//! | 30E/360 | 31 → 30 on both ends | 360 |
//! | 30E/360 ISDA | month-end d1 → 30; month-end d2 → 30 unless February | 360 |
//! | 30E+/360 | d1 = 31 → 30; d2 = 31 → first of next month | 360 |
//! | Actual/Actual ISDA | none | split at year boundaries |
//! | Actual/365 Fixed | none | 365 |
//! | Actual/360 | none | 360 |
//! | Actual/365L | none | 366 if (annual and a Feb 29 is in the period) or the end year is leap, else 365 |
//! | Actual/Actual AFB | none | 366 if a Feb 29 is in the period, else 365 |
//!
//! "A Feb 29 is in the period" means `d1 < Feb 29 <= d2`.

use crate::date::{days_in_year, is_leap_year, Date};
use crate::frequency::Frequency;
use fd_core::errors::{Error, Result};
use fd_core::{Integer, Real, Time};
use serde::Deserialize;
use std::str::FromStr;

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 Fixed"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> Integer;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// The supported day-count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DayCountConvention {
    /// 30/360 US, a.k.a. bond basis.
    Thirty360Us,
    /// 30E/360, a.k.a. Eurobond basis (ISDA 2006).
    ThirtyE360,
    /// 30E/360 ISDA, a.k.a. Eurobond basis (ISDA 2000), German.
    ThirtyE360Isda,
    /// 30E+/360.
    ThirtyEPlus360,
    /// Actual/Actual ISDA.
    ActualActualIsda,
    /// Actual/365 Fixed, a.k.a. English.
    Actual365Fixed,
    /// Actual/360, a.k.a. French.
    Actual360,
    /// Actual/365L, a.k.a. ISMA-Year.
    Actual365L,
    /// Actual/Actual AFB.
    ActualActualAfb,
}

/// Accepted spellings, upper-case.
const ALIASES: &[(&str, DayCountConvention)] = &[
    ("30/360 US", DayCountConvention::Thirty360Us),
    ("30/360", DayCountConvention::Thirty360Us),
    ("30U/360", DayCountConvention::Thirty360Us),
    ("360/360", DayCountConvention::Thirty360Us),
    ("BOND BASIS", DayCountConvention::Thirty360Us),
    ("30E/360", DayCountConvention::ThirtyE360),
    ("30/360 ICMA", DayCountConvention::ThirtyE360),
    ("30S/360 ICMA", DayCountConvention::ThirtyE360),
    ("EUROBOND BASIS (ISDA 2006)", DayCountConvention::ThirtyE360),
    ("SPECIAL GERMAN", DayCountConvention::ThirtyE360),
    ("30E/360 ISDA", DayCountConvention::ThirtyE360Isda),
    ("EUROBOND BASIS (ISDA 2000)", DayCountConvention::ThirtyE360Isda),
    ("GERMAN", DayCountConvention::ThirtyE360Isda),
    ("30E+/360", DayCountConvention::ThirtyEPlus360),
    ("ACTUAL/ACTUAL ISDA", DayCountConvention::ActualActualIsda),
    ("ACT/ACT ISDA", DayCountConvention::ActualActualIsda),
    ("ACTUAL/ACTUAL", DayCountConvention::ActualActualIsda),
    ("ACT/ACT", DayCountConvention::ActualActualIsda),
    ("ACTUAL/365", DayCountConvention::ActualActualIsda),
    ("ACT/365", DayCountConvention::ActualActualIsda),
    ("ACTUAL/365 FIXED", DayCountConvention::Actual365Fixed),
    ("ACT/365 FIXED", DayCountConvention::Actual365Fixed),
    ("A/365F", DayCountConvention::Actual365Fixed),
    ("ENGLISH", DayCountConvention::Actual365Fixed),
    ("ACTUAL/360", DayCountConvention::Actual360),
    ("ACT/360", DayCountConvention::Actual360),
    ("A/360", DayCountConvention::Actual360),
    ("FRENCH", DayCountConvention::Actual360),
    ("ACTUAL/365L", DayCountConvention::Actual365L),
    ("ACT/365L", DayCountConvention::Actual365L),
    ("ISMA-YEAR", DayCountConvention::Actual365L),
    ("ACTUAL/ACTUAL AFB", DayCountConvention::ActualActualAfb),
    ("ACT/ACT AFB", DayCountConvention::ActualActualAfb),
];

/// Optional inputs to a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCountOptions {
    /// End-of-month rule for 30/360 US: February month-ends count as day 30.
    pub eom: bool,
    /// Coupon frequency; Actual/365L only distinguishes annual from the rest.
    pub frequency: Option<Frequency>,
}

/// Result of a day count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCountParameters {
    /// Days in the period, per the convention. Negative if the dates were
    /// given in reverse order.
    pub numerator: Integer,
    /// Days in the year, per the convention. Always positive.
    pub denominator: Integer,
    /// Year fraction. Equals `numerator / denominator` except for
    /// Actual/Actual ISDA periods spanning more than one year.
    pub fraction: Real,
}

impl DayCountParameters {
    fn ratio(numerator: Integer, denominator: Integer) -> Self {
        Self {
            numerator,
            denominator,
            fraction: Real::from(numerator) / Real::from(denominator),
        }
    }
}

impl DayCountConvention {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360Us => "30/360 US",
            DayCountConvention::ThirtyE360 => "30E/360",
            DayCountConvention::ThirtyE360Isda => "30E/360 ISDA",
            DayCountConvention::ThirtyEPlus360 => "30E+/360",
            DayCountConvention::ActualActualIsda => "Actual/Actual ISDA",
            DayCountConvention::Actual365Fixed => "Actual/365 Fixed",
            DayCountConvention::Actual360 => "Actual/360",
            DayCountConvention::Actual365L => "Actual/365L",
            DayCountConvention::ActualActualAfb => "Actual/Actual AFB",
        }
    }

    /// Numerator, denominator and year fraction between `d1` and `d2`.
    ///
    /// Dates in reverse order give the negated numerator and fraction of
    /// the forward period, so results are antisymmetric. They are not the
    /// direct formula applied to `(d1, d2)`: the 30/360 end-of-month
    /// adjustments and the Actual/365L leap-year test see the dates sorted.
    /// For example, 30/360 US from 31 Dec 2002 back to 1 Dec 2002 counts
    /// -30 days, and Actual/365L from 2012-06-01 back to 2011-06-01 uses a
    /// 366-day denominator.
    pub fn parameters(&self, d1: Date, d2: Date, options: DayCountOptions) -> DayCountParameters {
        if d2 < d1 {
            let forward = self.parameters(d2, d1, options);
            return DayCountParameters {
                numerator: -forward.numerator,
                denominator: forward.denominator,
                fraction: -forward.fraction,
            };
        }
        let actual = d2 - d1;
        match self {
            DayCountConvention::Thirty360Us
            | DayCountConvention::ThirtyE360
            | DayCountConvention::ThirtyE360Isda
            | DayCountConvention::ThirtyEPlus360 => {
                DayCountParameters::ratio(self.thirty_360_days(d1, d2, options.eom), 360)
            }
            DayCountConvention::ActualActualIsda => actual_actual_isda(d1, d2),
            DayCountConvention::Actual365Fixed => DayCountParameters::ratio(actual, 365),
            DayCountConvention::Actual360 => DayCountParameters::ratio(actual, 360),
            DayCountConvention::Actual365L => {
                let leap = if options.frequency == Some(Frequency::Annual) {
                    period_has_feb29(d1, d2)
                } else {
                    is_leap_year(d2.year())
                };
                DayCountParameters::ratio(actual, if leap { 366 } else { 365 })
            }
            DayCountConvention::ActualActualAfb => {
                DayCountParameters::ratio(actual, if period_has_feb29(d1, d2) { 366 } else { 365 })
            }
        }
    }

    /// Year fraction with explicit options.
    pub fn year_fraction_with(&self, d1: Date, d2: Date, options: DayCountOptions) -> Time {
        self.parameters(d1, d2, options).fraction
    }

    fn thirty_360_days(&self, start: Date, end: Date, eom: bool) -> Integer {
        let (y1, m1, day1) = start.ymd();
        let (mut y2, mut m2, day2) = end.ymd();
        let (mut d1, mut d2) = (Integer::from(day1), Integer::from(day2));
        match self {
            DayCountConvention::Thirty360Us => {
                let feb_end = |d: Date| d.month() == 2 && d.is_end_of_month();
                if eom && feb_end(start) && feb_end(end) {
                    d2 = 30;
                }
                if eom && feb_end(start) {
                    d1 = 30;
                }
                if d2 == 31 && d1 >= 30 {
                    d2 = 30;
                }
                if d1 == 31 {
                    d1 = 30;
                }
            }
            DayCountConvention::ThirtyE360 => {
                d1 = d1.min(30);
                d2 = d2.min(30);
            }
            DayCountConvention::ThirtyE360Isda => {
                if start.is_end_of_month() {
                    d1 = 30;
                }
                if end.is_end_of_month() && m2 != 2 {
                    d2 = 30;
                }
            }
            DayCountConvention::ThirtyEPlus360 => {
                d1 = d1.min(30);
                if d2 == 31 {
                    d2 = 1;
                    if m2 == 12 {
                        m2 = 1;
                        y2 += 1;
                    } else {
                        m2 += 1;
                    }
                }
            }
            _ => unreachable!("not a 30/360 convention"),
        }
        360 * (y2 - y1) + 30 * (Integer::from(m2) - Integer::from(m1)) + (d2 - d1)
    }
}

/// Whole years count as 1 each; the partial first and last years are
/// weighted by their own lengths. `d1 <= d2`.
fn actual_actual_isda(d1: Date, d2: Date) -> DayCountParameters {
    let (y1, y2) = (d1.year(), d2.year());
    if y1 == y2 {
        return DayCountParameters::ratio(d2 - d1, days_in_year(y1));
    }

    let mut numerator = 0;
    let mut denominator = 0;
    let mut fraction = 0.0;
    for y in y1 + 1..y2 {
        let len = days_in_year(y);
        numerator += len;
        denominator += len;
        fraction += 1.0;
    }

    let segments = [
        (Date::from_ymd_unchecked(y1 + 1, 1, 1) - d1, days_in_year(y1)),
        (d2 - Date::from_ymd_unchecked(y2, 1, 1), days_in_year(y2)),
    ];
    for (days, len) in segments {
        numerator += days;
        denominator += len;
        fraction += Real::from(days) / Real::from(len);
    }

    DayCountParameters {
        numerator,
        denominator,
        fraction,
    }
}

/// Whether some February 29 falls in `(d1, d2]`. `d1 <= d2`.
fn period_has_feb29(d1: Date, d2: Date) -> bool {
    (d1.year()..=d2.year())
        .filter(|&y| is_leap_year(y))
        .map(|y| Date::from_ymd_unchecked(y, 2, 29))
        .any(|feb29| d1 < feb29 && feb29 <= d2)
}

impl FromStr for DayCountConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_uppercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::UnknownConvention(s.to_string()))
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl DayCounter for DayCountConvention {
    fn name(&self) -> &str {
        DayCountConvention::name(self)
    }

    fn day_count(&self, d1: Date, d2: Date) -> Integer {
        self.parameters(d1, d2, DayCountOptions::default()).numerator
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.parameters(d1, d2, DayCountOptions::default()).fraction
    }
}

// ── String-keyed entry points ─────────────────────────────────────────────────

/// Numerator, denominator and year fraction between two dates under the
/// named convention.
///
/// # Errors
/// [`Error::UnknownConvention`] if `convention` is not a known name.
pub fn day_count_parameters(
    d1: Date,
    d2: Date,
    convention: &str,
    options: DayCountOptions,
) -> Result<DayCountParameters> {
    let convention: DayCountConvention = convention.parse()?;
    Ok(convention.parameters(d1, d2, options))
}

/// Year fraction between two dates under the named convention.
pub fn year_fraction(d1: Date, d2: Date, convention: &str, options: DayCountOptions) -> Result<Time> {
    Ok(day_count_parameters(d1, d2, convention, options)?.fraction)
}

/// Day count between two dates under the named convention.
pub fn day_difference(d1: Date, d2: Date, convention: &str, options: DayCountOptions) -> Result<Integer> {
    Ok(day_count_parameters(d1, d2, convention, options)?.numerator)
}

/// Year fraction of each date measured from the first one.
///
/// The first element is always `0.0`; an empty slice gives an empty vector.
pub fn year_fractions(dates: &[Date], convention: &str, options: DayCountOptions) -> Result<Vec<Time>> {
    let convention: DayCountConvention = convention.parse()?;
    let Some(&first) = dates.first() else {
        return Ok(Vec::new());
    };
    Ok(dates
        .iter()
        .map(|&d| convention.year_fraction_with(first, d, options))
        .collect())
}
