//! # fd-time
//!
//! Dates, rule-based holiday calendars, business-day rolling, and day-count
//! conventions.
//!
//! ```
//! use fd_time::{calendars, roll_by_name, year_fraction, Date, DayCountOptions};
//!
//! let canada = calendars::get_calendar("ca")?;
//! let d: Date = "30 Jun 2012".parse()?;
//! assert_eq!(roll_by_name(d, &canada, "modfollow")?, "29 Jun 2012".parse::<Date>()?);
//!
//! let yf = year_fraction("1 Jan 2004".parse()?, "1 Jan 2005".parse()?, "act/act", DayCountOptions::default())?;
//! assert_eq!(yf, 1.0);
//! # Ok::<(), fd_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `Calendar` trait and business-day rolling.
pub mod calendar;

/// Jurisdiction presets.
pub mod calendars;

/// Calendars loaded from TOML definitions.
pub mod config;

/// `Date` type and date arithmetic.
pub mod date;

/// `DayCounter` trait and day-count conventions.
pub mod day_counter;

/// Payment / event frequency.
pub mod frequency;

/// Rule-based holiday calendar.
pub mod holiday_calendar;

/// Holiday rules and their descriptor language.
pub mod holiday_rule;

/// `Month`, month of the year.
pub mod month;

/// Easter and other movable holidays.
pub mod movable;

mod parse;

/// `Weekday`, day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{
    first_business_day_of_month, last_business_day_of_month, roll, roll_by_name, Calendar,
};
pub use config::{CalendarDefinition, HolidayDefinition};
pub use date::{days_in_month, days_in_year, is_leap_year, Date};
pub use day_counter::{
    day_count_parameters, day_difference, year_fraction, year_fractions, DayCountConvention,
    DayCountOptions, DayCountParameters, DayCounter,
};
pub use frequency::Frequency;
pub use holiday_calendar::HolidayCalendar;
pub use holiday_rule::{HolidayRule, MovePolicy, WeekdayOrdinal};
pub use month::Month;
pub use movable::{easter, MovableHoliday};
pub use weekday::Weekday;
