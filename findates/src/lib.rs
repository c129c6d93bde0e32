//! # findates
//!
//! Financial business-calendar facts: whether a date is a holiday in a
//! jurisdiction, how to roll a date to a business day, and how to turn the
//! span between two dates into a year fraction.
//!
//! This crate is a façade that re-exports the workspace crates. Application
//! code should depend on it rather than on the individual `fd-*` crates.
//!
//! ```rust
//! use findates::prelude::*;
//!
//! let canada = get_calendar("ca")?;
//! let saturday: Date = "21 Jan 2012".parse()?;
//! assert_eq!(roll(saturday, &canada, BusinessDayConvention::Following), "23 Jan 2012".parse::<Date>()?);
//!
//! let days = day_difference("1 Dec 2002".parse()?, "31 Dec 2002".parse()?, "30e/360", DayCountOptions::default())?;
//! assert_eq!(days, 29);
//! # Ok::<(), findates::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fd_core as core;

/// Dates, calendars, rolling, and day counting.
pub use fd_time as time;

/// The names most callers need.
pub mod prelude {
    pub use fd_core::{Error, Real, Result, Time};
    pub use fd_time::calendars::get_calendar;
    pub use fd_time::{
        day_count_parameters, day_difference, first_business_day_of_month,
        last_business_day_of_month, roll, roll_by_name, year_fraction, year_fractions,
        BusinessDayConvention, Calendar, CalendarDefinition, Date, DayCountConvention,
        DayCountOptions, DayCounter, Frequency, HolidayCalendar, MovePolicy, Weekday,
    };
}
