//! Movable holidays: Easter and the feasts tied to it, plus the two
//! weekday-anchored holidays that have no fixed date.
//!
//! Every function here is pure and keyed by year.

use crate::date::Date;
use crate::weekday::Weekday;

/// Easter Sunday of `year` (anonymous Gregorian algorithm, Meeus/Jones/Butcher).
pub fn easter(year: i32) -> Date {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd_unchecked(year, month as u8, day as u8)
}

/// A holiday whose date is computed from the year rather than fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovableHoliday {
    /// Thursday before Easter.
    HolyThursday,
    /// Friday before Easter.
    GoodFriday,
    /// Monday after Easter.
    EasterMonday,
    /// Thursday 39 days after Easter.
    AscensionThursday,
    /// Sunday 7 weeks after Easter.
    Pentecost,
    /// Monday after Pentecost.
    WhitMonday,
    /// Sunday 8 weeks after Easter.
    TrinitySunday,
    /// Thursday 60 days after Easter.
    CorpusChristiThursday,
    /// Friday between June 18 and 24 (Finland, Sweden).
    MidsummerEve,
    /// Monday on or before May 24 (Canada).
    VictoriaDay,
}

const ALL_MOVABLE: [MovableHoliday; 10] = [
    MovableHoliday::HolyThursday,
    MovableHoliday::GoodFriday,
    MovableHoliday::EasterMonday,
    MovableHoliday::AscensionThursday,
    MovableHoliday::Pentecost,
    MovableHoliday::WhitMonday,
    MovableHoliday::TrinitySunday,
    MovableHoliday::CorpusChristiThursday,
    MovableHoliday::MidsummerEve,
    MovableHoliday::VictoriaDay,
];

impl MovableHoliday {
    /// Look up a movable holiday by name, ignoring case (`"good friday"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_MOVABLE
            .iter()
            .copied()
            .find(|h| h.name().eq_ignore_ascii_case(name))
    }

    /// Canonical name, as accepted by [`from_name`](Self::from_name).
    pub fn name(&self) -> &'static str {
        match self {
            MovableHoliday::HolyThursday => "Holy Thursday",
            MovableHoliday::GoodFriday => "Good Friday",
            MovableHoliday::EasterMonday => "Easter Monday",
            MovableHoliday::AscensionThursday => "Ascension Thursday",
            MovableHoliday::Pentecost => "Pentecost",
            MovableHoliday::WhitMonday => "Whit Monday",
            MovableHoliday::TrinitySunday => "Trinity Sunday",
            MovableHoliday::CorpusChristiThursday => "Corpus Christi Thursday",
            MovableHoliday::MidsummerEve => "Midsummer Eve",
            MovableHoliday::VictoriaDay => "Victoria Day",
        }
    }

    /// Offset in days from Easter Sunday, for the Easter-relative holidays.
    pub fn easter_offset(&self) -> Option<i32> {
        match self {
            MovableHoliday::HolyThursday => Some(-3),
            MovableHoliday::GoodFriday => Some(-2),
            MovableHoliday::EasterMonday => Some(1),
            MovableHoliday::AscensionThursday => Some(39),
            MovableHoliday::Pentecost => Some(49),
            MovableHoliday::WhitMonday => Some(50),
            MovableHoliday::TrinitySunday => Some(56),
            MovableHoliday::CorpusChristiThursday => Some(60),
            MovableHoliday::MidsummerEve | MovableHoliday::VictoriaDay => None,
        }
    }

    /// The date of this holiday in `year`.
    pub fn date(&self, year: i32) -> Date {
        if let Some(offset) = self.easter_offset() {
            return easter(year) + offset;
        }
        match self {
            MovableHoliday::MidsummerEve => {
                Date::from_ymd_unchecked(year, 6, 18).weekday_on_or_after(Weekday::Friday)
            }
            _ => Date::from_ymd_unchecked(year, 5, 24).weekday_on_or_before(Weekday::Monday),
        }
    }
}

impl std::fmt::Display for MovableHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
