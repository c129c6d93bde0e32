//! Rule-based holiday calendar.
//!
//! A [`HolidayCalendar`] is built once from [`HolidayRule`]s and then
//! queried. For any date, the rules are evaluated in priority order:
//!
//! 1. movable holidays (never moved),
//! 2. fixed-date holidays (moved per their [`MovePolicy`] when they fall on a
//!    weekend day, which adds a second, observed holiday),
//! 3. n-th weekday holidays (never moved),
//! 4. the weekend fallback, reported as `"weekend"`.
//!
//! The full set of holidays of a year, observed dates included, is computed
//! on the first query for that year and cached for the lifetime of the
//! calendar. Registering a rule clears the caches.

use crate::calendar::Calendar;
use crate::date::{days_in_month, days_in_year, Date};
use crate::holiday_rule::{HolidayRule, MovePolicy, WeekdayOrdinal};
use crate::month::Month;
use crate::movable::MovableHoliday;
use crate::weekday::Weekday;
use fd_core::errors::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace, warn};

/// Name reported for the weekend fallback.
pub const WEEKEND: &str = "weekend";

// ── Per-year cache ────────────────────────────────────────────────────────────

/// Read-through cache keyed by year.
///
/// Values are computed outside the lock; if two threads race on the same
/// year, the first insert wins and both observe the same value.
#[derive(Debug)]
struct YearCache<T> {
    years: RwLock<HashMap<i32, Arc<T>>>,
}

impl<T> YearCache<T> {
    fn get_or_compute(&self, year: i32, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some(hit) = self
            .years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Arc::clone(hit);
        }
        let value = Arc::new(compute());
        let mut years = self.years.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(years.entry(year).or_insert(value))
    }

    fn clear(&mut self) {
        self.years
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.years.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<T> Default for YearCache<T> {
    fn default() -> Self {
        Self {
            years: RwLock::new(HashMap::new()),
        }
    }
}

// ── Registered rules ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
struct FixedEntry {
    name: String,
    policy: MovePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NthWeekdayEntry {
    weekday: Weekday,
    ordinal: WeekdayOrdinal,
    name: String,
}

/// What a date matched, before any move is applied.
#[derive(Debug, Clone, Copy)]
struct Match<'a> {
    name: &'a str,
    /// Move policy of a fixed-date match; `None` for every other kind.
    policy: MovePolicy,
}

/// A holiday calendar for a single jurisdiction, defined by rules.
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    name: String,
    weekend: [bool; 7],
    fixed: HashMap<(Month, u8), FixedEntry>,
    nth_weekday: HashMap<Month, Vec<NthWeekdayEntry>>,
    movable: BTreeMap<MovableHoliday, String>,
    movable_cache: YearCache<HashMap<Date, MovableHoliday>>,
    holiday_cache: YearCache<HashMap<Date, String>>,
}

impl Clone for HolidayCalendar {
    /// Clones the rules; the clone starts with empty caches.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            weekend: self.weekend,
            fixed: self.fixed.clone(),
            nth_weekday: self.nth_weekday.clone(),
            movable: self.movable.clone(),
            movable_cache: YearCache::default(),
            holiday_cache: YearCache::default(),
        }
    }
}

impl HolidayCalendar {
    /// An empty calendar: every day is a business day until rules are added.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Register a holiday from a textual descriptor.
    ///
    /// See [`crate::holiday_rule`] for the descriptor language. `name` is the
    /// holiday's name; by convention weekend days are registered with the
    /// name `"weekend"`.
    ///
    /// # Errors
    /// [`Error::Configuration`] if the descriptor is not understood, or if it
    /// would leave no business day in the week.
    pub fn add_holiday(&mut self, name: &str, descriptor: &str, policy: MovePolicy) -> Result<()> {
        let rule = HolidayRule::parse(name, descriptor, policy)?;
        self.add_rule(rule)
    }

    /// Register an already-parsed rule.
    ///
    /// A fixed-date rule replaces any earlier rule for the same month and
    /// day.
    pub fn add_rule(&mut self, rule: HolidayRule) -> Result<()> {
        trace!(calendar = %self.name, ?rule, "registering holiday rule");
        match rule {
            HolidayRule::WeekendDay(weekday) => {
                let others_all_weekend = self
                    .weekend
                    .iter()
                    .enumerate()
                    .all(|(i, &flag)| flag || i == weekday.index());
                if others_all_weekend {
                    return Err(Error::Configuration(format!(
                        "marking {weekday} as weekend leaves no business day in the week of calendar '{}'",
                        self.name
                    )));
                }
                self.weekend[weekday.index()] = true;
            }
            HolidayRule::FixedDate {
                month,
                day,
                name,
                policy,
            } => {
                if let Some(old) = self.fixed.insert((month, day), FixedEntry { name, policy }) {
                    warn!(
                        calendar = %self.name,
                        replaced = %old.name,
                        "{month} {day} was already a holiday; the earlier rule is overwritten"
                    );
                }
            }
            HolidayRule::NthWeekday {
                month,
                weekday,
                ordinal,
                name,
            } => {
                self.nth_weekday
                    .entry(month)
                    .or_default()
                    .push(NthWeekdayEntry {
                        weekday,
                        ordinal,
                        name,
                    });
            }
            // The policy of a movable holiday is never applied.
            HolidayRule::Movable { holiday, name, .. } => {
                self.movable.insert(holiday, name);
            }
        }
        self.movable_cache.clear();
        self.holiday_cache.clear();
        Ok(())
    }

    /// Weekdays marked as non-business.
    pub fn weekend_days(&self) -> Vec<Weekday> {
        crate::weekday::ALL_WEEKDAYS
            .iter()
            .copied()
            .filter(|w| self.weekend[w.index()])
            .collect()
    }

    /// Name of the holiday on `date`, if it is one.
    ///
    /// Weekend days report `"weekend"`; an observed (moved) holiday reports
    /// the name of the holiday it stands in for.
    pub fn holiday_name(&self, date: Date) -> Option<String> {
        self.holidays_of_year(date.year()).get(&date).cloned()
    }

    /// All holidays in `[from, to]`, in date order.
    ///
    /// With `include_weekends == false`, days that fall on a weekend day are
    /// skipped whatever their name.
    pub fn holidays_between(&self, from: Date, to: Date, include_weekends: bool) -> Vec<(Date, String)> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if include_weekends || !self.is_weekend(d) {
                if let Some(name) = self.holiday_name(d) {
                    holidays.push((d, name));
                }
            }
            d += 1;
        }
        holidays
    }

    /// Number of years whose holiday set is currently cached.
    pub fn cached_years(&self) -> usize {
        self.holiday_cache.len()
    }

    // ── Evaluation ────────────────────────────────────────────────────────────

    fn holidays_of_year(&self, year: i32) -> Arc<HashMap<Date, String>> {
        self.holiday_cache
            .get_or_compute(year, || self.compute_year(year))
    }

    fn movable_dates(&self, year: i32) -> Arc<HashMap<Date, MovableHoliday>> {
        self.movable_cache.get_or_compute(year, || {
            let table: HashMap<Date, MovableHoliday> =
                self.movable.keys().map(|h| (h.date(year), *h)).collect();
            if !table.is_empty() {
                debug!(calendar = %self.name, year, count = table.len(), "computed movable holidays");
            }
            table
        })
    }

    /// Evaluate the rules for a single date without applying any move.
    fn classify(&self, date: Date) -> Option<Match<'_>> {
        if let Some(holiday) = self.movable_dates(date.year()).get(&date) {
            if let Some(name) = self.movable.get(holiday) {
                return Some(Match {
                    name: name.as_str(),
                    policy: MovePolicy::None,
                });
            }
        }

        let (year, m, day) = date.ymd();
        let month = Month::from_number(m)?;
        if let Some(entry) = self.fixed.get(&(month, day)) {
            return Some(Match {
                name: entry.name.as_str(),
                policy: entry.policy,
            });
        }

        let weekday = date.weekday();
        if let Some(rules) = self.nth_weekday.get(&month) {
            let month_len = days_in_month(year, m);
            if let Some(rule) = rules
                .iter()
                .find(|r| r.weekday == weekday && r.ordinal.matches(day, month_len))
            {
                return Some(Match {
                    name: rule.name.as_str(),
                    policy: MovePolicy::None,
                });
            }
        }

        if self.weekend[weekday.index()] {
            return Some(Match {
                name: WEEKEND,
                policy: MovePolicy::None,
            });
        }
        None
    }

    /// The observed date for a holiday on `date` that must move.
    ///
    /// Scans for the nearest day that is neither weekend nor holiday, using
    /// the rules alone (other moves are not considered).
    fn move_holiday(&self, date: Date, policy: MovePolicy) -> Date {
        let mut next = date + 1;
        while self.classify(next).is_some() {
            next += 1;
        }
        if policy != MovePolicy::Closest {
            return next;
        }
        let mut prev = date - 1;
        while self.classify(prev).is_some() {
            prev -= 1;
        }
        if date - prev < next - date {
            prev
        } else {
            next
        }
    }

    /// The observed date of the fixed-date holiday on `date`, if it moves.
    fn observed(&self, date: Date) -> Option<(Date, &str)> {
        if !self.is_weekend(date) {
            return None;
        }
        match self.classify(date)? {
            Match {
                policy: MovePolicy::None,
                ..
            } => None,
            Match { name, policy } => Some((self.move_holiday(date, policy), name)),
        }
    }

    fn compute_year(&self, year: i32) -> HashMap<Date, String> {
        let mut holidays = HashMap::new();
        let first = Date::from_ymd_unchecked(year, 1, 1);
        for offset in 0..days_in_year(year) {
            let date = first + offset;
            if let Some(m) = self.classify(date) {
                holidays.insert(date, m.name.to_string());
            }
        }

        // Observed dates, including those spilling over from neighbouring
        // years (e.g. January 1 on a Saturday observed on December 31).
        for y in [year - 1, year, year + 1] {
            for &(month, day) in self.fixed.keys() {
                if day > days_in_month(y, month.number()) {
                    continue;
                }
                let date = Date::from_ymd_unchecked(y, month.number(), day);
                if let Some((moved, name)) = self.observed(date) {
                    if moved.year() == year {
                        holidays.entry(moved).or_insert_with(|| name.to_string());
                    }
                }
            }
        }

        debug!(calendar = %self.name, year, count = holidays.len(), "computed holiday set");
        holidays
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays_of_year(date.year()).contains_key(&date)
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekend[date.weekday().index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn weekend_calendar() -> HolidayCalendar {
        let mut cal = HolidayCalendar::new("Test");
        cal.add_holiday(WEEKEND, "Saturday", MovePolicy::None).unwrap();
        cal.add_holiday(WEEKEND, "Sunday", MovePolicy::None).unwrap();
        cal
    }

    #[test]
    fn empty_calendar_has_no_holidays() {
        let cal = HolidayCalendar::new("Empty");
        assert!(!cal.is_holiday(date(2012, 1, 1)));
        assert!(!cal.is_holiday(date(2012, 1, 7)));
        assert!(cal.weekend_days().is_empty());
    }

    #[test]
    fn weekend_fallback_name() {
        let cal = weekend_calendar();
        assert_eq!(cal.holiday_name(date(2012, 1, 21)).as_deref(), Some(WEEKEND));
        assert_eq!(cal.holiday_name(date(2012, 1, 23)), None);
        assert_eq!(cal.weekend_days(), vec![Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn fixed_holiday_moves_to_next() {
        let mut cal = weekend_calendar();
        cal.add_holiday("New Year's Day", "January 1st", MovePolicy::Next).unwrap();
        // 2012-01-01 is a Sunday
        assert!(cal.is_holiday(date(2012, 1, 1)));
        assert!(cal.is_holiday(date(2012, 1, 2)));
        assert_eq!(cal.holiday_name(date(2012, 1, 2)).as_deref(), Some("New Year's Day"));
        assert!(!cal.is_holiday(date(2012, 1, 3)));
    }

    #[test]
    fn unmoved_fixed_holiday_stays_put() {
        let mut cal = weekend_calendar();
        cal.add_holiday("New Year's Day", "January 1st", MovePolicy::None).unwrap();
        assert!(cal.is_holiday(date(2012, 1, 1)));
        assert!(!cal.is_holiday(date(2012, 1, 2)));
    }

    #[test]
    fn closest_moves_saturday_back_and_sunday_forward() {
        let mut cal = weekend_calendar();
        cal.add_holiday("Independence Day", "July 4th", MovePolicy::Closest).unwrap();
        // 2015-07-04 is a Saturday → Friday 3rd
        assert!(cal.is_holiday(date(2015, 7, 3)));
        assert!(!cal.is_holiday(date(2015, 7, 6)));
        // 2010-07-04 is a Sunday → Monday 5th
        assert!(cal.is_holiday(date(2010, 7, 5)));
        assert!(!cal.is_holiday(date(2010, 7, 2)));
    }

    #[test]
    fn closest_tie_goes_forward() {
        let mut cal = HolidayCalendar::new("Sundays");
        cal.add_holiday(WEEKEND, "Sunday", MovePolicy::None).unwrap();
        cal.add_holiday("New Year's Day", "January 1st", MovePolicy::Closest).unwrap();
        // 2012-01-01 is a Sunday; Saturday and Monday are both one day away
        assert_eq!(cal.holiday_name(date(2012, 1, 2)).as_deref(), Some("New Year's Day"));
        assert!(!cal.is_holiday(date(2011, 12, 31)));
    }

    #[test]
    fn move_skips_adjacent_holiday() {
        let mut cal = weekend_calendar();
        cal.add_holiday("Christmas", "December 25th", MovePolicy::Next).unwrap();
        cal.add_holiday("Boxing Day", "December 26th", MovePolicy::Next).unwrap();
        // 2011-12-25 is a Sunday, 26th is Boxing Day → Christmas observed 27th
        assert!(cal.is_holiday(date(2011, 12, 26)));
        assert!(cal.is_holiday(date(2011, 12, 27)));
        assert_eq!(cal.holiday_name(date(2011, 12, 27)).as_deref(), Some("Christmas"));
        assert!(!cal.is_holiday(date(2011, 12, 28)));
    }

    #[test]
    fn observed_date_spills_into_previous_year() {
        let mut cal = weekend_calendar();
        cal.add_holiday("New Year's Day", "January 1st", MovePolicy::Closest).unwrap();
        // 2011-01-01 is a Saturday → observed Friday 2010-12-31
        assert!(cal.is_holiday(date(2010, 12, 31)));
        assert_eq!(cal.holiday_name(date(2010, 12, 31)).as_deref(), Some("New Year's Day"));
    }

    #[test]
    fn movable_holidays_never_move() {
        let mut cal = weekend_calendar();
        cal.add_holiday("Pentecost", "Pentecost", MovePolicy::Next).unwrap();
        // Pentecost 2012 is Sunday May 27; Monday 28 is not added.
        assert_eq!(cal.holiday_name(date(2012, 5, 27)).as_deref(), Some("Pentecost"));
        assert!(!cal.is_holiday(date(2012, 5, 28)));
    }

    #[test]
    fn movable_takes_precedence_over_fixed() {
        let mut cal = weekend_calendar();
        cal.add_holiday("Fixed", "May 27th", MovePolicy::Next).unwrap();
        cal.add_holiday("Pentecost", "Pentecost", MovePolicy::None).unwrap();
        // 2012-05-27 is Pentecost Sunday: the movable rule wins, so the
        // fixed rule's move never happens.
        assert_eq!(cal.holiday_name(date(2012, 5, 27)).as_deref(), Some("Pentecost"));
        assert!(!cal.is_holiday(date(2012, 5, 28)));
        // 2018-05-27 is an ordinary Sunday; the fixed rule moves.
        assert_eq!(cal.holiday_name(date(2018, 5, 28)).as_deref(), Some("Fixed"));
    }

    #[test]
    fn nth_and_last_weekday() {
        let mut cal = weekend_calendar();
        cal.add_holiday("MLK", "3rd Monday in January", MovePolicy::None).unwrap();
        cal.add_holiday("Spring Bank Holiday", "last Monday in May", MovePolicy::None).unwrap();
        assert!(cal.is_holiday(date(2012, 1, 16)));
        assert!(!cal.is_holiday(date(2012, 1, 9)));
        assert!(cal.is_holiday(date(2012, 5, 28)));
        assert!(!cal.is_holiday(date(2012, 5, 21)));
    }

    #[test]
    fn fixed_rule_overwrites_silently() {
        let mut cal = HolidayCalendar::new("Test");
        cal.add_holiday("First", "May 1st", MovePolicy::None).unwrap();
        cal.add_holiday("Second", "May 1st", MovePolicy::None).unwrap();
        assert_eq!(cal.holiday_name(date(2012, 5, 1)).as_deref(), Some("Second"));
    }

    #[test]
    fn seven_weekend_days_rejected() {
        let mut cal = HolidayCalendar::new("Test");
        for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"] {
            cal.add_holiday(WEEKEND, day, MovePolicy::None).unwrap();
        }
        assert!(matches!(
            cal.add_holiday(WEEKEND, "Sunday", MovePolicy::None),
            Err(Error::Configuration(_))
        ));
        // re-marking an existing weekend day is fine
        cal.add_holiday(WEEKEND, "Monday", MovePolicy::None).unwrap();
    }

    #[test]
    fn late_registration_clears_cache() {
        let mut cal = weekend_calendar();
        assert!(!cal.is_holiday(date(2012, 7, 2)));
        assert_eq!(cal.cached_years(), 1);
        cal.add_holiday("Canada Day", "July 1st", MovePolicy::Next).unwrap();
        assert_eq!(cal.cached_years(), 0);
        assert!(cal.is_holiday(date(2012, 7, 2)));
    }

    #[test]
    fn clone_keeps_rules() {
        let mut cal = weekend_calendar();
        cal.add_holiday("Christmas", "December 25th", MovePolicy::Next).unwrap();
        assert!(cal.is_holiday(date(2011, 12, 26)));
        let copy = cal.clone();
        assert_eq!(copy.cached_years(), 0);
        assert!(copy.is_holiday(date(2011, 12, 26)));
    }

    #[test]
    fn holidays_between_lists_in_order() {
        let mut cal = weekend_calendar();
        cal.add_holiday("Christmas", "December 25th", MovePolicy::Next).unwrap();
        cal.add_holiday("Boxing Day", "December 26th", MovePolicy::Next).unwrap();
        let list = cal.holidays_between(date(2011, 12, 24), date(2011, 12, 28), false);
        assert_eq!(
            list,
            vec![
                (date(2011, 12, 26), "Boxing Day".to_string()),
                (date(2011, 12, 27), "Christmas".to_string()),
            ]
        );
        let with_weekends = cal.holidays_between(date(2011, 12, 24), date(2011, 12, 28), true);
        assert_eq!(with_weekends.len(), 4);
        assert_eq!(with_weekends[0], (date(2011, 12, 24), WEEKEND.to_string()));
    }
}
