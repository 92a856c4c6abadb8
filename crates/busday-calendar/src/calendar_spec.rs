//! An immutable business-day calendar made of a
//! [`WeekPattern`] and a holiday set.
//!
//! Holidays are normalised on construction: sorted, deduplicated, and any
//! holiday falling on a weekday the pattern already excludes is dropped.
//! After normalisation every stored holiday is an eligible weekday, which lets
//! range queries subtract holidays with two binary searches.
//!
//! A calendar is never patched; build a new one when the holidays or the week
//! pattern change.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::CalendarSpecData;
use crate::date::{weekday_index, Date};
use crate::roll_policy::RollPolicy;
use crate::week_pattern::WeekPattern;
use crate::{count, offset, predicate, roll};
use busday_core::errors::Result;

/// A business-day calendar.
///
/// A date is a business day iff its weekday is flagged in the week pattern
/// and it is not a holiday.  `CalendarSpec` is `Send + Sync` and is meant to
/// be shared by reference across concurrent queries.
///
/// # Example
/// ```
/// use busday_calendar::{CalendarSpec, Date, RollPolicy, WeekPattern};
///
/// let july4 = Date::from_ymd(2025, 7, 4).unwrap();
/// let cal = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, [july4]);
///
/// let thu = Date::from_ymd(2025, 7, 3).unwrap();
/// let next = cal.offset(thu, 1, RollPolicy::Raise).unwrap();
/// assert_eq!(next, Date::from_ymd(2025, 7, 7).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarSpecData", into = "CalendarSpecData")]
pub struct CalendarSpec {
    week: WeekPattern,
    holidays: Vec<Date>,
}

impl CalendarSpec {
    /// Create a calendar from a week pattern and a collection of holidays.
    ///
    /// Duplicate holidays collapse; holidays on non-eligible weekdays are
    /// ignored.
    pub fn new(week: WeekPattern, holidays: impl IntoIterator<Item = Date>) -> Self {
        let mut holidays: Vec<Date> = holidays.into_iter().collect();
        let given = holidays.len();
        holidays.sort_unstable();
        holidays.dedup();
        holidays.retain(|d| week.is_set(weekday_index(d.serial())));

        if week.is_empty() {
            warn!("calendar built with an empty week pattern; no date is a business day");
        }
        debug!(
            "calendar built: week pattern {week}, {} holidays kept of {given} given",
            holidays.len()
        );
        Self { week, holidays }
    }

    /// Create a calendar from a slice of weekday flags (Monday first).
    ///
    /// Fails with `InvalidCalendar` unless `week` has exactly seven entries.
    pub fn try_new(week: &[bool], holidays: impl IntoIterator<Item = Date>) -> Result<Self> {
        Ok(Self::new(WeekPattern::try_from_slice(week)?, holidays))
    }

    /// Monday to Friday, no holidays.
    pub fn weekends_only() -> Self {
        Self::new(WeekPattern::MONDAY_TO_FRIDAY, [])
    }

    /// Every day is a business day.
    pub fn null() -> Self {
        Self::new(WeekPattern::ALL_DAYS, [])
    }

    /// Begin building a calendar.
    pub fn builder() -> CalendarSpecBuilder {
        CalendarSpecBuilder::default()
    }

    /// Load a calendar from JSON of the form
    /// `{"week_pattern": "1111100", "holidays": ["2025-07-04"]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        CalendarSpecData::from_json(json)?.try_into()
    }

    /// Serialise to the JSON form accepted by [`CalendarSpec::from_json`].
    pub fn to_json(&self) -> Result<String> {
        CalendarSpecData::from(self.clone()).to_json()
    }

    /// A calendar whose business days are those that are business days in
    /// both `self` and `other`.
    pub fn join(&self, other: &CalendarSpec) -> CalendarSpec {
        let (a, b) = (self.week.flags(), other.week.flags());
        let week = WeekPattern::new(std::array::from_fn(|i| a[i] && b[i]));
        Self::new(
            week,
            self.holidays.iter().chain(other.holidays.iter()).copied(),
        )
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The weekly pattern.
    pub fn week_pattern(&self) -> &WeekPattern {
        &self.week
    }

    /// The normalised holidays, sorted ascending.
    pub fn holidays(&self) -> &[Date] {
        &self.holidays
    }

    /// `true` if no weekday is eligible, so no date is ever a business day.
    pub fn is_degenerate(&self) -> bool {
        self.week.is_empty()
    }

    /// `true` if `date` is one of the (normalised) holidays.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.binary_search(&date).is_ok()
    }

    /// Number of holidays strictly before `date`.
    pub(crate) fn holidays_before(&self, date: Date) -> usize {
        self.holidays.partition_point(|h| *h < date)
    }

    /// Number of holidays on or before `date`.
    pub(crate) fn holidays_through(&self, date: Date) -> usize {
        self.holidays.partition_point(|h| *h <= date)
    }

    /// Number of holidays in `[begin, end)`.
    pub fn holidays_in(&self, begin: Date, end: Date) -> usize {
        if begin >= end {
            return 0;
        }
        self.holidays_before(end) - self.holidays_before(begin)
    }

    /// Upper bound on the calendar days a roll scan may inspect.
    ///
    /// Any window of `7 * (H + 1)` days holds at least `H + 1` eligible
    /// weekdays, so at least one of them is not a holiday.
    pub(crate) fn scan_limit(&self) -> i64 {
        7 * (self.holidays.len() as i64 + 1)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// See [`predicate::is_business_day`].
    pub fn is_business_day(&self, date: Date) -> bool {
        predicate::is_business_day(self, date)
    }

    /// See [`roll::roll`].
    pub fn roll(&self, date: Date, policy: RollPolicy) -> Result<Date> {
        roll::roll(self, date, policy)
    }

    /// See [`offset::offset`].
    pub fn offset(&self, date: Date, n: i32, policy: RollPolicy) -> Result<Date> {
        offset::offset(self, date, n, policy)
    }

    /// See [`count::count`].
    pub fn count(&self, begin: Date, end: Date) -> i32 {
        count::count(self, begin, end)
    }

    /// Iterate over the business days in `[begin, end)` in ascending order.
    pub fn business_days(&self, begin: Date, end: Date) -> BusinessDays<'_> {
        BusinessDays {
            calendar: self,
            next: begin.serial(),
            end: end.serial(),
        }
    }
}

impl Default for CalendarSpec {
    fn default() -> Self {
        Self::weekends_only()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`CalendarSpec`].
///
/// Defaults to a Monday–Friday week with no holidays.
#[derive(Debug, Clone, Default)]
pub struct CalendarSpecBuilder {
    week: WeekPattern,
    holidays: Vec<Date>,
}

impl CalendarSpecBuilder {
    /// Set the week pattern.
    pub fn with_week_pattern(mut self, week: WeekPattern) -> Self {
        self.week = week;
        self
    }

    /// Add a single holiday.
    pub fn with_holiday(mut self, date: Date) -> Self {
        self.holidays.push(date);
        self
    }

    /// Add several holidays.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.holidays.extend(dates);
        self
    }

    /// Build the calendar.
    pub fn build(self) -> CalendarSpec {
        CalendarSpec::new(self.week, self.holidays)
    }
}

// ── Business-day iterator ─────────────────────────────────────────────────────

/// Lazy iterator over the business days of a half-open range.
///
/// Created by [`CalendarSpec::business_days`].
#[derive(Debug, Clone)]
pub struct BusinessDays<'a> {
    calendar: &'a CalendarSpec,
    next: i32,
    end: i32,
}

impl Iterator for BusinessDays<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        while self.next < self.end {
            let date = Date::from_serial_unchecked(self.next);
            self.next += 1;
            if self.calendar.is_business_day(date) {
                return Some(date);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end.saturating_sub(self.next).max(0) as usize))
    }
}

impl std::iter::FusedIterator for BusinessDays<'_> {}
