//! Project-timeline helpers composed from the calendar queries.
//!
//! Nothing here holds state of its own: every function is a composition of
//! [`roll`](crate::roll), [`offset`](crate::offset) and
//! [`count`](crate::count) against a borrowed [`CalendarSpec`].

use log::trace;

use crate::calendar_spec::CalendarSpec;
use crate::count::count;
use crate::date::Date;
use crate::month::YearMonth;
use crate::offset::offset;
use crate::roll::roll;
use crate::roll_policy::RollPolicy;
use busday_core::errors::Result;

/// Business days within one calendar month of a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCount {
    /// The month.
    pub month: YearMonth,
    /// Business days of the month that fall inside the breakdown range.
    pub business_days: i32,
}

/// Business days within one calendar quarter of a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterCount {
    /// The year.
    pub year: i32,
    /// The quarter (1–4).
    pub quarter: u8,
    /// Business days of the quarter that fall inside the breakdown range.
    pub business_days: i32,
}

/// Calendar and business-day length of `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    /// First day of the range.
    pub start: Date,
    /// Exclusive end of the range.
    pub end: Date,
    /// `end - start`.
    pub calendar_days: i32,
    /// `count(start, end)`.
    pub business_days: i32,
}

/// How [`resolve_business_day`] arrived at its business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The date was already a business day.
    AlreadyBusinessDay(Date),
    /// The date was rolled forward.
    MovedForward {
        /// The requested date.
        from: Date,
        /// The business day it rolled to.
        to: Date,
    },
}

impl Resolution {
    /// The resolved business day.
    pub fn date(&self) -> Date {
        match self {
            Resolution::AlreadyBusinessDay(d) => *d,
            Resolution::MovedForward { to, .. } => *to,
        }
    }
}

/// The date `business_days_elapsed` business days after `start`, rolling
/// `start` forward first if needed.
pub fn milestone(calendar: &CalendarSpec, start: Date, business_days_elapsed: i32) -> Result<Date> {
    offset(calendar, start, business_days_elapsed, RollPolicy::Forward)
}

/// [`milestone`] for several elapsed counts at once, in input order.
pub fn milestones(calendar: &CalendarSpec, start: Date, elapsed: &[i32]) -> Result<Vec<Date>> {
    elapsed
        .iter()
        .map(|&n| milestone(calendar, start, n))
        .collect()
}

/// The business day `date` resolves to under a forward roll.
pub fn resolve_business_day(calendar: &CalendarSpec, date: Date) -> Result<Resolution> {
    let to = roll(calendar, date, RollPolicy::Forward)?;
    Ok(if to == date {
        Resolution::AlreadyBusinessDay(date)
    } else {
        Resolution::MovedForward { from: date, to }
    })
}

/// Calendar and business days in `[start, end)`.
pub fn timeline(calendar: &CalendarSpec, start: Date, end: Date) -> Timeline {
    Timeline {
        start,
        end,
        calendar_days: end - start,
        business_days: count(calendar, start, end),
    }
}

/// Business days per calendar month of `[start, end)`.
///
/// Each month is clamped to the range before counting; months that do not
/// overlap the range are left out.  An empty or reversed range yields no
/// entries.
pub fn month_breakdown(calendar: &CalendarSpec, start: Date, end: Date) -> Vec<MonthCount> {
    partition(start, end, |d| d.start_of_next_month().ok())
        .map(|(from, to)| {
            let entry = MonthCount {
                month: from.year_month(),
                business_days: count(calendar, from, to),
            };
            trace!("{}: {} business days in [{from}, {to})", entry.month, entry.business_days);
            entry
        })
        .collect()
}

/// Business days per calendar quarter of `[start, end)`, clamped like
/// [`month_breakdown`].
pub fn quarter_breakdown(calendar: &CalendarSpec, start: Date, end: Date) -> Vec<QuarterCount> {
    partition(start, end, start_of_next_quarter)
        .map(|(from, to)| {
            let entry = QuarterCount {
                year: from.year(),
                quarter: from.year_month().month().quarter(),
                business_days: count(calendar, from, to),
            };
            trace!(
                "{}-Q{}: {} business days in [{from}, {to})",
                entry.year,
                entry.quarter,
                entry.business_days
            );
            entry
        })
        .collect()
}

fn start_of_next_quarter(date: Date) -> Option<Date> {
    let first_month = date.year_month().month().quarter() * 3 + 1;
    if first_month > 12 {
        Date::from_ymd(date.year() + 1, 1, 1).ok()
    } else {
        Date::from_ymd(date.year(), first_month, 1).ok()
    }
}

/// Split `[start, end)` at the boundaries produced by `next_boundary`.
///
/// A boundary past the supported date range clamps to `end`.
fn partition<F>(start: Date, end: Date, next_boundary: F) -> impl Iterator<Item = (Date, Date)>
where
    F: Fn(Date) -> Option<Date>,
{
    let mut cursor = start;
    std::iter::from_fn(move || {
        if cursor >= end {
            return None;
        }
        let to = next_boundary(cursor).map_or(end, |b| b.min(end));
        let piece = (cursor, to);
        cursor = to;
        Some(piece)
    })
}

/// Borrowing wrapper exposing the timeline helpers as methods.
///
/// ```
/// use busday_calendar::{CalendarSpec, Date, Scheduler};
///
/// let cal = CalendarSpec::weekends_only();
/// let scheduler = Scheduler::new(&cal);
/// let start = Date::from_ymd(2025, 6, 2).unwrap();
/// assert_eq!(
///     scheduler.milestone(start, 10).unwrap(),
///     Date::from_ymd(2025, 6, 16).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scheduler<'a> {
    calendar: &'a CalendarSpec,
}

impl<'a> Scheduler<'a> {
    /// Wrap a calendar.
    pub fn new(calendar: &'a CalendarSpec) -> Self {
        Self { calendar }
    }

    /// The wrapped calendar.
    pub fn calendar(&self) -> &'a CalendarSpec {
        self.calendar
    }

    /// See [`milestone`].
    pub fn milestone(&self, start: Date, business_days_elapsed: i32) -> Result<Date> {
        milestone(self.calendar, start, business_days_elapsed)
    }

    /// See [`milestones`].
    pub fn milestones(&self, start: Date, elapsed: &[i32]) -> Result<Vec<Date>> {
        milestones(self.calendar, start, elapsed)
    }

    /// See [`resolve_business_day`].
    pub fn resolve(&self, date: Date) -> Result<Resolution> {
        resolve_business_day(self.calendar, date)
    }

    /// See [`timeline`].
    pub fn timeline(&self, start: Date, end: Date) -> Timeline {
        timeline(self.calendar, start, end)
    }

    /// See [`month_breakdown`].
    pub fn month_breakdown(&self, start: Date, end: Date) -> Vec<MonthCount> {
        month_breakdown(self.calendar, start, end)
    }

    /// See [`quarter_breakdown`].
    pub fn quarter_breakdown(&self, start: Date, end: Date) -> Vec<QuarterCount> {
        quarter_breakdown(self.calendar, start, end)
    }
}
