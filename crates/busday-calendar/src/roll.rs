//! Rolling a date onto a business day under a [`RollPolicy`].

use log::debug;

use crate::calendar_spec::CalendarSpec;
use crate::date::Date;
use crate::predicate::is_business_day;
use crate::roll_policy::RollPolicy;
use busday_core::errors::{Error, Result};

/// Resolve `date` to a business day under `policy`.
///
/// A business day is returned unchanged for every policy, `Raise` included.
///
/// # Errors
/// * `NonBusinessDay`: `policy` is `Raise` and `date` is not a business day.
/// * `NoBusinessDayReachable`: the calendar has no eligible weekday, or the
///   bounded scan found nothing.
/// * `Date`: the scan ran off the supported date range.
pub fn roll(calendar: &CalendarSpec, date: Date, policy: RollPolicy) -> Result<Date> {
    if is_business_day(calendar, date) {
        return Ok(date);
    }
    match policy {
        RollPolicy::Raise => Err(Error::NonBusinessDay(date.to_string())),
        RollPolicy::Forward => scan(calendar, date, 1),
        RollPolicy::Backward => scan(calendar, date, -1),
        RollPolicy::ModifiedFollowing => modified(calendar, date, 1),
        RollPolicy::ModifiedPreceding => modified(calendar, date, -1),
    }
}

/// Scan in direction `step` first; fall back to the other direction if that
/// leaves the month of `date`.
fn modified(calendar: &CalendarSpec, date: Date, step: i32) -> Result<Date> {
    match scan(calendar, date, step) {
        Ok(rolled) if rolled.year_month() == date.year_month() => Ok(rolled),
        // Running off the date range also leaves the month.
        Ok(_) | Err(Error::Date(_)) => scan(calendar, date, -step),
        Err(e) => Err(e),
    }
}

/// First business day at or beyond `from` in direction `step` (±1).
pub(crate) fn scan(calendar: &CalendarSpec, from: Date, step: i32) -> Result<Date> {
    if calendar.is_degenerate() {
        return Err(Error::NoBusinessDayReachable {
            from: from.to_string(),
            scanned: 0,
        });
    }
    let limit = calendar.scan_limit();
    let mut date = from;
    for _ in 0..limit {
        if is_business_day(calendar, date) {
            return Ok(date);
        }
        date = date.add_days(step)?;
    }
    debug!("roll scan from {from} gave up after {limit} days");
    Err(Error::NoBusinessDayReachable {
        from: from.to_string(),
        scanned: limit,
    })
}
