//! Offsetting a date by a signed number of business days.
//!
//! The result is defined step by step: roll to a business day, then move to
//! the next (or previous) business day `|n|` times.  It is computed in closed
//! form instead: whole weeks are jumped at once, the residual is walked over
//! at most six calendar days, and the walk is repeated for however many
//! holidays were jumped over.  Holidays are eligible weekdays after
//! normalisation, so each pass only needs two binary searches.

use crate::calendar_spec::CalendarSpec;
use crate::date::{weekday_index, Date};
use crate::roll::roll;
use crate::roll_policy::RollPolicy;
use crate::week_pattern::WeekPattern;
use busday_core::errors::{Error, Result};

/// Move `date` by `n` business days.
///
/// `date` is first rolled under `policy`; `Raise` therefore requires `date`
/// to be a business day already.  Offsetting a business day by `n` and then
/// by `-n` returns the original date.
///
/// # Errors
/// Whatever [`roll`] reports for the starting date, or `Date` if the result
/// falls outside the supported range.
pub fn offset(calendar: &CalendarSpec, date: Date, n: i32, policy: RollPolicy) -> Result<Date> {
    let base = roll(calendar, date, policy)?;
    let steps = i64::from(n).abs();
    match n.signum() {
        0 => Ok(base),
        1 => advance(calendar, base, steps, 1),
        _ => advance(calendar, base, steps, -1),
    }
}

/// Move from business day `base` by `steps` business days in direction
/// `dir` (±1).
fn advance(calendar: &CalendarSpec, base: Date, steps: i64, dir: i32) -> Result<Date> {
    let week = calendar.week_pattern();
    let mut date = base;
    let mut remaining = steps;
    while remaining > 0 {
        let target = advance_weekdays(week, date, remaining, dir)?;
        // Holidays passed over in (date, target] or [target, date).
        remaining = if dir > 0 {
            calendar.holidays_through(target) - calendar.holidays_through(date)
        } else {
            calendar.holidays_before(date) - calendar.holidays_before(target)
        } as i64;
        date = target;
    }
    Ok(date)
}

/// The `k`-th eligible weekday strictly beyond `from` in direction `dir`,
/// ignoring holidays.  `from` must itself be an eligible weekday.
fn advance_weekdays(week: &WeekPattern, from: Date, k: i64, dir: i32) -> Result<Date> {
    let per_week = i64::from(week.business_days_per_week());
    let jump = (k / per_week) * 7 * i64::from(dir);
    let jump = i32::try_from(jump)
        .map_err(|_| Error::Date(format!("offset of {k} business days from {from} out of range")))?;
    let mut date = from.add_days(jump)?;
    let mut left = k % per_week;
    while left > 0 {
        date = date.add_days(dir)?;
        if week.is_set(weekday_index(date.serial())) {
            left -= 1;
        }
    }
    Ok(date)
}
