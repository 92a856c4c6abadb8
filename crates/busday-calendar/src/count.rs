//! Counting business days in a half-open date range.

use crate::calendar_spec::CalendarSpec;
use crate::date::{weekday_index, Date};

/// Number of business days `d` with `begin <= d < end`.
///
/// Antisymmetric: when `begin > end` the result is `-count(calendar, end,
/// begin)`.  `count(x, x)` is zero.
///
/// Runs in O(log H): full weeks contribute `business_days_per_week` each,
/// the remaining (< 7) days are checked one by one, and holidays in range
/// are subtracted via binary search.
pub fn count(calendar: &CalendarSpec, begin: Date, end: Date) -> i32 {
    if begin > end {
        return -count(calendar, end, begin);
    }
    let week = calendar.week_pattern();
    let span = end - begin;
    let full_weeks = span / 7;

    let mut total = full_weeks * week.business_days_per_week();
    let first = weekday_index(begin.serial());
    for i in 0..(span % 7) as u8 {
        if week.is_set((first + i) % 7) {
            total += 1;
        }
    }
    total - calendar.holidays_in(begin, end) as i32
}
