//! Business-day classification of a single date.

use crate::calendar_spec::CalendarSpec;
use crate::date::{weekday_index, Date};

/// Return `true` if `date` is a business day in `calendar`: its weekday is
/// flagged in the week pattern and it is not a holiday.
///
/// O(log H) in the number of holidays.
#[inline]
pub fn is_business_day(calendar: &CalendarSpec, date: Date) -> bool {
    calendar.week_pattern().is_set(weekday_index(date.serial())) && !calendar.is_holiday(date)
}
