//! # busday-calendar
//!
//! Business-day calendar engine: dates, week patterns, holiday calendars,
//! and the roll / offset / count queries built on them.
//!
//! Build one [`CalendarSpec`] and query it from as many threads as needed;
//! every query is a pure function of the calendar and its arguments.
//!
//! ```
//! use busday_calendar::{CalendarSpec, Date, RollPolicy};
//!
//! let cal = CalendarSpec::weekends_only();
//! let sat = Date::from_ymd(2025, 6, 14).unwrap();
//! assert!(!cal.is_business_day(sat));
//! assert_eq!(cal.roll(sat, RollPolicy::Forward).unwrap().to_string(), "2025-06-16");
//! assert_eq!(
//!     cal.count("2025-06-09".parse().unwrap(), "2025-06-16".parse().unwrap()),
//!     5
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarSpec`, its builder, and the business-day iterator.
pub mod calendar_spec;

/// Serialisable calendar definition.
pub mod config;

/// Business-day counting over half-open ranges.
pub mod count;

/// `Date` type.
pub mod date;

/// `Month` and `YearMonth`.
pub mod month;

/// Offsetting by business days.
pub mod offset;

/// Single-date business-day classification.
pub mod predicate;

/// Rolling onto business days.
pub mod roll;

/// Roll policies.
pub mod roll_policy;

/// Milestones and per-period breakdowns.
pub mod scheduler;

/// `WeekPattern`, the weekly template of eligible weekdays.
pub mod week_pattern;

/// `Weekday`, the day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar_spec::{BusinessDays, CalendarSpec, CalendarSpecBuilder};
pub use config::CalendarSpecData;
pub use count::count;
pub use date::Date;
pub use month::{Month, YearMonth};
pub use offset::offset;
pub use predicate::is_business_day;
pub use roll::roll;
pub use roll_policy::RollPolicy;
pub use scheduler::{
    milestone, milestones, month_breakdown, quarter_breakdown, resolve_business_day, timeline,
    MonthCount, QuarterCount, Resolution, Scheduler, Timeline,
};
pub use week_pattern::WeekPattern;
pub use weekday::Weekday;
