//! # busday
//!
//! Business-day calendar engine.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `busday-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! busday = "0.1"
//! ```
//!
//! ```rust
//! use busday::calendar::{CalendarSpec, Date, RollPolicy, WeekPattern};
//!
//! let july4 = Date::from_ymd(2025, 7, 4).unwrap();
//! let cal = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, [july4]);
//! let thu = Date::from_ymd(2025, 7, 3).unwrap();
//! assert_eq!(
//!     cal.offset(thu, 1, RollPolicy::Raise).unwrap(),
//!     Date::from_ymd(2025, 7, 7).unwrap()
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and type aliases.
pub use busday_core as core;

/// Dates, week patterns, calendars, and business-day queries.
pub use busday_calendar as calendar;

pub use busday_core::{Error, Result};
