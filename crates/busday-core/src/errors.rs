//! Error types for busday.
//!
//! Every fallible operation in the workspace reports one variant of the
//! single `thiserror`-derived [`Error`] enum.  The `ensure!` and `fail!`
//! convenience macros short-circuit a function with the matching variant.

use thiserror::Error;

/// The top-level error type used throughout busday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed calendar definition (e.g. a week pattern without exactly
    /// seven entries).
    #[error("invalid calendar: {0}")]
    InvalidCalendar(String),

    /// A roll with the `Raise` policy was applied to a non-business date.
    #[error("{0} is not a business day")]
    NonBusinessDay(String),

    /// The calendar has no business day within the bounded scan window.
    #[error("no business day reachable from {from} within {scanned} days")]
    NoBusinessDayReachable {
        /// The date the scan started from.
        from: String,
        /// Number of calendar days inspected before giving up.
        scanned: i64,
    },

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout busday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use busday_core::{ensure, errors::Error};
/// fn positive(x: i32) -> busday_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use busday_core::{fail, errors::Error};
/// fn always_err() -> busday_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
