//! Roll policy: how to resolve a date that falls on a non-business day.

use std::str::FromStr;

use busday_core::errors::{Error, Result};

/// How to move a non-business date onto a business date.
///
/// A business date is returned unchanged under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollPolicy {
    /// Choose the first business day on or after the date.
    Forward,
    /// Choose the first business day on or before the date.
    Backward,
    /// Choose the first business day after the date unless it belongs to a
    /// different month; in that case choose the first business day before.
    ModifiedFollowing,
    /// Choose the first business day before the date unless it belongs to a
    /// different month; in that case choose the first business day after.
    ModifiedPreceding,
    /// Fail with `NonBusinessDay` if the date is not a business day.
    Raise,
}

impl RollPolicy {
    /// Canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            RollPolicy::Forward => "forward",
            RollPolicy::Backward => "backward",
            RollPolicy::ModifiedFollowing => "modifiedfollowing",
            RollPolicy::ModifiedPreceding => "modifiedpreceding",
            RollPolicy::Raise => "raise",
        }
    }
}

impl std::fmt::Display for RollPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; `following` and `preceding` are accepted as aliases of
/// `forward` and `backward`.
impl FromStr for RollPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "following" => Ok(RollPolicy::Forward),
            "backward" | "preceding" => Ok(RollPolicy::Backward),
            "modifiedfollowing" => Ok(RollPolicy::ModifiedFollowing),
            "modifiedpreceding" => Ok(RollPolicy::ModifiedPreceding),
            "raise" => Ok(RollPolicy::Raise),
            _ => Err(Error::InvalidArgument(format!("unknown roll policy '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for p in [
            RollPolicy::Forward,
            RollPolicy::Backward,
            RollPolicy::ModifiedFollowing,
            RollPolicy::ModifiedPreceding,
            RollPolicy::Raise,
        ] {
            assert_eq!(p.to_string().parse::<RollPolicy>().unwrap(), p);
        }
        assert_eq!("Following".parse::<RollPolicy>().unwrap(), RollPolicy::Forward);
        assert_eq!("PRECEDING".parse::<RollPolicy>().unwrap(), RollPolicy::Backward);
        assert!(matches!(
            "nat".parse::<RollPolicy>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
