//! The seven-flag weekly template of eligible business
//! weekdays.

use std::str::FromStr;

use crate::weekday::Weekday;
use busday_core::errors::{Error, Result};

/// Which weekdays (Monday … Sunday) are eligible to be business days absent
/// holidays.
///
/// An all-`false` pattern is accepted but yields a calendar with no business
/// days at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekPattern([bool; 7]);

impl WeekPattern {
    /// Monday to Friday.
    pub const MONDAY_TO_FRIDAY: WeekPattern =
        WeekPattern([true, true, true, true, true, false, false]);

    /// Every day of the week.
    pub const ALL_DAYS: WeekPattern = WeekPattern([true; 7]);

    /// Create a pattern from seven flags, Monday first.
    pub fn new(flags: [bool; 7]) -> Self {
        Self(flags)
    }

    /// Create a pattern from a slice, which must hold exactly seven flags.
    pub fn try_from_slice(flags: &[bool]) -> Result<Self> {
        let flags: [bool; 7] = flags.try_into().map_err(|_| {
            Error::InvalidCalendar(format!(
                "week pattern needs 7 entries, got {}",
                flags.len()
            ))
        })?;
        Ok(Self(flags))
    }

    /// Create a pattern where every weekday except `weekend` is eligible.
    pub fn from_weekend(weekend: &[Weekday]) -> Self {
        let mut flags = [true; 7];
        for w in weekend {
            flags[w.index()] = false;
        }
        Self(flags)
    }

    /// The seven flags, Monday first.
    pub fn flags(&self) -> [bool; 7] {
        self.0
    }

    /// Whether `weekday` is eligible to be a business day.
    pub fn is_business_weekday(&self, weekday: Weekday) -> bool {
        self.0[weekday.index()]
    }

    /// Whether the weekday with zero-based `index` (0 = Monday) is eligible.
    #[inline]
    pub(crate) fn is_set(&self, index: u8) -> bool {
        self.0[index as usize]
    }

    /// Number of eligible weekdays (0–7).
    pub fn business_days_per_week(&self) -> i32 {
        self.0.iter().filter(|&&f| f).count() as i32
    }

    /// `true` if no weekday is eligible.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&f| f)
    }
}

impl Default for WeekPattern {
    fn default() -> Self {
        Self::MONDAY_TO_FRIDAY
    }
}

impl TryFrom<&[bool]> for WeekPattern {
    type Error = Error;

    fn try_from(flags: &[bool]) -> Result<Self> {
        Self::try_from_slice(flags)
    }
}

impl TryFrom<Vec<bool>> for WeekPattern {
    type Error = Error;

    fn try_from(flags: Vec<bool>) -> Result<Self> {
        Self::try_from_slice(&flags)
    }
}

/// Renders the `0`/`1` mask, e.g. `1111100`.
impl std::fmt::Display for WeekPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &flag in &self.0 {
            f.write_str(if flag { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Parses either a seven character `0`/`1` mask (`"1111100"`) or a
/// whitespace-separated list of eligible weekdays (`"Mon Tue Wed Thu Fri"`).
impl FromStr for WeekPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c == '0' || c == '1') {
            let flags: Vec<bool> = s.chars().map(|c| c == '1').collect();
            return Self::try_from_slice(&flags);
        }

        let mut flags = [false; 7];
        for token in s.split_whitespace() {
            let weekday: Weekday = token.parse().map_err(|_| {
                Error::InvalidCalendar(format!("unknown weekday '{token}' in week pattern '{s}'"))
            })?;
            flags[weekday.index()] = true;
        }
        if s.is_empty() {
            return Err(Error::InvalidCalendar("empty week pattern".into()));
        }
        Ok(Self(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length_is_checked() {
        assert!(WeekPattern::try_from_slice(&[true; 7]).is_ok());
        let err = WeekPattern::try_from_slice(&[true; 6]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCalendar("week pattern needs 7 entries, got 6".into())
        );
        assert!(WeekPattern::try_from(vec![true; 8]).is_err());
    }

    #[test]
    fn parse_mask() {
        let p: WeekPattern = "1111110".parse().unwrap();
        assert_eq!(p.business_days_per_week(), 6);
        assert!(p.is_business_weekday(Weekday::Saturday));
        assert!(!p.is_business_weekday(Weekday::Sunday));
        assert_eq!(p.to_string(), "1111110");
        assert!("111110".parse::<WeekPattern>().is_err());
    }

    #[test]
    fn parse_names() {
        let p: WeekPattern = "Mon Tue Wed Thu Fri".parse().unwrap();
        assert_eq!(p, WeekPattern::MONDAY_TO_FRIDAY);
        let p: WeekPattern = "Sun Thu".parse().unwrap();
        assert_eq!(p.to_string(), "0001001");
        assert!("Mon Xyz".parse::<WeekPattern>().is_err());
        assert!("".parse::<WeekPattern>().is_err());
    }

    #[test]
    fn weekend_and_empty() {
        let p = WeekPattern::from_weekend(&[Weekday::Friday, Weekday::Saturday]);
        assert_eq!(p.to_string(), "1111001");
        assert!(!p.is_empty());
        assert!(WeekPattern::new([false; 7]).is_empty());
        assert_eq!(WeekPattern::new([false; 7]).business_days_per_week(), 0);
        assert_eq!(WeekPattern::default(), WeekPattern::MONDAY_TO_FRIDAY);
    }
}
