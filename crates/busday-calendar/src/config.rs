//! Serialisable calendar definition.
//!
//! [`CalendarSpecData`] is the on-disk shape of a [`CalendarSpec`]: a week
//! pattern in either text form accepted by [`WeekPattern`]'s `FromStr` and a
//! list of ISO-8601 holiday dates.  `CalendarSpec` (de)serialises through it,
//! so every serde format gets the same validation as the constructors.
//!
//! ```json
//! {
//!   "week_pattern": "Mon Tue Wed Thu Fri",
//!   "holidays": ["2025-07-04", "2025-12-25"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calendar_spec::CalendarSpec;
use crate::date::Date;
use crate::week_pattern::WeekPattern;
use busday_core::errors::{Error, Result};
use busday_core::fail;

fn default_week_pattern() -> String {
    WeekPattern::MONDAY_TO_FRIDAY.to_string()
}

/// Data model for loading and storing a [`CalendarSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarSpecData {
    /// `"1111100"` or `"Mon Tue Wed Thu Fri"`.  Defaults to Monday–Friday.
    #[serde(default = "default_week_pattern")]
    pub week_pattern: String,
    /// Holidays as `YYYY-MM-DD`.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl CalendarSpecData {
    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidCalendar(format!("failed to parse calendar JSON: {e}")))
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        match serde_json::to_string_pretty(self) {
            Ok(json) => Ok(json),
            Err(e) => fail!("failed to write calendar JSON: {e}"),
        }
    }
}

impl TryFrom<CalendarSpecData> for CalendarSpec {
    type Error = Error;

    fn try_from(data: CalendarSpecData) -> Result<Self> {
        let week: WeekPattern = data.week_pattern.parse()?;
        let holidays = data
            .holidays
            .iter()
            .map(|s| s.parse::<Date>())
            .collect::<Result<Vec<_>>>()?;
        Ok(CalendarSpec::new(week, holidays))
    }
}

impl From<CalendarSpec> for CalendarSpecData {
    fn from(cal: CalendarSpec) -> Self {
        Self {
            week_pattern: cal.week_pattern().to_string(),
            holidays: cal.holidays().iter().map(Date::to_string).collect(),
        }
    }
}
