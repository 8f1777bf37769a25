//! Canonical weekday vocabulary and the weekday normalizer.
//!
//! Every weekday token that enters the system, whether it comes from the
//! local clock, a schedule file or a query parameter, is translated into
//! [`Weekday`] before it is used as a schedule key.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A canonical day of the week.
///
/// The declaration order is Monday first; [`Weekday::index`] follows it.
///
/// # Example
///
/// ```
/// use room_availability::models::Weekday;
///
/// assert_eq!(Weekday::parse("Mon").unwrap(), Weekday::Mon);
/// assert_eq!(Weekday::parse("水").unwrap(), Weekday::Wed);
/// assert!(Weekday::parse("Funday").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// All seven weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Monday through Friday, the columns of the default weekly matrix.
    pub const SCHOOL_DAYS: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Returns the canonical symbol for this weekday.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Returns the zero-based position of this weekday, Monday being 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Normalizes a raw weekday token into a canonical weekday.
    ///
    /// Accepted forms are the English abbreviations produced by a `%a`
    /// clock format, full English day names (both case-insensitive), and
    /// the single-character Japanese day symbols used by the schedule files.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnrecognizedWeekday`] for any other token.
    pub fn parse(token: &str) -> EngineResult<Self> {
        let trimmed = token.trim();

        let weekday = match trimmed {
            "月" => Some(Weekday::Mon),
            "火" => Some(Weekday::Tue),
            "水" => Some(Weekday::Wed),
            "木" => Some(Weekday::Thu),
            "金" => Some(Weekday::Fri),
            "土" => Some(Weekday::Sat),
            "日" => Some(Weekday::Sun),
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "mon" | "monday" => Some(Weekday::Mon),
                "tue" | "tuesday" => Some(Weekday::Tue),
                "wed" | "wednesday" => Some(Weekday::Wed),
                "thu" | "thursday" => Some(Weekday::Thu),
                "fri" | "friday" => Some(Weekday::Fri),
                "sat" | "saturday" => Some(Weekday::Sat),
                "sun" | "sunday" => Some(Weekday::Sun),
                _ => None,
            },
        };

        weekday.ok_or_else(|| EngineError::UnrecognizedWeekday {
            token: token.to_string(),
        })
    }

    /// Derives the weekday of a local-clock timestamp.
    ///
    /// The timestamp is rendered as an abbreviated day name and passed
    /// through [`Weekday::parse`], so the clock goes through the same
    /// normalization as every other token.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnrecognizedWeekday`] if the rendered token
    /// is not recognized.
    pub fn from_clock(now: NaiveDateTime) -> EngineResult<Self> {
        Self::parse(&now.format("%a").to_string())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

impl From<NaiveDateTime> for Weekday {
    fn from(datetime: NaiveDateTime) -> Self {
        datetime.weekday().into()
    }
}

impl FromStr for Weekday {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Weekday {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
