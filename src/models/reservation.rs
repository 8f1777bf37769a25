//! Reservation intervals and the raw rows they are ingested from.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Number of minutes in a day; every minute-of-day value is below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Converts an hour and minute into minutes since midnight.
///
/// Returns `None` when the hour is outside `0..=23` or the minute outside
/// `0..=59`.
///
/// # Example
///
/// ```
/// use room_availability::models::minute_of_day;
///
/// assert_eq!(minute_of_day(10, 30), Some(630));
/// assert_eq!(minute_of_day(24, 0), None);
/// ```
pub fn minute_of_day(hour: u32, minute: u32) -> Option<u16> {
    if hour > 23 || minute > 59 {
        return None;
    }
    u16::try_from(hour * 60 + minute).ok()
}

/// A weekly recurring reservation, as a half-open `[start, end)` range of
/// minutes since midnight.
///
/// An interval with `start_minute >= end_minute` is kept exactly as it was
/// ingested; it is empty and never matches any containment or overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationInterval {
    /// Inclusive start, in minutes since midnight.
    pub start_minute: u16,
    /// Exclusive end, in minutes since midnight.
    pub end_minute: u16,
}

impl ReservationInterval {
    /// Creates an interval from minute-of-day bounds.
    pub fn new(start_minute: u16, end_minute: u16) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Creates an interval from hour/minute components.
    ///
    /// Returns `None` if any component is off the 24-hour clock.
    pub fn from_hm(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Option<Self> {
        Some(Self::new(
            minute_of_day(start_hour, start_minute)?,
            minute_of_day(end_hour, end_minute)?,
        ))
    }

    /// Returns `true` if the interval covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.start_minute >= self.end_minute
    }

    /// Half-open overlap with `[start, end)`.
    ///
    /// Intervals that merely touch do not overlap, and an empty interval
    /// overlaps nothing.
    pub fn overlaps(&self, start: u16, end: u16) -> bool {
        !self.is_empty() && self.start_minute < end && self.end_minute > start
    }

    /// The start bound as a wall-clock time.
    pub fn start_time(&self) -> Option<NaiveTime> {
        to_time(self.start_minute)
    }

    /// The end bound as a wall-clock time.
    pub fn end_time(&self) -> Option<NaiveTime> {
        to_time(self.end_minute)
    }
}

fn to_time(minute: u16) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(u32::from(minute / 60), u32::from(minute % 60), 0)
}

/// One reservation row exactly as the data source delivered it.
///
/// Every time field is kept as text; ingestion decides whether the row is
/// usable. Missing columns deserialize to `None` (or an empty string for
/// `room` and `weekday`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReservationRow {
    /// The room the reservation belongs to.
    #[serde(default)]
    pub room: String,
    /// The weekday token, canonical or convertible.
    #[serde(default)]
    pub weekday: String,
    /// Start hour as text.
    #[serde(default)]
    pub start_hour: Option<String>,
    /// Start minute as text.
    #[serde(default)]
    pub start_minute: Option<String>,
    /// End hour as text.
    #[serde(default)]
    pub end_hour: Option<String>,
    /// End minute as text.
    #[serde(default)]
    pub end_minute: Option<String>,
}

impl RawReservationRow {
    /// Builds a fully populated row from numeric components.
    pub fn new(
        room: impl Into<String>,
        weekday: impl Into<String>,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Self {
        Self {
            room: room.into(),
            weekday: weekday.into(),
            start_hour: Some(start.0.to_string()),
            start_minute: Some(start.1.to_string()),
            end_hour: Some(end.0.to_string()),
            end_minute: Some(end.1.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_of_day_bounds() {
        assert_eq!(minute_of_day(0, 0), Some(0));
        assert_eq!(minute_of_day(23, 59), Some(MINUTES_PER_DAY - 1));
        assert_eq!(minute_of_day(24, 0), None);
        assert_eq!(minute_of_day(9, 60), None);
    }

    #[test]
    fn test_from_hm_converts_to_minutes() {
        let interval = ReservationInterval::from_hm(9, 0, 10, 30).unwrap();
        assert_eq!(interval.start_minute, 540);
        assert_eq!(interval.end_minute, 630);
        assert!(!interval.is_empty());
    }

    #[test]
    fn test_non_monotonic_interval_is_kept_but_empty() {
        let interval = ReservationInterval::from_hm(18, 0, 9, 0).unwrap();
        assert_eq!(interval.start_minute, 1080);
        assert!(interval.is_empty());
        assert!(!interval.overlaps(0, MINUTES_PER_DAY));
    }

    #[test]
    fn test_overlap_is_half_open() {
        let interval = ReservationInterval::new(540, 600);
        assert!(interval.overlaps(510, 541));
        assert!(interval.overlaps(599, 700));
        assert!(!interval.overlaps(600, 700));
        assert!(!interval.overlaps(480, 540));
    }

    #[test]
    fn test_wall_clock_bounds() {
        let interval = ReservationInterval::new(545, 1439);
        assert_eq!(interval.start_time(), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(interval.end_time(), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn test_raw_row_new_fills_every_field() {
        let row = RawReservationRow::new("A101", "Mon", (9, 0), (10, 30));
        assert_eq!(row.start_hour.as_deref(), Some("9"));
        assert_eq!(row.end_minute.as_deref(), Some("30"));
    }
}
