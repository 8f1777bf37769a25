//! Point-in-time room status.
//!
//! Answers "is this room in use right now?" for a timestamp on the local
//! clock. The timestamp is always supplied by the caller.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::Weekday;

use super::schedule_index::ScheduleIndex;

/// Whether a room is in use at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    /// No reservation covers the instant.
    Free,
    /// At least one reservation covers the instant.
    Occupied,
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupancy::Free => write!(f, "Free"),
            Occupancy::Occupied => write!(f, "Occupied"),
        }
    }
}

/// Determines whether `room` is occupied at `now` on `weekday`.
///
/// Each stored interval is placed on the date of `now` with seconds set to
/// zero, and the room is occupied if `start <= now < end` holds for any of
/// them. A room or weekday without reservations is free.
///
/// # Example
///
/// ```
/// use room_availability::availability::{Occupancy, ScheduleIndex, status_at};
/// use room_availability::models::{RawReservationRow, Weekday};
/// use chrono::NaiveDateTime;
///
/// let rows = vec![RawReservationRow::new("A101", "Mon", (9, 0), (10, 30))];
/// let (index, _) = ScheduleIndex::build(&rows);
///
/// // 2026-01-12 is a Monday
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(status_at(&index, "A101", Weekday::Mon, at("2026-01-12 09:15:00")), Occupancy::Occupied);
/// assert_eq!(status_at(&index, "A101", Weekday::Mon, at("2026-01-12 10:30:00")), Occupancy::Free);
/// ```
pub fn status_at(
    index: &ScheduleIndex,
    room: &str,
    weekday: Weekday,
    now: NaiveDateTime,
) -> Occupancy {
    let date = now.date();

    let occupied = index.intervals(room, weekday).iter().any(|interval| {
        match (interval.start_time(), interval.end_time()) {
            (Some(start), Some(end)) => date.and_time(start) <= now && now < date.and_time(end),
            _ => false,
        }
    });

    if occupied {
        Occupancy::Occupied
    } else {
        Occupancy::Free
    }
}

/// Determines whether `room` is occupied at `now`, deriving the weekday
/// from the clock reading itself.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnrecognizedWeekday`] if the weekday
/// of `now` cannot be normalized; "today" is then unknown.
pub fn current_status(
    index: &ScheduleIndex,
    room: &str,
    now: NaiveDateTime,
) -> EngineResult<Occupancy> {
    let weekday = Weekday::from_clock(now)?;
    Ok(status_at(index, room, weekday, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawReservationRow;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn index_of(rows: &[RawReservationRow]) -> ScheduleIndex {
        ScheduleIndex::build(rows).0
    }

    #[test]
    fn test_inside_reservation_is_occupied() {
        let index = index_of(&[RawReservationRow::new("A101", "Mon", (9, 0), (10, 30))]);
        let now = make_datetime("2026-01-12 09:15:00");

        assert_eq!(
            status_at(&index, "A101", Weekday::Mon, now),
            Occupancy::Occupied
        );
    }

    #[test]
    fn test_start_is_inclusive_end_is_exclusive() {
        let index = index_of(&[RawReservationRow::new("A101", "Mon", (9, 0), (10, 30))]);

        assert_eq!(
            status_at(&index, "A101", Weekday::Mon, make_datetime("2026-01-12 09:00:00")),
            Occupancy::Occupied
        );
        assert_eq!(
            status_at(&index, "A101", Weekday::Mon, make_datetime("2026-01-12 10:29:59")),
            Occupancy::Occupied
        );
        assert_eq!(
            status_at(&index, "A101", Weekday::Mon, make_datetime("2026-01-12 10:30:00")),
            Occupancy::Free
        );
        assert_eq!(
            status_at(&index, "A101", Weekday::Mon, make_datetime("2026-01-12 08:59:59")),
            Occupancy::Free
        );
    }

    #[test]
    fn test_unknown_room_and_empty_day_are_free() {
        let index = index_of(&[RawReservationRow::new("A101", "Mon", (9, 0), (10, 30))]);
        let now = make_datetime("2026-01-13 09:15:00");

        assert_eq!(status_at(&index, "Z999", Weekday::Tue, now), Occupancy::Free);
        assert_eq!(status_at(&index, "A101", Weekday::Tue, now), Occupancy::Free);
    }

    #[test]
    fn test_any_of_overlapping_reservations_occupies() {
        let index = index_of(&[
            RawReservationRow::new("B202", "Thu", (12, 0), (12, 30)),
            RawReservationRow::new("B202", "Thu", (12, 15), (12, 45)),
        ]);

        // 2026-01-15 is a Thursday
        assert_eq!(
            status_at(&index, "B202", Weekday::Thu, make_datetime("2026-01-15 12:35:00")),
            Occupancy::Occupied
        );
        assert_eq!(
            status_at(&index, "B202", Weekday::Thu, make_datetime("2026-01-15 12:45:00")),
            Occupancy::Free
        );
    }

    #[test]
    fn test_non_monotonic_reservation_never_occupies() {
        let index = index_of(&[RawReservationRow::new("B202", "Fri", (18, 0), (9, 0))]);

        for time in ["08:00:00", "12:00:00", "18:00:00", "23:00:00"] {
            let now = make_datetime(&format!("2026-01-16 {}", time));
            assert_eq!(status_at(&index, "B202", Weekday::Fri, now), Occupancy::Free);
        }
    }

    #[test]
    fn test_current_status_uses_clock_weekday() {
        let index = index_of(&[RawReservationRow::new("A101", "水", (8, 30), (10, 0))]);

        // 2026-01-14 is a Wednesday, 2026-01-15 a Thursday
        assert_eq!(
            current_status(&index, "A101", make_datetime("2026-01-14 09:00:00")).unwrap(),
            Occupancy::Occupied
        );
        assert_eq!(
            current_status(&index, "A101", make_datetime("2026-01-15 09:00:00")).unwrap(),
            Occupancy::Free
        );
    }

    #[test]
    fn test_occupancy_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Occupancy::Occupied).unwrap(),
            "\"occupied\""
        );
    }
}
