//! Period/day overlap test.
//!
//! Decides whether a class period on a given weekday collides with any
//! reservation of a room, using half-open interval overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Period, PeriodId, PeriodTable, ReservationInterval};

use super::schedule_index::ScheduleIndex;

/// Whether a room is reserved during a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// No reservation overlaps the period.
    Free,
    /// At least one reservation overlaps the period.
    Reserved,
}

impl PeriodStatus {
    /// Returns `true` for [`PeriodStatus::Free`].
    pub fn is_free(self) -> bool {
        self == PeriodStatus::Free
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodStatus::Free => write!(f, "Free"),
            PeriodStatus::Reserved => write!(f, "Reserved"),
        }
    }
}

/// Tests a list of reservations against an already resolved period.
///
/// Reserved iff some interval satisfies
/// `res_start < period_end && res_end > period_start`.
pub fn period_status(intervals: &[ReservationInterval], period: &Period) -> PeriodStatus {
    if intervals
        .iter()
        .any(|interval| interval.overlaps(period.start_minute, period.end_minute))
    {
        PeriodStatus::Reserved
    } else {
        PeriodStatus::Free
    }
}

/// Determines whether `room` is free for `period` on `weekday`.
///
/// `weekday` may be a [`crate::models::Weekday`] or any caller-supplied
/// token. A token that does not name a weekday matches no reservations and
/// the room reads as free.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnknownPeriod`] if `period` is not
/// in the table.
///
/// # Example
///
/// ```
/// use room_availability::availability::{PeriodStatus, ScheduleIndex, is_free_for_period};
/// use room_availability::models::{PeriodTable, RawReservationRow};
///
/// let rows = vec![RawReservationRow::new("B", "Mon", (9, 0), (9, 30))];
/// let (index, _) = ScheduleIndex::build(&rows);
/// let periods = PeriodTable::default();
///
/// // Period 1 is 08:30-10:00
/// assert_eq!(is_free_for_period(&index, &periods, "B", "Mon", 1).unwrap(), PeriodStatus::Reserved);
/// assert_eq!(is_free_for_period(&index, &periods, "B", "Mon", 2).unwrap(), PeriodStatus::Free);
/// assert!(is_free_for_period(&index, &periods, "B", "Mon", 9).is_err());
/// ```
pub fn is_free_for_period(
    index: &ScheduleIndex,
    periods: &PeriodTable,
    room: &str,
    weekday: impl AsRef<str>,
    period: PeriodId,
) -> EngineResult<PeriodStatus> {
    let period = periods.resolve(period)?;
    Ok(period_status(
        index.intervals_for_token(room, weekday.as_ref()),
        period,
    ))
}
